use serde::{Deserialize, Serialize};

/// One prescribed medication as entered by the caller or produced by
/// the text extractor. All fields are free text; dosage and frequency
/// are echoed through analysis without unit validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl PrescribedMedication {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        }
    }

    /// Title-cased display form of the medication name.
    pub fn display_name(&self) -> String {
        title_case(self.name.trim())
    }
}

/// Title-case each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
