use serde::{Deserialize, Serialize};

/// Patient details for one analysis request. Constructed fresh per
/// request by the caller; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
}

impl PatientProfile {
    pub fn new(name: impl Into<String>, age: u32, weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            age,
            weight_kg,
        }
    }
}
