//! Message template builder for consistent advisory wording.

/// Warning attached to a medication the knowledge base does not know.
pub const DRUG_NOT_FOUND_WARNING: &str =
    "Drug not found in database - manual verification required";

/// Alternatives placeholder for unknown medications.
pub const CONSULT_PROVIDER_ALTERNATIVE: &str =
    "Consult healthcare provider for alternatives";

pub struct MessageTemplates;

impl MessageTemplates {
    /// Leading advisory when the overall score falls below the
    /// consult threshold.
    pub fn urgent_consult() -> String {
        "URGENT: Consult with your healthcare provider before taking these medications"
            .to_string()
    }

    /// High-severity interaction advisory.
    pub fn avoid_combination(drug_a: &str, drug_b: &str) -> String {
        format!("HIGH RISK: Avoid combining {} with {}", drug_a, drug_b)
    }

    /// Moderate-severity interaction advisory.
    pub fn monitor_combination(drug_a: &str, drug_b: &str) -> String {
        format!(
            "MODERATE RISK: Monitor closely when taking {} with {}",
            drug_a, drug_b,
        )
    }

    /// Age-inappropriate medication advisory.
    pub fn age_concern(medication: &str) -> String {
        format!(
            "AGE CONCERN: {} may not be appropriate for this age group",
            medication,
        )
    }

    /// Combined contraindication advisory, comma-joined.
    pub fn check_warnings(medication: &str, warnings: &[String]) -> String {
        format!("{}: Check for {}", medication, warnings.join(", "))
    }

    /// Unknown-drug advisory.
    pub fn manual_verification(medication: &str) -> String {
        format!(
            "{}: Not in database - requires manual verification",
            medication,
        )
    }

    /// Emitted alone when no other advisory applies.
    pub fn no_major_concerns() -> String {
        "No major safety concerns identified".to_string()
    }

    /// Fixed general-care advisories appended to every result.
    pub fn general_care() -> [&'static str; 3] {
        [
            "Always take medications as prescribed by your healthcare provider",
            "Maintain consistent timing for medication doses",
            "Stay hydrated while taking medications",
        ]
    }
}
