use serde::{Deserialize, Serialize};

use crate::knowledge::DrugProfile;
use crate::models::{PatientProfile, SafetyStatus, Severity};

/// Everything the engine derived about one prescribed medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationFinding {
    /// Title-cased display form of the entered name.
    pub display_name: String,
    /// Dosage as entered, echoed without validation.
    pub dosage: String,
    /// Frequency as entered, echoed without validation.
    pub frequency: String,
    /// Matched profile; absent for drugs the knowledge base does not know.
    pub profile: Option<DrugProfile>,
    pub age_appropriate: bool,
    /// Placeholder: no quantitative dosage check exists yet, so this
    /// is always true.
    pub dosage_appropriate: bool,
    pub suggested_alternatives: Vec<String>,
    /// Contraindication names, or the single not-found notice.
    pub warnings: Vec<String>,
    pub known_drug: bool,
}

/// One flagged drug pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionFinding {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    pub description: String,
}

/// One row of the fixed home-care table attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeCareAdvice {
    pub category: String,
    pub recommendation: String,
    pub benefit: String,
}

/// Complete outcome of one analysis call. Pure function of its
/// inputs: no clock, no randomness, no cross-call state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub patient: PatientProfile,
    pub medications: Vec<MedicationFinding>,
    pub interactions: Vec<InteractionFinding>,
    /// Deterministic aggregate risk, 0 (worst) to 100 (best).
    pub safety_score: u8,
    pub recommendations: Vec<String>,
    pub home_care: Vec<HomeCareAdvice>,
}

impl AnalysisResult {
    /// Banner bucket for this score; shared by UI and report.
    pub fn status(&self) -> SafetyStatus {
        SafetyStatus::from_score(self.safety_score)
    }
}
