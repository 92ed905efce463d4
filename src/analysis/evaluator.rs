//! Per-medication evaluation against the knowledge base.

use crate::knowledge::DrugKnowledgeBase;
use crate::models::{PatientProfile, PrescribedMedication};

use super::age;
use super::messages::{CONSULT_PROVIDER_ALTERNATIVE, DRUG_NOT_FOUND_WARNING};
use super::types::MedicationFinding;

/// Evaluate one prescribed medication. Never fails: an unknown drug
/// degrades to a finding that says so.
pub fn evaluate(
    kb: &DrugKnowledgeBase,
    patient: &PatientProfile,
    medication: &PrescribedMedication,
) -> MedicationFinding {
    let display_name = medication.display_name();

    match kb.lookup_drug(&medication.name) {
        Some((_, profile)) => {
            let age_appropriate = age::is_age_appropriate(profile, patient.age);
            tracing::debug!(
                drug = %display_name,
                age_group = age::classify(patient.age).as_str(),
                age_appropriate,
                "medication evaluated",
            );

            MedicationFinding {
                display_name,
                dosage: medication.dosage.clone(),
                frequency: medication.frequency.clone(),
                age_appropriate,
                // No quantitative dosage validation exists yet.
                dosage_appropriate: true,
                suggested_alternatives: profile.alternative_drugs.clone(),
                warnings: profile.contraindications.clone(),
                profile: Some(profile.clone()),
                known_drug: true,
            }
        }
        None => {
            tracing::debug!(drug = %display_name, "medication not in knowledge base");

            MedicationFinding {
                display_name,
                dosage: medication.dosage.clone(),
                frequency: medication.frequency.clone(),
                profile: None,
                age_appropriate: true,
                dosage_appropriate: true,
                suggested_alternatives: vec![CONSULT_PROVIDER_ALTERNATIVE.to_string()],
                warnings: vec![DRUG_NOT_FOUND_WARNING.to_string()],
                known_drug: false,
            }
        }
    }
}
