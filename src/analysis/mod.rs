//! The rule-based evaluation engine: per-drug findings, pairwise
//! interaction checks, composite scoring and advisories.

pub mod age;
pub mod evaluator;
pub mod interactions;
pub mod messages;
pub mod recommend;
pub mod scoring;
pub mod types;

use thiserror::Error;

use crate::config::MAX_PATIENT_AGE;
use crate::knowledge::DrugKnowledgeBase;
use crate::models::{PatientProfile, PrescribedMedication};

pub use types::{AnalysisResult, HomeCareAdvice, InteractionFinding, MedicationFinding};

/// Invalid caller input, rejected before any evaluation runs. Data
/// that merely isn't in the knowledge base is never an error.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Patient name is required")]
    MissingPatientName,

    #[error("Patient weight must be positive, got {0}kg")]
    NonPositiveWeight(f64),

    #[error("Patient age {0} exceeds the supported maximum of {MAX_PATIENT_AGE}")]
    AgeOutOfRange(u32),

    #[error("Prescription contains no medications")]
    EmptyPrescription,

    #[error("Medication at position {0} has no name")]
    BlankMedicationName(usize),
}

/// Run a full prescription analysis.
///
/// Deterministic: identical inputs produce identical results. The
/// knowledge base is the only shared state and is never mutated, so
/// concurrent calls are safe.
pub fn analyze(
    kb: &DrugKnowledgeBase,
    patient: &PatientProfile,
    medications: &[PrescribedMedication],
) -> Result<AnalysisResult, AnalysisError> {
    validate_input(patient, medications)?;

    tracing::info!(
        patient_age = patient.age,
        medication_count = medications.len(),
        "analyzing prescription",
    );

    let findings: Vec<MedicationFinding> = medications
        .iter()
        .map(|med| evaluator::evaluate(kb, patient, med))
        .collect();

    let interaction_findings = interactions::check_interactions(kb, medications);

    let safety_score = scoring::safety_score(&findings, &interaction_findings);

    let recommendations =
        recommend::generate_recommendations(safety_score, &findings, &interaction_findings);

    tracing::info!(
        safety_score,
        interactions = interaction_findings.len(),
        "analysis complete",
    );

    Ok(AnalysisResult {
        patient: patient.clone(),
        medications: findings,
        interactions: interaction_findings,
        safety_score,
        recommendations,
        home_care: recommend::home_care_advice(),
    })
}

fn validate_input(
    patient: &PatientProfile,
    medications: &[PrescribedMedication],
) -> Result<(), AnalysisError> {
    if patient.name.trim().is_empty() {
        return Err(AnalysisError::MissingPatientName);
    }
    if patient.weight_kg <= 0.0 {
        return Err(AnalysisError::NonPositiveWeight(patient.weight_kg));
    }
    if patient.age > MAX_PATIENT_AGE {
        return Err(AnalysisError::AgeOutOfRange(patient.age));
    }
    if medications.is_empty() {
        return Err(AnalysisError::EmptyPrescription);
    }
    for (i, med) in medications.iter().enumerate() {
        if med.name.trim().is_empty() {
            return Err(AnalysisError::BlankMedicationName(i));
        }
    }
    Ok(())
}
