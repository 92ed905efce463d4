//! Composite safety scoring.
//!
//! Linear, order-independent and saturating: start from 100, deduct a
//! fixed amount per risk factor, floor at 0. Reproducibility depends
//! on these exact amounts, so they are not configurable.

use super::types::{InteractionFinding, MedicationFinding};

const WARNING_PENALTY: u32 = 5;
const AGE_PENALTY: u32 = 20;
const DOSAGE_PENALTY: u32 = 10;
const UNKNOWN_DRUG_PENALTY: u32 = 15;

/// Aggregate the per-drug findings and interactions into a 0-100 score.
pub fn safety_score(
    medications: &[MedicationFinding],
    interactions: &[InteractionFinding],
) -> u8 {
    let mut deductions: u32 = 0;

    for interaction in interactions {
        deductions += interaction.severity.score_penalty();
    }

    for finding in medications {
        deductions += finding.warnings.len() as u32 * WARNING_PENALTY;
        if !finding.age_appropriate {
            deductions += AGE_PENALTY;
        }
        if !finding.dosage_appropriate {
            deductions += DOSAGE_PENALTY;
        }
        if !finding.known_drug {
            deductions += UNKNOWN_DRUG_PENALTY;
        }
    }

    100u32.saturating_sub(deductions) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn clean_finding(name: &str) -> MedicationFinding {
        MedicationFinding {
            display_name: name.to_string(),
            dosage: "1 dose".into(),
            frequency: "daily".into(),
            profile: None,
            age_appropriate: true,
            dosage_appropriate: true,
            suggested_alternatives: vec![],
            warnings: vec![],
            known_drug: true,
        }
    }

    fn interaction(severity: Severity) -> InteractionFinding {
        InteractionFinding {
            drug_a: "A".into(),
            drug_b: "B".into(),
            severity,
            description: String::new(),
        }
    }

    #[test]
    fn empty_prescription_scores_100() {
        assert_eq!(safety_score(&[], &[]), 100);
    }

    #[test]
    fn interaction_penalties_by_severity() {
        assert_eq!(safety_score(&[], &[interaction(Severity::High)]), 70);
        assert_eq!(safety_score(&[], &[interaction(Severity::Moderate)]), 85);
        assert_eq!(safety_score(&[], &[interaction(Severity::Low)]), 95);
    }

    #[test]
    fn warnings_deduct_five_each() {
        let mut finding = clean_finding("Paracetamol");
        finding.warnings = vec!["liver disease".into(), "alcohol dependency".into()];
        assert_eq!(safety_score(&[finding], &[]), 90);
    }

    #[test]
    fn unknown_drug_deducts_fifteen_plus_its_warning() {
        let mut finding = clean_finding("Zyloxatin");
        finding.known_drug = false;
        finding.warnings = vec!["Drug not found in database - manual verification required".into()];
        // 15 for the unknown factor itself, 5 for its single warning.
        assert_eq!(safety_score(&[finding], &[]), 80);
    }

    #[test]
    fn age_penalty_deducts_twenty() {
        let finding = MedicationFinding {
            age_appropriate: false,
            ..clean_finding("Aspirin")
        };
        assert_eq!(safety_score(&[finding], &[]), 80);
    }

    #[test]
    fn dosage_penalty_deducts_ten() {
        let finding = MedicationFinding {
            dosage_appropriate: false,
            ..clean_finding("Aspirin")
        };
        assert_eq!(safety_score(&[finding], &[]), 90);
    }

    #[test]
    fn score_floors_at_zero() {
        let interactions: Vec<_> = (0..5).map(|_| interaction(Severity::High)).collect();
        assert_eq!(safety_score(&[], &interactions), 0, "clamped, never negative");
    }

    #[test]
    fn score_is_order_independent() {
        let a = interaction(Severity::High);
        let b = interaction(Severity::Low);
        assert_eq!(
            safety_score(&[], &[a.clone(), b.clone()]),
            safety_score(&[], &[b, a]),
        );
    }
}
