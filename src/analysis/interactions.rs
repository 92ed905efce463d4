//! Pairwise interaction checking across a prescription.

use crate::knowledge::DrugKnowledgeBase;
use crate::models::PrescribedMedication;

use super::types::InteractionFinding;

/// Check every unordered medication pair against the interaction
/// table, each pair exactly once. O(n²) over the prescription, which
/// stays small in practice. A pair missing from the table produces no
/// finding; the recommender communicates the residual uncertainty.
pub fn check_interactions(
    kb: &DrugKnowledgeBase,
    medications: &[PrescribedMedication],
) -> Vec<InteractionFinding> {
    let mut findings = Vec::new();

    for (i, med_a) in medications.iter().enumerate() {
        for med_b in &medications[i + 1..] {
            if let Some(record) = kb.lookup_interaction(&med_a.name, &med_b.name) {
                findings.push(InteractionFinding {
                    drug_a: med_a.display_name(),
                    drug_b: med_b.display_name(),
                    severity: record.severity,
                    description: record.description.clone(),
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn meds(names: &[&str]) -> Vec<PrescribedMedication> {
        names
            .iter()
            .map(|n| PrescribedMedication::new(*n, "1 dose", "daily"))
            .collect()
    }

    #[test]
    fn warfarin_aspirin_flagged_once() {
        let kb = DrugKnowledgeBase::builtin();
        let findings = check_interactions(&kb, &meds(&["Warfarin", "Aspirin"]));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].drug_a, "Warfarin");
        assert_eq!(findings[0].drug_b, "Aspirin");
    }

    #[test]
    fn order_of_entry_does_not_matter() {
        let kb = DrugKnowledgeBase::builtin();
        let forward = check_interactions(&kb, &meds(&["Warfarin", "Aspirin"]));
        let reversed = check_interactions(&kb, &meds(&["Aspirin", "Warfarin"]));

        assert_eq!(forward.len(), reversed.len());
        assert_eq!(forward[0].severity, reversed[0].severity);
        assert_eq!(forward[0].description, reversed[0].description);
    }

    #[test]
    fn three_drugs_check_all_pairs() {
        let kb = DrugKnowledgeBase::builtin();
        // warfarin+aspirin (high), warfarin+ibuprofen (high),
        // aspirin+ibuprofen (moderate)
        let findings = check_interactions(&kb, &meds(&["Warfarin", "Aspirin", "Ibuprofen"]));
        assert_eq!(findings.len(), 3, "every unordered pair probed once");
    }

    #[test]
    fn brand_name_resolves_before_probe() {
        let kb = DrugKnowledgeBase::builtin();
        let findings = check_interactions(&kb, &meds(&["Warfarin", "Paracetamol"]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Moderate);

        let via_generic = check_interactions(&kb, &meds(&["Warfarin", "Acetaminophen"]));
        assert_eq!(via_generic.len(), 1);
        assert_eq!(via_generic[0].description, findings[0].description);
    }

    #[test]
    fn unlisted_pairs_emit_nothing() {
        let kb = DrugKnowledgeBase::builtin();
        let findings = check_interactions(&kb, &meds(&["Paracetamol", "Amoxicillin"]));
        assert!(findings.is_empty(), "absence of evidence, not a finding");
    }

    #[test]
    fn empty_and_single_prescriptions_have_no_pairs() {
        let kb = DrugKnowledgeBase::builtin();
        assert!(check_interactions(&kb, &[]).is_empty());
        assert!(check_interactions(&kb, &meds(&["Warfarin"])).is_empty());
    }
}
