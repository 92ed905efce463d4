//! Static drug and interaction reference data.
//!
//! The knowledge base is compiled into the crate, initialized once and
//! never mutated afterwards, so it is safe to share across concurrent
//! analysis calls. Drug names resolve through an alias map to a
//! `DrugId`, so brand and generic spellings of the same clinical
//! entity always land on a single profile.

mod data;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Severity;

/// Opaque handle to a drug profile in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrugId(usize);

/// Clinical profile of one drug. Dosing fields are human-readable
/// text, not machine-parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugProfile {
    pub generic_name: String,
    pub category: String,
    pub adult_dosage: String,
    pub max_daily_dose: String,
    pub pediatric_dosage: String,
    /// Minimum appropriate age in years, when the drug carries one.
    pub minimum_age: Option<u8>,
    pub contraindications: Vec<String>,
    pub side_effects: Vec<String>,
    /// Suggested substitutes. Not guaranteed to be known drugs.
    pub alternative_drugs: Vec<String>,
    /// Informational list; authoritative pair data lives in the
    /// interaction table.
    pub interacting_drugs: Vec<String>,
}

/// A known drug-drug interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub severity: Severity,
    pub description: String,
}

/// The static drug + interaction tables. Read-only after construction.
pub struct DrugKnowledgeBase {
    profiles: Vec<DrugProfile>,
    /// lowercase surface name -> profile id
    aliases: HashMap<String, DrugId>,
    /// canonicalized, lexicographically sorted name pair -> record
    interactions: HashMap<(String, String), InteractionRecord>,
}

impl DrugKnowledgeBase {
    /// The built-in data set.
    pub fn builtin() -> Self {
        let mut kb = Self {
            profiles: Vec::new(),
            aliases: HashMap::new(),
            interactions: HashMap::new(),
        };

        for (profile, names) in data::builtin_profiles() {
            let id = DrugId(kb.profiles.len());
            for name in names {
                kb.aliases.insert(name.to_string(), id);
            }
            kb.profiles.push(profile);
        }

        for (a, b, severity, description) in data::builtin_interactions() {
            let key = kb.pair_key(a, b);
            kb.interactions.insert(
                key,
                InteractionRecord {
                    severity,
                    description: description.to_string(),
                },
            );
        }

        kb
    }

    /// Exact, case-insensitive drug lookup. No fuzzy matching.
    pub fn lookup_drug(&self, name: &str) -> Option<(DrugId, &DrugProfile)> {
        let id = *self.aliases.get(&name.trim().to_lowercase())?;
        Some((id, &self.profiles[id.0]))
    }

    /// Canonical form of a drug name: the generic name for known
    /// aliases, otherwise the trimmed lowercase input.
    pub fn canonical_name(&self, name: &str) -> String {
        match self.lookup_drug(name) {
            Some((_, profile)) => profile.generic_name.to_lowercase(),
            None => name.trim().to_lowercase(),
        }
    }

    /// Interaction lookup. Argument order never matters: both names
    /// are canonicalized and sorted before probing the table.
    pub fn lookup_interaction(&self, a: &str, b: &str) -> Option<&InteractionRecord> {
        self.interactions.get(&self.pair_key(a, b))
    }

    fn pair_key(&self, a: &str, b: &str) -> (String, String) {
        let a = self.canonical_name(a);
        let b = self.canonical_name(b);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// All profiles, for database browsing in the presentation layer.
    pub fn profiles(&self) -> impl Iterator<Item = (DrugId, &DrugProfile)> {
        self.profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (DrugId(i), p))
    }

    pub fn drug_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let kb = DrugKnowledgeBase::builtin();
        assert!(kb.lookup_drug("Paracetamol").is_some());
        assert!(kb.lookup_drug("PARACETAMOL").is_some());
        assert!(kb.lookup_drug("  ibuprofen  ").is_some());
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let kb = DrugKnowledgeBase::builtin();
        assert!(kb.lookup_drug("paracetamo").is_none(), "no fuzzy matching");
        assert!(kb.lookup_drug("paracetamol 500mg").is_none());
    }

    #[test]
    fn brand_and_generic_share_one_profile() {
        let kb = DrugKnowledgeBase::builtin();
        let (id_a, _) = kb.lookup_drug("paracetamol").unwrap();
        let (id_b, _) = kb.lookup_drug("acetaminophen").unwrap();
        assert_eq!(id_a, id_b, "aliases must resolve to the same DrugId");
    }

    #[test]
    fn interaction_lookup_is_symmetric() {
        let kb = DrugKnowledgeBase::builtin();
        let ab = kb.lookup_interaction("Warfarin", "Aspirin").unwrap();
        let ba = kb.lookup_interaction("Aspirin", "Warfarin").unwrap();
        assert_eq!(ab.severity, ba.severity);
        assert_eq!(ab.description, ba.description);
    }

    #[test]
    fn interaction_resolves_through_aliases() {
        let kb = DrugKnowledgeBase::builtin();
        let via_paracetamol = kb.lookup_interaction("warfarin", "paracetamol");
        let via_acetaminophen = kb.lookup_interaction("warfarin", "acetaminophen");
        assert!(via_paracetamol.is_some());
        assert!(via_acetaminophen.is_some());
        assert_eq!(
            via_paracetamol.unwrap().description,
            via_acetaminophen.unwrap().description,
        );
    }

    #[test]
    fn warfarin_aspirin_is_high() {
        let kb = DrugKnowledgeBase::builtin();
        let record = kb.lookup_interaction("warfarin", "aspirin").unwrap();
        assert_eq!(record.severity, Severity::High);
    }

    #[test]
    fn unknown_pair_is_absent() {
        let kb = DrugKnowledgeBase::builtin();
        assert!(kb.lookup_interaction("paracetamol", "ibuprofen").is_none());
        assert!(kb.lookup_interaction("zyloxatin", "warfarin").is_none());
    }

    #[test]
    fn aspirin_minimum_age_is_structured() {
        let kb = DrugKnowledgeBase::builtin();
        let (_, aspirin) = kb.lookup_drug("aspirin").unwrap();
        assert_eq!(aspirin.minimum_age, Some(16));
        let (_, metformin) = kb.lookup_drug("metformin").unwrap();
        assert_eq!(metformin.minimum_age, Some(10));
        let (_, paracetamol) = kb.lookup_drug("paracetamol").unwrap();
        assert_eq!(paracetamol.minimum_age, None);
    }

    #[test]
    fn counts_match_builtin_data() {
        let kb = DrugKnowledgeBase::builtin();
        assert_eq!(kb.drug_count(), 7, "seven profiles after alias merge");
        assert_eq!(kb.interaction_count(), 7, "seven canonical pairs");
        assert_eq!(kb.profiles().count(), kb.drug_count());
    }
}
