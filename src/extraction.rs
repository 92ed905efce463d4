//! Best-effort extraction of medications from free-text prescriptions.
//!
//! A cascade of four dose patterns with progressively looser frequency
//! syntax, then a crude token scan as a last resort. This is a
//! heuristic, not a grammar: matches are collected from every pattern
//! without deduplication, so repeated mentions (or a span that
//! satisfies more than one pattern) yield repeated records. Callers
//! decide how to treat duplicates.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::medication::title_case;
use crate::models::PrescribedMedication;

/// A compiled dose pattern. `captures_frequency` marks whether group 4
/// holds a per-day count to echo back.
struct DosePattern {
    regex: Regex,
    captures_frequency: bool,
}

fn pattern(re: &str, captures_frequency: bool) -> DosePattern {
    DosePattern {
        regex: Regex::new(re).expect("Invalid dose pattern"),
        captures_frequency,
    }
}

/// The cascade, strictest frequency syntax first. Input is lower-cased
/// before matching. Groups: 1 name, 2 dose number, 3 unit, 4 frequency
/// count where present.
static DOSE_PATTERNS: LazyLock<Vec<DosePattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g|ml)\s+(?:every|q)\s+(\d+)\s*(?:hours|hrs|h)",
            true,
        ),
        pattern(
            r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g|ml)\s+(\d+)\s*(?:times|x)\s+(?:daily|day)",
            true,
        ),
        pattern(r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g|ml)\s+(?:bid|tid|qid|od)", false),
        pattern(
            r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g|ml)\s*,?\s*(?:once|twice|thrice)?\s*(?:daily|day|per day)",
            false,
        ),
    ]
});

/// One extracted medication, tagged with how it was obtained. The
/// token-scan fallback produces guesses, not parses, and the tag lets
/// the caller surface that difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMedication {
    pub medication: PrescribedMedication,
    pub low_confidence: bool,
}

/// Scan free text for medication mentions.
///
/// Every match from every pattern is kept, in pattern-major order.
/// Only when all four patterns find nothing does the token-scan
/// fallback run.
pub fn extract(text: &str) -> Vec<ExtractedMedication> {
    let lowered = text.to_lowercase();
    let mut extracted = Vec::new();

    for dose_pattern in DOSE_PATTERNS.iter() {
        for caps in dose_pattern.regex.captures_iter(&lowered) {
            let name = title_case(&caps[1]);
            let dosage = format!("{}{}", &caps[2], &caps[3]);
            let frequency = if dose_pattern.captures_frequency {
                format!("{} times daily", &caps[4])
            } else {
                "as prescribed".to_string()
            };

            extracted.push(ExtractedMedication {
                medication: PrescribedMedication::new(&name, &dosage, &frequency),
                low_confidence: false,
            });
        }
    }

    if extracted.is_empty() {
        extracted = token_scan(text);
    }

    tracing::debug!(
        found = extracted.len(),
        low_confidence = extracted.iter().any(|m| m.low_confidence),
        "extraction finished",
    );

    extracted
}

/// Last-resort scan: any token containing a dose unit is taken as a
/// dosage and the preceding token claimed as the drug name.
fn token_scan(text: &str) -> Vec<ExtractedMedication> {
    const UNITS: [&str; 3] = ["mg", "g", "ml"];

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut extracted = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let lowered = word.to_lowercase();
        if UNITS.iter().any(|unit| lowered.contains(unit)) && i > 0 {
            extracted.push(ExtractedMedication {
                medication: PrescribedMedication::new(
                    title_case(words[i - 1]),
                    *word,
                    "as prescribed",
                ),
                low_confidence: true,
            });
        }
    }

    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_hours_pattern_echoes_count() {
        let found = extract("Take aspirin 75mg every 6 hours");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.name, "Aspirin");
        assert_eq!(found[0].medication.dosage, "75mg");
        assert_eq!(found[0].medication.frequency, "6 times daily");
        assert!(!found[0].low_confidence);
    }

    #[test]
    fn times_per_day_pattern_echoes_count() {
        let found = extract("ibuprofen 200mg 3 times daily");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.frequency, "3 times daily");
    }

    #[test]
    fn coded_frequency_falls_back_to_as_prescribed() {
        let found = extract("Metformin 500mg bid");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.name, "Metformin");
        assert_eq!(found[0].medication.frequency, "as prescribed");
    }

    #[test]
    fn generic_daily_wording_matches() {
        let found = extract("paracetamol 500mg twice daily");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.name, "Paracetamol");
        assert_eq!(found[0].medication.dosage, "500mg");
    }

    #[test]
    fn unit_is_preserved_in_dosage() {
        let found = extract("amoxicillin 1.5g 2 times daily");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.dosage, "1.5g");
    }

    #[test]
    fn repeated_mentions_are_not_deduplicated() {
        let found = extract("Aspirin 75mg od and Aspirin 75mg daily");
        assert_eq!(
            found.len(),
            2,
            "each mention matches its own pattern and both records are kept",
        );
        assert_eq!(found[0].medication.name, "Aspirin");
        assert_eq!(found[1].medication.name, "Aspirin");
    }

    #[test]
    fn fallback_token_scan_is_flagged_low_confidence() {
        let found = extract("patient currently takes Zyloxatin 20mg");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.name, "Zyloxatin");
        assert_eq!(found[0].medication.dosage, "20mg");
        assert_eq!(found[0].medication.frequency, "as prescribed");
        assert!(found[0].low_confidence);
    }

    #[test]
    fn fallback_claims_word_before_any_unit_bearing_token() {
        // The unit check is a plain substring test, so "something"
        // counts as unit-bearing via its "g" and the scan claims the
        // word before it. Crude, hence the low-confidence tag.
        let found = extract("500mg something");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].medication.name, "500mg");
        assert_eq!(found[0].medication.dosage, "something");
        assert!(found[0].low_confidence);
    }

    #[test]
    fn fallback_skips_dose_token_with_no_preceding_name() {
        assert!(extract("500mg").is_empty());
    }

    #[test]
    fn empty_text_extracts_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("no doses mentioned here at all").is_empty());
    }
}
