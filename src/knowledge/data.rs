//! Built-in drug profiles and interaction pairs.

use crate::models::Severity;

use super::DrugProfile;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Profiles with their lowercase surface names (brand and generic
/// spellings). One profile per clinical entity.
pub(super) fn builtin_profiles() -> Vec<(DrugProfile, Vec<&'static str>)> {
    vec![
        (
            DrugProfile {
                generic_name: "Acetaminophen".into(),
                category: "Analgesic/Antipyretic".into(),
                adult_dosage: "500-1000mg every 4-6 hours".into(),
                max_daily_dose: "4000mg".into(),
                pediatric_dosage: "10-15mg/kg every 4-6 hours".into(),
                minimum_age: None,
                contraindications: strings(&["liver disease", "alcohol dependency"]),
                side_effects: strings(&["nausea", "skin rash", "liver toxicity"]),
                alternative_drugs: strings(&["ibuprofen", "aspirin", "diclofenac"]),
                interacting_drugs: strings(&["warfarin", "alcohol"]),
            },
            vec!["paracetamol", "acetaminophen"],
        ),
        (
            DrugProfile {
                generic_name: "Ibuprofen".into(),
                category: "NSAID".into(),
                adult_dosage: "200-400mg every 4-6 hours".into(),
                max_daily_dose: "1200mg".into(),
                pediatric_dosage: "5-10mg/kg every 6-8 hours".into(),
                minimum_age: None,
                contraindications: strings(&[
                    "kidney disease",
                    "heart disease",
                    "stomach ulcers",
                ]),
                side_effects: strings(&["stomach upset", "dizziness", "kidney problems"]),
                alternative_drugs: strings(&["paracetamol", "naproxen", "aspirin"]),
                interacting_drugs: strings(&["warfarin", "ace inhibitors"]),
            },
            vec!["ibuprofen"],
        ),
        (
            DrugProfile {
                generic_name: "Amoxicillin".into(),
                category: "Antibiotic".into(),
                adult_dosage: "250-500mg every 8 hours".into(),
                max_daily_dose: "1500mg".into(),
                pediatric_dosage: "25-45mg/kg/day divided every 12 hours".into(),
                minimum_age: None,
                contraindications: strings(&["penicillin allergy"]),
                side_effects: strings(&["diarrhea", "nausea", "allergic reaction"]),
                alternative_drugs: strings(&["azithromycin", "cephalexin", "doxycycline"]),
                interacting_drugs: strings(&["methotrexate", "oral contraceptives"]),
            },
            vec!["amoxicillin"],
        ),
        (
            DrugProfile {
                generic_name: "Metformin".into(),
                category: "Antidiabetic".into(),
                adult_dosage: "500mg twice daily".into(),
                max_daily_dose: "2000mg".into(),
                pediatric_dosage: "Not recommended under 10 years".into(),
                minimum_age: Some(10),
                contraindications: strings(&["kidney disease", "liver disease"]),
                side_effects: strings(&["nausea", "diarrhea", "metallic taste"]),
                alternative_drugs: strings(&["glipizide", "insulin", "gliclazide"]),
                interacting_drugs: strings(&["alcohol", "contrast dyes"]),
            },
            vec!["metformin"],
        ),
        (
            DrugProfile {
                generic_name: "Atorvastatin".into(),
                category: "Statin".into(),
                adult_dosage: "10-20mg once daily".into(),
                max_daily_dose: "80mg".into(),
                pediatric_dosage: "Not recommended under 10 years".into(),
                minimum_age: Some(10),
                contraindications: strings(&["liver disease", "pregnancy"]),
                side_effects: strings(&["muscle pain", "liver problems"]),
                alternative_drugs: strings(&["rosuvastatin", "simvastatin", "pravastatin"]),
                interacting_drugs: strings(&["warfarin", "digoxin"]),
            },
            vec!["atorvastatin"],
        ),
        (
            DrugProfile {
                generic_name: "Acetylsalicylic Acid".into(),
                category: "NSAID/Antiplatelet".into(),
                adult_dosage: "325-650mg every 4 hours".into(),
                max_daily_dose: "3900mg".into(),
                pediatric_dosage: "Not recommended under 16 years (Reye syndrome risk)".into(),
                minimum_age: Some(16),
                contraindications: strings(&[
                    "bleeding disorders",
                    "stomach ulcers",
                    "asthma",
                ]),
                side_effects: strings(&[
                    "stomach bleeding",
                    "tinnitus",
                    "allergic reactions",
                ]),
                alternative_drugs: strings(&["paracetamol", "ibuprofen", "naproxen"]),
                interacting_drugs: strings(&["warfarin", "alcohol", "methotrexate"]),
            },
            vec!["aspirin"],
        ),
        (
            DrugProfile {
                generic_name: "Lisinopril".into(),
                category: "ACE Inhibitor".into(),
                adult_dosage: "5-10mg once daily".into(),
                max_daily_dose: "40mg".into(),
                pediatric_dosage: "Weight-based dosing required".into(),
                minimum_age: None,
                contraindications: strings(&["pregnancy", "bilateral renal artery stenosis"]),
                side_effects: strings(&["dry cough", "dizziness", "hyperkalemia"]),
                alternative_drugs: strings(&["losartan", "amlodipine", "enalapril"]),
                interacting_drugs: strings(&["potassium supplements", "lithium"]),
            },
            vec!["lisinopril"],
        ),
    ]
}

/// Interaction pairs. Names are canonicalized at construction, so
/// brand spellings listed here resolve to the same key as their
/// generic counterparts.
pub(super) fn builtin_interactions() -> Vec<(&'static str, &'static str, Severity, &'static str)> {
    vec![
        (
            "warfarin",
            "paracetamol",
            Severity::Moderate,
            "Increased bleeding risk with high doses",
        ),
        (
            "warfarin",
            "ibuprofen",
            Severity::High,
            "Significantly increased bleeding risk",
        ),
        (
            "warfarin",
            "aspirin",
            Severity::High,
            "Major bleeding risk - avoid combination",
        ),
        (
            "metformin",
            "alcohol",
            Severity::High,
            "Risk of lactic acidosis",
        ),
        (
            "ibuprofen",
            "lisinopril",
            Severity::Moderate,
            "Reduced kidney function",
        ),
        (
            "aspirin",
            "ibuprofen",
            Severity::Moderate,
            "Increased GI bleeding risk",
        ),
        (
            "atorvastatin",
            "amoxicillin",
            Severity::Low,
            "Minor interaction - monitor",
        ),
    ]
}
