//! Age bracket classification and age-based eligibility.

use crate::knowledge::DrugProfile;
use crate::models::AgeGroup;

/// Map an age in years to its dosing bracket. Total: the elderly
/// bracket is open-ended, so every age lands somewhere. Implausible
/// ages are rejected at the analysis entry point, not here.
pub fn classify(age: u32) -> AgeGroup {
    match age {
        0..=12 => AgeGroup::Pediatric,
        13..=17 => AgeGroup::Adolescent,
        18..=64 => AgeGroup::Adult,
        _ => AgeGroup::Elderly,
    }
}

/// Whether a drug is appropriate at the given age. Drugs without a
/// minimum age are appropriate for everyone.
pub fn is_age_appropriate(profile: &DrugProfile, age: u32) -> bool {
    match profile.minimum_age {
        Some(min) => age >= u32::from(min),
        None => true,
    }
}
