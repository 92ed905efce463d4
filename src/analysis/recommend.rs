//! Advisory generation: a fixed-order rule list, not free text.

use crate::models::Severity;

use super::messages::MessageTemplates;
use super::types::{HomeCareAdvice, InteractionFinding, MedicationFinding};

/// Score below which the leading urgent-consult advisory is emitted.
const URGENT_CONSULT_THRESHOLD: u8 = 70;

/// Build the ordered advisory list for one analysis.
///
/// Rule order is fixed: urgent consult, high interactions, moderate
/// interactions, age concerns, per-drug warnings, unknown drugs, the
/// all-clear when nothing else fired, then the three general-care
/// advisories unconditionally.
pub fn generate_recommendations(
    safety_score: u8,
    medications: &[MedicationFinding],
    interactions: &[InteractionFinding],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if safety_score < URGENT_CONSULT_THRESHOLD {
        recommendations.push(MessageTemplates::urgent_consult());
    }

    for interaction in interactions {
        if interaction.severity == Severity::High {
            recommendations.push(MessageTemplates::avoid_combination(
                &interaction.drug_a,
                &interaction.drug_b,
            ));
        }
    }

    for interaction in interactions {
        if interaction.severity == Severity::Moderate {
            recommendations.push(MessageTemplates::monitor_combination(
                &interaction.drug_a,
                &interaction.drug_b,
            ));
        }
    }

    for finding in medications {
        if !finding.age_appropriate {
            recommendations.push(MessageTemplates::age_concern(&finding.display_name));
        }
    }

    for finding in medications {
        if !finding.warnings.is_empty() {
            recommendations.push(MessageTemplates::check_warnings(
                &finding.display_name,
                &finding.warnings,
            ));
        }
    }

    for finding in medications {
        if !finding.known_drug {
            recommendations.push(MessageTemplates::manual_verification(&finding.display_name));
        }
    }

    if recommendations.is_empty() {
        recommendations.push(MessageTemplates::no_major_concerns());
    }

    for advice in MessageTemplates::general_care() {
        recommendations.push(advice.to_string());
    }

    recommendations
}

/// The fixed six-item home-care table attached to every result. Not
/// computed from the prescription; purely supportive guidance.
pub fn home_care_advice() -> Vec<HomeCareAdvice> {
    let rows = [
        (
            "Hydration",
            "Drink 8-10 glasses of water daily",
            "Helps medication absorption and reduces side effects",
        ),
        (
            "Nutrition",
            "Take medications with food if recommended",
            "Reduces stomach irritation and improves absorption",
        ),
        (
            "Sleep",
            "Maintain 7-8 hours of quality sleep",
            "Supports immune system and medication effectiveness",
        ),
        (
            "Exercise",
            "Light to moderate exercise as tolerated",
            "Improves circulation and overall health",
        ),
        (
            "Monitoring",
            "Keep a medication diary",
            "Track effectiveness and side effects",
        ),
        (
            "Safety",
            "Store medications properly",
            "Maintains medication potency and prevents accidents",
        ),
    ];

    rows.into_iter()
        .map(|(category, recommendation, benefit)| HomeCareAdvice {
            category: category.to_string(),
            recommendation: recommendation.to_string(),
            benefit: benefit.to_string(),
        })
        .collect()
}
