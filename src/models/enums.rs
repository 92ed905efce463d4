use serde::{Deserialize, Serialize};

/// Ordinal risk level of a known drug-drug interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Points deducted from the safety score per interaction of this severity.
    pub fn score_penalty(&self) -> u32 {
        match self {
            Self::Low => 5,
            Self::Moderate => 15,
            Self::High => 30,
        }
    }
}

/// Banner bucket for a safety score. The same thresholds drive the UI
/// and the printed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStatus {
    Safe,
    CautionRequired,
    HighRisk,
}

impl SafetyStatus {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Safe
        } else if score >= 60 {
            Self::CautionRequired
        } else {
            Self::HighRisk
        }
    }

    /// Banner label, as printed on the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::CautionRequired => "CAUTION REQUIRED",
            Self::HighRisk => "HIGH RISK",
        }
    }
}

/// Dosing age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Pediatric,
    Adolescent,
    Adult,
    Elderly,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pediatric => "pediatric",
            Self::Adolescent => "adolescent",
            Self::Adult => "adult",
            Self::Elderly => "elderly",
        }
    }
}
