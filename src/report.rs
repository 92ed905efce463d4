//! Printable verification report: a structured document built from an
//! analysis result, plus PDF export via `printpdf`.
//!
//! The document is assembled first so callers (and tests) can inspect
//! section content without rendering. Score buckets come from
//! [`SafetyStatus`], the same thresholds the rest of the crate uses.

use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::messages::CONSULT_PROVIDER_ALTERNATIVE;
use crate::analysis::AnalysisResult;
use crate::models::medication::title_case;
use crate::models::{PatientProfile, SafetyStatus, Severity};

const REPORT_TITLE: &str = "Medical Prescription Verification Report";

const DISCLAIMER: &str = "This report is generated by an AI system for \
    informational purposes only. It should NOT replace professional medical \
    advice, diagnosis, or treatment. Always consult with qualified healthcare \
    providers for medical decisions. The system's recommendations are based on \
    general guidelines and may not account for individual medical history.";

/// Reports show at most this many recommendations.
const MAX_REPORT_RECOMMENDATIONS: usize = 8;

/// Alternatives listed per medication are capped at the top entries.
const MAX_ALTERNATIVES_SHOWN: usize = 3;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF save error: {0}")]
    Save(String),

    #[error("PDF buffer error: {0}")]
    Buffer(String),
}

/// Report identity: a fresh id and a local generation timestamp. Kept
/// out of [`AnalysisResult`] so analysis itself stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub report_id: String,
    pub generated_at: String,
}

impl ReportMeta {
    fn new() -> Self {
        Self {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationRow {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub status: String, // "Safe" or "Review Required"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningSection {
    pub medication: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRow {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeSection {
    pub medication: String,
    pub alternatives: Vec<String>,
}

/// Everything the rendered report contains, in render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub meta: ReportMeta,
    pub title: String,
    pub patient_rows: Vec<(String, String)>,
    pub safety_score: u8,
    pub status_label: String,
    pub medications: Vec<MedicationRow>,
    pub warning_sections: Vec<WarningSection>,
    pub interactions: Vec<InteractionRow>,
    pub alternative_sections: Vec<AlternativeSection>,
    pub recommendations: Vec<String>,
    pub home_care: Vec<crate::analysis::HomeCareAdvice>,
    pub disclaimer: String,
}

impl ReportDocument {
    /// Assemble the document from an analysis result.
    pub fn build(patient: &PatientProfile, result: &AnalysisResult) -> Self {
        let meta = ReportMeta::new();
        let status = SafetyStatus::from_score(result.safety_score);

        let patient_rows = vec![
            ("Name".to_string(), patient.name.clone()),
            ("Age".to_string(), format!("{} years", patient.age)),
            ("Weight".to_string(), format!("{} kg", patient.weight_kg)),
            ("Report Date".to_string(), meta.generated_at.clone()),
        ];

        let medications = result
            .medications
            .iter()
            .map(|finding| {
                let safe = finding.age_appropriate
                    && finding.dosage_appropriate
                    && finding.known_drug;
                MedicationRow {
                    name: finding.display_name.clone(),
                    dosage: finding.dosage.clone(),
                    frequency: finding.frequency.clone(),
                    status: if safe { "Safe" } else { "Review Required" }.to_string(),
                }
            })
            .collect();

        let warning_sections = result
            .medications
            .iter()
            .filter(|finding| !finding.warnings.is_empty())
            .map(|finding| WarningSection {
                medication: finding.display_name.clone(),
                warnings: finding.warnings.clone(),
            })
            .collect();

        let interactions = result
            .interactions
            .iter()
            .map(|finding| InteractionRow {
                drug_a: finding.drug_a.clone(),
                drug_b: finding.drug_b.clone(),
                severity: finding.severity,
                description: finding.description.clone(),
            })
            .collect();

        // The consult-provider placeholder stands in for real
        // alternatives on unknown drugs and is not listed here.
        let alternative_sections = result
            .medications
            .iter()
            .filter(|finding| {
                !finding.suggested_alternatives.is_empty()
                    && finding.suggested_alternatives
                        != [CONSULT_PROVIDER_ALTERNATIVE.to_string()]
            })
            .map(|finding| AlternativeSection {
                medication: finding.display_name.clone(),
                alternatives: finding
                    .suggested_alternatives
                    .iter()
                    .take(MAX_ALTERNATIVES_SHOWN)
                    .map(|alt| title_case(alt))
                    .collect(),
            })
            .collect();

        let recommendations = result
            .recommendations
            .iter()
            .take(MAX_REPORT_RECOMMENDATIONS)
            .cloned()
            .collect();

        Self {
            meta,
            title: REPORT_TITLE.to_string(),
            patient_rows,
            safety_score: result.safety_score,
            status_label: status.label().to_string(),
            medications,
            warning_sections,
            interactions,
            alternative_sections,
            recommendations,
            home_care: result.home_care.clone(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// Renders the document to PDF bytes: single A4 page, linear layout,
/// builtin Helvetica.
pub fn generate_report_pdf(report: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    use std::io::BufWriter;

    let (doc, page1, layer1) = PdfDocument::new(&report.title, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Font(e.to_string()))?;

    let mut y = Mm(280.0);

    layer.use_text(&report.title, 14.0, Mm(20.0), y, &bold);
    y -= Mm(5.0);
    layer.use_text(
        format!("Report {}", report.meta.report_id),
        7.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(9.0);

    // Patient information
    layer.use_text("PATIENT INFORMATION:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for (label, value) in &report.patient_rows {
        layer.use_text(format!("  {}: {}", label, value), 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    // Safety assessment
    layer.use_text("SAFETY ASSESSMENT:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!("  Overall Safety Score: {}/100", report.safety_score),
        10.0,
        Mm(25.0),
        y,
        &bold,
    );
    y -= Mm(5.0);
    layer.use_text(
        format!("  Status: {}", report.status_label),
        10.0,
        Mm(25.0),
        y,
        &bold,
    );
    y -= Mm(8.0);

    // Medications
    layer.use_text("PRESCRIBED MEDICATIONS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for row in &report.medications {
        let text = format!(
            "  {} — {} — {} — {}",
            row.name, row.dosage, row.frequency, row.status
        );
        layer.use_text(&text, 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    // Warnings
    for section in &report.warning_sections {
        layer.use_text(
            format!("{} Warnings:", section.medication),
            9.0,
            Mm(20.0),
            y,
            &bold,
        );
        y -= Mm(4.5);
        for warning in &section.warnings {
            layer.use_text(format!("  - {}", warning), 9.0, Mm(25.0), y, &font);
            y -= Mm(4.5);
        }
        y -= Mm(2.0);
    }
    y -= Mm(2.0);

    // Interactions
    if report.interactions.is_empty() {
        layer.use_text("NO DRUG INTERACTIONS DETECTED", 11.0, Mm(20.0), y, &bold);
        y -= Mm(8.0);
    } else {
        layer.use_text("DRUG INTERACTIONS DETECTED:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        for row in &report.interactions {
            let text = format!(
                "  {} + {} [{}]: {}",
                row.drug_a,
                row.drug_b,
                row.severity.as_str().to_uppercase(),
                row.description
            );
            for line in wrap_text(&text, 90) {
                layer.use_text(&line, 9.0, Mm(25.0), y, &font);
                y -= Mm(4.5);
            }
        }
        y -= Mm(4.0);
    }

    // Alternatives
    if !report.alternative_sections.is_empty() {
        layer.use_text("ALTERNATIVE MEDICATIONS:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        for section in &report.alternative_sections {
            layer.use_text(
                format!("  {} alternatives:", section.medication),
                9.0,
                Mm(25.0),
                y,
                &bold,
            );
            y -= Mm(4.5);
            for alt in &section.alternatives {
                layer.use_text(format!("    - {}", alt), 9.0, Mm(25.0), y, &font);
                y -= Mm(4.5);
            }
        }
        y -= Mm(4.0);
    }

    // Recommendations
    layer.use_text("HEALTHCARE RECOMMENDATIONS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for (i, rec) in report.recommendations.iter().enumerate() {
        let text = format!("  {}. {}", i + 1, rec);
        for line in wrap_text(&text, 90) {
            layer.use_text(&line, 9.0, Mm(25.0), y, &font);
            y -= Mm(4.5);
        }
    }
    y -= Mm(4.0);

    // Home care
    layer.use_text("HOME CARE GUIDELINES:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for advice in &report.home_care {
        let text = format!(
            "  {}: {} ({})",
            advice.category, advice.recommendation, advice.benefit
        );
        for line in wrap_text(&text, 90) {
            layer.use_text(&line, 8.0, Mm(25.0), y, &font);
            y -= Mm(4.0);
        }
    }
    y -= Mm(6.0);

    // Disclaimer
    layer.use_text("IMPORTANT DISCLAIMER:", 9.0, Mm(20.0), y, &bold);
    y -= Mm(4.5);
    for line in wrap_text(&report.disclaimer, 100) {
        layer.use_text(&line, 7.0, Mm(20.0), y, &font);
        y -= Mm(3.5);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Save(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| ReportError::Buffer(e.to_string()))
}

/// Simple word-wrap helper for PDF text rendering.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
