pub mod analysis;
pub mod config;
pub mod extraction;
pub mod knowledge;
pub mod models;
pub mod report;

pub use analysis::{analyze, AnalysisError, AnalysisResult};
pub use knowledge::DrugKnowledgeBase;
pub use models::{PatientProfile, PrescribedMedication, SafetyStatus, Severity};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application.
///
/// Respects `RUST_LOG` when set, otherwise falls back to the crate
/// default filter. Call once at startup; the core itself only emits
/// events.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Rxverify core v{}", config::APP_VERSION);
}
