/// Application-level constants
pub const APP_NAME: &str = "Rxverify";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "rxverify=info"
}

/// Oldest patient age accepted by the analysis entry point.
pub const MAX_PATIENT_AGE: u32 = 120;
