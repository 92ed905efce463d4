pub mod enums;
pub mod medication;
pub mod patient;

pub use enums::{AgeGroup, SafetyStatus, Severity};
pub use medication::PrescribedMedication;
pub use patient::PatientProfile;
