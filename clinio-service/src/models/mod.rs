//! Domain models for the Clinio service.

pub mod analysis;

pub use analysis::{ClinicalAnalysis, DifferentialDiagnoses, DifferentialDiagnosis};
