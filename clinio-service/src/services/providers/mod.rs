//! Clinical analysis providers.
//!
//! Handlers depend on the [`ClinicalAnalyzer`] trait only, so a provider-backed
//! analyzer can replace the deterministic [`StubAnalyzer`] without touching the
//! HTTP layer.

pub mod stub;

pub use stub::StubAnalyzer;

use crate::models::DifferentialDiagnoses;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Analyzer not configured: {0}")]
    NotConfigured(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Output of an analyzer run, before it is stamped into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub summary: String,
    pub differential_diagnoses: DifferentialDiagnoses,
}

/// Produces a differential diagnosis from symptoms and patient context.
#[async_trait]
pub trait ClinicalAnalyzer: Send + Sync {
    /// Short label used in logs and metrics.
    fn name(&self) -> &'static str;

    async fn analyze(
        &self,
        symptoms: &str,
        patient_context: &str,
    ) -> Result<AnalysisOutcome, AnalyzerError>;
}
