//! Store used in stub mode: accepts writes and forgets them.

use super::AnalysisStore;
use crate::models::ClinicalAnalysis;
use async_trait::async_trait;
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAnalysisStore;

#[async_trait]
impl AnalysisStore for DisabledAnalysisStore {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn insert(&self, analysis: &ClinicalAnalysis) -> Result<(), AppError> {
        tracing::debug!(analysis_id = %analysis.id, "Store disabled, analysis not persisted");
        Ok(())
    }

    async fn find_recent(&self, _limit: usize) -> Result<Vec<ClinicalAnalysis>, AppError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(0)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
