//! In-process store for tests and local runs without MongoDB.

use super::AnalysisStore;
use crate::models::ClinicalAnalysis;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Keeps analyses in insertion order behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryAnalysisStore {
    analyses: RwLock<Vec<ClinicalAnalysis>>,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, analysis: &ClinicalAnalysis) -> Result<(), AppError> {
        let mut analyses = self.analyses.write().await;
        if analyses.iter().any(|a| a.id == analysis.id) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "Duplicate analysis id {}",
                analysis.id
            )));
        }
        analyses.push(analysis.clone());
        Ok(())
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<ClinicalAnalysis>, AppError> {
        let analyses = self.analyses.read().await;
        // Newest insertion first, then a stable sort keeps that order for equal timestamps.
        let mut recent: Vec<ClinicalAnalysis> = analyses.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.analyses.read().await.len() as u64)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
