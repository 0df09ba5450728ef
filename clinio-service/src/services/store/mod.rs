//! Persistence for clinical analyses.
//!
//! [`AnalysisStore`] is the seam between handlers and storage. The backend is
//! chosen once at startup from [`StoreBackend`](crate::config::StoreBackend).

pub mod disabled;
pub mod memory;
pub mod mongo;

pub use disabled::DisabledAnalysisStore;
pub use memory::MemoryAnalysisStore;
pub use mongo::MongoAnalysisStore;

use crate::models::ClinicalAnalysis;
use async_trait::async_trait;
use service_core::error::AppError;

/// Maximum number of records returned by history queries.
pub const HISTORY_LIMIT: usize = 100;

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Short label used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Prepare the backing storage (indexes etc.). Called once at startup.
    async fn initialize(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, analysis: &ClinicalAnalysis) -> Result<(), AppError>;

    /// Most recent analyses first, at most `limit`.
    async fn find_recent(&self, limit: usize) -> Result<Vec<ClinicalAnalysis>, AppError>;

    async fn count(&self) -> Result<u64, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
