pub mod metrics;
pub mod providers;
pub mod store;

pub use metrics::{get_metrics, init_metrics};
pub use providers::{AnalysisOutcome, AnalyzerError, ClinicalAnalyzer, StubAnalyzer};
pub use store::{
    AnalysisStore, DisabledAnalysisStore, MemoryAnalysisStore, MongoAnalysisStore, HISTORY_LIMIT,
};
