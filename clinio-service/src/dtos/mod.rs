pub mod analysis;

pub use analysis::{AnalysisResponse, AnalyzeRequest, StatsResponse};
