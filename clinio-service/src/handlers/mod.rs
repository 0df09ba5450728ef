pub mod analysis;
pub mod health;
pub mod info;
pub mod metrics;

pub use analysis::{analyze_symptoms, get_analysis_history, get_stats};
pub use health::{health_check, readiness_check};
pub use info::{api_root, route_not_found, service_root};
pub use metrics::metrics_endpoint;
