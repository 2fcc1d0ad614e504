//! Application use cases. Depend on ports only.

pub mod analysis_service;
pub mod history;

pub use analysis_service::AnalysisService;
pub use history::{AnalysisHistory, HISTORY_CAPACITY};
