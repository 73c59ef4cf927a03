pub mod constants;
pub mod errors;

pub use errors::{AnalysisError, AnalysisResult, AnalysisWarning, ConfigError};
