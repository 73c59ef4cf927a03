use anyhow::Result;

pub mod config;
pub mod scan;

/// Trait for CLI command implementations
pub trait Command {
    /// Execute the command with the given arguments
    fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::core::AnalysisWarning;

    /// Print scan warnings to stderr so stdout stays machine-readable
    pub fn report_warnings(warnings: &[AnalysisWarning]) {
        if warnings.is_empty() {
            return;
        }
        eprintln!("{} warning(s):", warnings.len());
        for warning in warnings {
            eprintln!("  - {warning}");
        }
    }
}
