//! Command line front end
//!
//! Parses arguments, sets up logging, and hands off to a [`Command`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigAction, TargetArgs};

use anyhow::Result;
use clap::Parser;
use commands::config::ConfigCommand;
use commands::scan::{ScanCommand, ScanOutput};
use commands::Command;

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let command: Box<dyn Command> = match cli.command {
        Commands::Scan {
            target,
            output,
            compact,
        } => Box::new(ScanCommand::new(target, ScanOutput::Json { output, compact })),
        Commands::Tree { target } => Box::new(ScanCommand::new(target, ScanOutput::Tree)),
        Commands::Summary { target } => Box::new(ScanCommand::new(target, ScanOutput::Summary)),
        Commands::Config { action } => Box::new(ConfigCommand::new(action)),
    };

    command.execute()
}

fn log_filter(verbose: bool) -> String {
    let log_level = if verbose { "debug" } else { "info" };
    format!("repodoc={}", log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(false), "repodoc=info");
        assert_eq!(log_filter(true), "repodoc=debug");
    }
}
