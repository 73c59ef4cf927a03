use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::args::TargetArgs;
use crate::cli::commands::{utils, Command};
use crate::project::{analyze, AnalysisReport};

/// How a finished analysis is printed
#[derive(Debug, Clone)]
pub enum ScanOutput {
    Json {
        output: Option<PathBuf>,
        compact: bool,
    },
    Tree,
    Summary,
}

pub struct ScanCommand {
    target: TargetArgs,
    output: ScanOutput,
}

impl ScanCommand {
    pub fn new(target: TargetArgs, output: ScanOutput) -> Self {
        Self { target, output }
    }

    fn run_analysis(&self) -> Result<AnalysisReport> {
        let config = self.target.resolve_config()?;
        analyze(&self.target.path, &config)
            .with_context(|| format!("Failed to analyze {}", self.target.path.display()))
    }
}

impl Command for ScanCommand {
    fn execute(&self) -> Result<()> {
        let report = self.run_analysis()?;

        match &self.output {
            ScanOutput::Json { output, compact } => {
                let json = if *compact {
                    serde_json::to_string(&report)?
                } else {
                    serde_json::to_string_pretty(&report)?
                };

                match output {
                    Some(path) => {
                        fs::write(path, json)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        eprintln!("Analysis written to {}", path.display());
                    }
                    None => println!("{json}"),
                }
            }
            ScanOutput::Tree => print!("{}", report.model.tree.render()),
            ScanOutput::Summary => print!("{}", report.model.summary()),
        }

        utils::report_warnings(&report.warnings);
        Ok(())
    }
}
