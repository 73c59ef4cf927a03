use anyhow::{bail, Context, Result};
use std::fs;

use crate::cli::args::ConfigAction;
use crate::cli::commands::Command;
use crate::config::AnalysisConfig;

pub struct ConfigCommand {
    action: ConfigAction,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction) -> Self {
        Self { action }
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { path, force } => {
                if path.exists() && !force {
                    bail!("{} already exists; pass --force to overwrite", path.display());
                }
                let toml_content = toml::to_string_pretty(&AnalysisConfig::default())?;
                fs::write(path, toml_content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Configuration initialized at {}", path.display());
            }

            ConfigAction::Show { config } => {
                let config = match config {
                    Some(path) => AnalysisConfig::load(path)?,
                    None => AnalysisConfig::default(),
                };
                config.validate()?;
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }

        Ok(())
    }
}
