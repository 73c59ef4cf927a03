use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::core::ConfigError;

/// Command line interface for repodoc, a repository analysis tool.
///
/// # Examples
///
/// ```bash
/// # Full analysis as JSON
/// repodoc scan ./my-project --output model.json
///
/// # Directory tree, two levels deep
/// repodoc tree ./my-project --max-depth 2
///
/// # Write a config file with the built-in defaults
/// repodoc config init
/// ```
#[derive(Parser)]
#[command(name = "repodoc")]
#[command(about = "Analyze a repository's languages, dependencies and layout")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a repository and print the project model as JSON
    Scan {
        #[command(flatten)]
        target: TargetArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the directory tree
    Tree {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print a short plain-text summary
    Summary {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Destination file
        #[arg(default_value = "repodoc.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Config file to merge over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// The repository to analyze and the options that shape the scan
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Repository root
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Depth at which the tree collapses to counts
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Additional directory names to exclude (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Additional file names to treat as manifests
    #[arg(long, value_delimiter = ',')]
    pub manifest: Vec<String>,

    /// Stop after this many files
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Project name to report instead of the directory name
    #[arg(long)]
    pub name: Option<String>,
}

impl TargetArgs {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<AnalysisConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        for dir in &self.exclude {
            config = config.with_excluded_dir(dir.trim());
        }
        for manifest in &self.manifest {
            config = config.with_extra_manifest(manifest.trim());
        }
        if let Some(limit) = self.max_files {
            config = config.with_max_files(limit);
        }
        if let Some(name) = &self.name {
            config = config.with_project_name(name.clone());
        }

        Ok(config)
    }
}
