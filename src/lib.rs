//! # repodoc
//!
//! Repository analysis: walk a project directory and describe it as a
//! [`ProjectModel`] with its languages, declared dependencies, key files and
//! a depth-capped directory tree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use repodoc::{analyze, AnalysisConfig};
//!
//! let report = analyze("./my-project", &AnalysisConfig::default())?;
//! println!("{}", report.model.summary());
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), repodoc::AnalysisError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`project`] - The analysis engine and its data model
//! - [`config`] - Scan options, TOML loading and validation
//! - [`core`] - Literal rule tables and error types
//! - [`cli`] - Command-line interface

/// Command-line interface and argument parsing
pub mod cli;
/// Scan configuration
pub mod config;
/// Constant tables and error types
pub mod core;
/// Walker, classifier, language detector, dependency extractor and tree builder
pub mod project;

pub use config::AnalysisConfig;
pub use core::{AnalysisError, AnalysisResult, AnalysisWarning, ConfigError};
pub use project::{
    analyze, AnalysisReport, Dependency, DirectoryNode, Ecosystem, FileCategory, FileEntry,
    KeyFileRole, LanguageStat, ProjectAnalyzer, ProjectModel,
};
