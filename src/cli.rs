//! CLI argument definitions for ci-gate.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ci-gate")]
#[command(version)]
#[command(about = "Pull-request governance checks for CI", long_about = None)]
#[command(
    after_help = "EXIT CODES:\n    coverage    0 = all thresholds met, 2 = parse failure or threshold violated\n    req-ref     0 = validated or skipped, 1 = reference missing, 2 = usage or input error"
)]
pub struct Cli {
    /// Gate config file (default: .github/ci-gate.yml, optional)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check per-package coverage against the threshold table
    ///
    /// Thresholds are read from .github/coverage-thresholds.json: a JSON object
    /// mapping package names (or "default") to integer percentages.
    Coverage {
        /// Cobertura XML coverage report
        #[arg(value_name = "REPORT")]
        report: PathBuf,
        /// Threshold table to use instead of the configured one
        #[arg(long, value_name = "PATH")]
        thresholds: Option<PathBuf>,
        /// Threshold for packages with no entry and no "default" (overrides THRESHOLD)
        #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(0..=100))]
        fallback: Option<u8>,
        /// Print the evaluation as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Require a REQ-### reference when requirement or spec files change
    ReqRef {
        /// File holding the pull-request body (missing = empty)
        #[arg(value_name = "BODY_FILE")]
        body: PathBuf,
        /// Newline-delimited list of changed paths (missing = empty)
        #[arg(value_name = "CHANGED_FILES")]
        changed_files: PathBuf,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
