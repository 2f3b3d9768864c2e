//! CLI entry point for ci-gate.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;

use ci_gate::config::GateConfig;
use ci_gate::paths::LOG_ENV;

use cli::{Cli, Commands};
use cmd::exit_codes;

fn main() {
    // Usage errors exit with status 2 inside `parse`
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            exit_codes::FAILURE
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Coverage {
            report,
            thresholds,
            fallback,
            json,
        } => {
            let mut config = GateConfig::load_from(cli.config.as_deref())?;
            config.coverage.apply_env()?;
            let config = config.with_overrides(thresholds, fallback);
            cmd::coverage::cmd_coverage(&report, &config, json)
        }
        Commands::ReqRef {
            body,
            changed_files,
            json,
        } => {
            let config = GateConfig::load_from(cli.config.as_deref())?;
            cmd::req_ref::cmd_req_ref(&body, &changed_files, &config, json)
        }
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Trace output goes to stderr; stdout carries the report. No timestamps, so
/// repeated runs on the same inputs print the same bytes.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn cmd_completion(shell: Shell) -> Result<i32> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ci-gate", &mut io::stdout());
    Ok(exit_codes::OK)
}
