//! `ci-gate coverage`: per-package coverage thresholds.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use ci_gate::config::GateConfig;
use ci_gate::coverage::{evaluate, CoverageReport, ThresholdTable};
use ci_gate::formatters::{
    coverage_report_lines, violation_line, COVERAGE_HEADING, COVERAGE_OK, VIOLATIONS_HEADING,
};
use ci_gate::ui::{colors, result_icon};

use super::exit_codes;
use super::print_json;

/// Evaluate `report_path` against the configured threshold table.
///
/// Both inputs are parsed before anything is printed, so a parse failure
/// produces no partial report. Threshold violations exit with the same
/// code as parse failures; only the stderr text tells them apart.
pub fn cmd_coverage(report_path: &Path, config: &GateConfig, json: bool) -> Result<i32> {
    let report = CoverageReport::load(report_path)?;
    let thresholds = ThresholdTable::load(&config.coverage.thresholds_path)?;

    info!(
        units = report.len(),
        thresholds = thresholds.len(),
        fallback = config.coverage.fallback_threshold,
        "evaluating coverage"
    );

    let result = evaluate(&report, &thresholds, config.coverage.fallback_threshold);

    if json {
        print_json(&result)?;
    } else {
        println!("{}", colors::heading(COVERAGE_HEADING));
        for line in coverage_report_lines(&result) {
            println!("{}", line);
        }
    }

    if result.overall_passed {
        if !json {
            println!();
            println!("{} {}", result_icon(true), COVERAGE_OK);
        }
        return Ok(exit_codes::OK);
    }

    eprintln!();
    eprintln!("{}", colors::error(VIOLATIONS_HEADING));
    for unit in result.violations() {
        eprintln!("{}", violation_line(unit));
    }

    Ok(exit_codes::FAILURE)
}
