//! Output formatters for check results
//!
//! Plain-text lines for the coverage report and the reference policy. Callers
//! decide which stream each line goes to.

use crate::coverage::{EvaluationResult, UnitResult};
use crate::reference::ReferencePattern;

pub const COVERAGE_HEADING: &str = "Per-package coverage:";
pub const VIOLATIONS_HEADING: &str = "Per-package threshold violations:";
pub const COVERAGE_OK: &str = "All per-package thresholds satisfied";

/// One line per unit: ` - name: 82.0%`
pub fn coverage_report_lines(result: &EvaluationResult) -> Vec<String> {
    result
        .units
        .iter()
        .map(|u| format!(" - {}: {:.1}%", u.name, u.percentage))
        .collect()
}

/// `name coverage 40.0% < threshold 75%`
pub fn violation_line(unit: &UnitResult) -> String {
    format!(
        "{} coverage {:.1}% < threshold {}%",
        unit.name, unit.percentage, unit.required_threshold
    )
}

pub fn skip_message(pattern: &ReferencePattern) -> String {
    format!(
        "No requirement/spec files changed; skipping {} reference validation.",
        pattern.label()
    )
}

pub fn found_message(pattern: &ReferencePattern, matched: &str) -> String {
    format!("Found {} reference: {}", pattern.label(), matched)
}

/// Error line plus a hint for a policy violation.
pub fn missing_reference_lines(pattern: &ReferencePattern) -> [String; 2] {
    let placeholder = pattern.placeholder();
    [
        format!(
            "ERROR: PR modifies requirement/spec files but contains no {} reference in the PR body.",
            placeholder
        ),
        format!(
            "Please add a Related {}(s): {} line to your PR description.",
            pattern.label(),
            placeholder
        ),
    ]
}
