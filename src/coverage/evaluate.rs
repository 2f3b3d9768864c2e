//! Pure threshold evaluation.

use serde::Serialize;
use tracing::debug;

use super::report::CoverageReport;
use super::thresholds::{ThresholdSource, ThresholdTable};

/// Tolerance for rounding noise in upstream ratio computation.
pub const PASS_EPSILON: f64 = 0.001;

/// A unit passes when `percentage + PASS_EPSILON >= threshold`.
pub fn unit_passes(percentage: f64, threshold: u8) -> bool {
    percentage + PASS_EPSILON >= f64::from(threshold)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitResult {
    pub name: String,
    pub percentage: f64,
    pub required_threshold: u8,
    pub threshold_source: ThresholdSource,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub units: Vec<UnitResult>,
    pub overall_passed: bool,
}

impl EvaluationResult {
    /// Units below their threshold, in report order.
    pub fn violations(&self) -> impl Iterator<Item = &UnitResult> {
        self.units.iter().filter(|u| !u.passed)
    }
}

/// Evaluate every unit in `report` against `thresholds`.
///
/// `fallback` applies to units with neither an explicit entry nor a
/// `default` entry in the table.
pub fn evaluate(
    report: &CoverageReport,
    thresholds: &ThresholdTable,
    fallback: u8,
) -> EvaluationResult {
    let units: Vec<UnitResult> = report
        .units()
        .iter()
        .map(|unit| {
            let percentage = unit.percentage();
            let resolved = thresholds.resolve(&unit.name, fallback);
            let passed = unit_passes(percentage, resolved.percent);

            debug!(
                unit = %unit.name,
                percentage,
                threshold = resolved.percent,
                source = %resolved.source,
                passed,
                "evaluated unit"
            );

            UnitResult {
                name: unit.name.clone(),
                percentage,
                required_threshold: resolved.percent,
                threshold_source: resolved.source,
                passed,
            }
        })
        .collect();

    let overall_passed = units.iter().all(|u| u.passed);

    EvaluationResult {
        units,
        overall_passed,
    }
}
