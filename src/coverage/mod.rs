//! Per-unit coverage threshold checking.
//!
//! A Cobertura-style report is parsed into a [`CoverageReport`], the JSON
//! threshold table into a [`ThresholdTable`], and [`evaluate`] combines the
//! two into an [`EvaluationResult`]. Parsing is the only fallible step;
//! evaluation is a pure function of its inputs.

mod evaluate;
mod report;
mod thresholds;

pub use evaluate::{evaluate, unit_passes, EvaluationResult, UnitResult, PASS_EPSILON};
pub use report::{CoverageReport, UnitCoverage};
pub use thresholds::{ResolvedThreshold, ThresholdSource, ThresholdTable, DEFAULT_KEY};
