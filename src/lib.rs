//! # ci-gate - pull-request governance checks
//!
//! Two independent, deterministic checks meant to gate a CI pipeline:
//!
//! - **Coverage thresholds**: every unit (Cobertura `package`) in a coverage
//!   report must meet its required percentage from a threshold table.
//! - **Requirement references**: a pull request that touches requirement or
//!   spec documents must cite a reference such as `REQ-042` in its body.
//!
//! Each check parses its inputs into typed values first, then evaluates a
//! pure function. Input problems surface as [`error::GateError`]; rule
//! failures come back as ordinary values.
//!
//! ## Modules
//!
//! - [`coverage`] - Report parsing, threshold tables, and evaluation
//! - [`reference`] - Changed-file sets, trigger prefixes, and the reference pattern
//! - [`config`] - Policy configuration and its defaults
//! - [`error`] - Input error kinds
//!
//! ## Example
//!
//! ```
//! use ci_gate::reference::{validate, ChangedFileSet, PolicyTrigger, ReferenceOutcome, ReferencePattern};
//!
//! let changed = ChangedFileSet::parse("docs/requirements/login.md\n");
//! let triggers = PolicyTrigger::new(["docs/requirements/", "specs/"]);
//! let pattern = ReferencePattern::new("REQ-", 3).unwrap();
//!
//! match validate(&changed, "Related REQ(s): REQ-042", &triggers, &pattern) {
//!     ReferenceOutcome::Pass { matched, .. } => assert_eq!(matched, "REQ-042"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod config;
pub mod coverage;
pub mod error;
pub mod formatters;
pub mod reference;
pub mod ui;

/// Default path constants, relative to the repository root.
pub mod paths {
    /// Optional gate configuration: `.github/ci-gate.yml`
    pub const CONFIG_FILE: &str = ".github/ci-gate.yml";
    /// Threshold table read by the coverage check: `.github/coverage-thresholds.json`
    pub const THRESHOLDS_FILE: &str = ".github/coverage-thresholds.json";
    /// Environment variable overriding the fallback threshold
    pub const THRESHOLD_ENV: &str = "THRESHOLD";
    /// Environment variable holding the log filter
    pub const LOG_ENV: &str = "CI_GATE_LOG";
}
