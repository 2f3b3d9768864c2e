//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths::THRESHOLDS_FILE;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_thresholds_path, PathBuf, PathBuf::from(THRESHOLDS_FILE));
default_fn!(default_fallback_threshold, u8, 75);
default_fn!(
    default_triggers,
    Vec<String>,
    vec!["docs/requirements/".to_string(), "specs/".to_string()]
);
default_fn!(default_tag, String, "REQ-".to_string());
default_fn!(default_min_digits, usize, 3);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Settings for the coverage threshold check
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoverageConfig {
    /// Threshold table location (default: .github/coverage-thresholds.json)
    #[serde(default = "default_thresholds_path")]
    pub thresholds_path: PathBuf,
    /// Required percentage when the table has neither the unit nor `default` (default: 75)
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: u8,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            thresholds_path: default_thresholds_path(),
            fallback_threshold: default_fallback_threshold(),
        }
    }
}

/// Settings for the pull-request reference check
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReferenceConfig {
    /// Path prefixes that make a reference mandatory
    #[serde(default = "default_triggers")]
    pub triggers: Vec<String>,
    /// Literal tag that starts a reference (default: REQ-)
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Minimum number of digits after the tag (default: 3)
    #[serde(default = "default_min_digits")]
    pub min_digits: usize,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            triggers: default_triggers(),
            tag: default_tag(),
            min_digits: default_min_digits(),
        }
    }
}
