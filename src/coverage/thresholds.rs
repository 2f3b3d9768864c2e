//! Threshold table loading and lookup.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::GateError;

/// Reserved key applied to every unit without an explicit entry.
pub const DEFAULT_KEY: &str = "default";

/// Where a unit's required threshold came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdSource {
    /// The unit's own entry
    Explicit,
    /// The table's `default` entry
    Default,
    /// The caller-supplied fallback
    Fallback,
}

impl std::fmt::Display for ThresholdSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Default => write!(f, "default"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedThreshold {
    pub percent: u8,
    pub source: ThresholdSource,
}

/// Required percentage per unit name, with an optional `default` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdTable {
    entries: BTreeMap<String, u8>,
}

impl ThresholdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(unit, percent)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, unit: &str) -> Option<u8> {
        self.entries.get(unit).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the threshold for `unit`: explicit entry, then `default`, then `fallback`.
    pub fn resolve(&self, unit: &str, fallback: u8) -> ResolvedThreshold {
        if let Some(percent) = self.get(unit) {
            return ResolvedThreshold {
                percent,
                source: ThresholdSource::Explicit,
            };
        }

        match self.get(DEFAULT_KEY) {
            Some(percent) => ResolvedThreshold {
                percent,
                source: ThresholdSource::Default,
            },
            None => ResolvedThreshold {
                percent: fallback,
                source: ThresholdSource::Fallback,
            },
        }
    }

    /// Read and parse a threshold file.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let json = fs::read_to_string(path).map_err(|e| GateError::ThresholdParse {
            path: path.to_path_buf(),
            detail: format!("{}: {}", path.display(), e),
        })?;

        Self::parse(&json, path)
    }

    /// Parse a JSON object mapping unit names to integer percentages.
    pub fn parse(json: &str, path: &Path) -> Result<Self, GateError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| GateError::ThresholdParse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;

        let object = value.as_object().ok_or_else(|| GateError::ThresholdParse {
            path: path.to_path_buf(),
            detail: "expected a JSON object mapping unit names to percentages".to_string(),
        })?;

        let mut entries = BTreeMap::new();
        for (unit, raw) in object {
            let percent = integral_percent(raw).ok_or_else(|| GateError::InvalidThreshold {
                unit: unit.clone(),
                value: raw.to_string(),
            })?;
            entries.insert(unit.clone(), percent);
        }

        Ok(Self { entries })
    }
}

/// A whole-number percentage 0-100. `75` and `75.0` are accepted, `75.5` is not.
fn integral_percent(raw: &serde_json::Value) -> Option<u8> {
    if let Some(v) = raw.as_u64() {
        return u8::try_from(v).ok().filter(|v| *v <= 100);
    }

    raw.as_f64()
        .filter(|v| v.fract() == 0.0 && (0.0..=100.0).contains(v))
        .map(|v| v as u8)
}
