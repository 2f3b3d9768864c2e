//! Configuration for the gate checks.
//!
//! Values are resolved in order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file (`.github/ci-gate.yml` or `--config <path>`)
//! 3. `THRESHOLD` environment variable (fallback threshold only, coverage
//!    command only, via [`CoverageConfig::apply_env`])
//! 4. Command-line flags, applied by the caller via [`GateConfig::with_overrides`]

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::GateError;
use crate::paths::{CONFIG_FILE, THRESHOLD_ENV};

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GateConfig {
    #[serde(default)]
    pub coverage: CoverageConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}

impl GateConfig {
    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// A missing default config file is not an error. A config file named
    /// explicitly must exist. Environment overrides are not applied here.
    pub fn load_from(path: Option<&Path>) -> Result<Self, GateError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        let config = match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "loaded gate config");
                Self::parse(&content, &path)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no gate config, using defaults");
                Self::default()
            }
            Err(source) => return Err(GateError::Read { path, source }),
        };

        config.validate(&path)?;

        Ok(config)
    }

    /// Parse a YAML config document. An empty document yields the defaults.
    pub fn parse(content: &str, path: &Path) -> Result<Self, GateError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| GateError::config(path, e.to_string()))
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, thresholds_path: Option<PathBuf>, fallback: Option<u8>) -> Self {
        if let Some(path) = thresholds_path {
            self.coverage.thresholds_path = path;
        }
        if let Some(value) = fallback {
            self.coverage.fallback_threshold = value;
        }
        self
    }

    /// Validate all sections, attributing failures to `path`.
    pub fn validate(&self, path: &Path) -> Result<(), GateError> {
        self.coverage
            .validate()
            .and_then(|_| self.reference.validate())
            .map_err(|e| GateError::config(path, e.to_string()))
    }
}

impl CoverageConfig {
    /// Apply the `THRESHOLD` environment variable from the process environment.
    pub fn apply_env(&mut self) -> Result<(), GateError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides, with lookups routed through `lookup`.
    /// Blank values are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), GateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(THRESHOLD_ENV).filter(|v| !v.trim().is_empty()) else {
            return Ok(());
        };

        let value = raw
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|v| *v <= 100)
            .ok_or_else(|| GateError::Env {
                name: THRESHOLD_ENV.to_string(),
                detail: format!("expected an integer percentage 0-100, got `{}`", raw),
            })?;

        debug!(value, "fallback threshold overridden from environment");
        self.fallback_threshold = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
