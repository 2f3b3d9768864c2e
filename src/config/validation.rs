//! Validation logic for gate configuration.

use anyhow::Result;

use super::defaults::{CoverageConfig, ReferenceConfig};

impl CoverageConfig {
    /// Validate coverage configuration
    pub fn validate(&self) -> Result<()> {
        if self.fallback_threshold > 100 {
            anyhow::bail!(
                "coverage.fallback_threshold must be between 0 and 100, got {}",
                self.fallback_threshold
            );
        }

        if self.thresholds_path.as_os_str().is_empty() {
            anyhow::bail!("coverage.thresholds_path must not be empty");
        }

        Ok(())
    }
}

impl ReferenceConfig {
    /// Validate reference configuration
    pub fn validate(&self) -> Result<()> {
        if self.tag.is_empty() {
            anyhow::bail!("reference.tag must not be empty");
        }

        if self.min_digits == 0 {
            anyhow::bail!("reference.min_digits must be >= 1");
        }

        // An empty prefix would match every path
        if let Some(pos) = self.triggers.iter().position(|t| t.trim().is_empty()) {
            anyhow::bail!("reference.triggers[{}] must not be empty", pos);
        }

        Ok(())
    }
}
