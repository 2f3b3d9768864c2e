//! Cobertura XML report parsing.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::GateError;

/// Coverage measured for one unit (a Cobertura `package`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitCoverage {
    pub name: String,
    /// Ratio of covered lines in `[0, 1]`. `None` when the attribute is
    /// missing or does not hold a finite number.
    pub line_ratio: Option<f64>,
}

impl UnitCoverage {
    pub fn new(name: impl Into<String>, line_ratio: Option<f64>) -> Self {
        Self {
            name: name.into(),
            line_ratio,
        }
    }

    /// Covered lines as a percentage. Unreadable ratios count as 0%.
    pub fn percentage(&self) -> f64 {
        self.line_ratio.map(|r| r * 100.0).unwrap_or(0.0)
    }
}

/// Units in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageReport {
    units: Vec<UnitCoverage>,
}

impl CoverageReport {
    pub fn new(units: Vec<UnitCoverage>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[UnitCoverage] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Read and parse a report file.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let xml = fs::read_to_string(path).map_err(|e| GateError::ReportParse {
            path: path.to_path_buf(),
            detail: format!("{}: {}", path.display(), e),
        })?;

        Self::parse(&xml, path)
    }

    /// Parse a Cobertura document. `package` elements are collected from any
    /// depth below the root.
    pub fn parse(xml: &str, path: &Path) -> Result<Self, GateError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, options).map_err(|e| {
            GateError::ReportParse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        })?;

        let root = doc.root_element();
        let mut units = Vec::new();

        for (index, node) in root
            .descendants()
            .filter(|n| *n != root && n.is_element() && n.has_tag_name("package"))
            .enumerate()
        {
            let name = node.attribute("name").ok_or_else(|| GateError::ReportParse {
                path: path.to_path_buf(),
                detail: format!("package #{} has no name attribute", index + 1),
            })?;

            let line_ratio = node.attribute("line-rate").and_then(parse_ratio);
            if line_ratio.is_none() {
                debug!(unit = name, "missing or unreadable line-rate, counting as 0%");
            }

            units.push(UnitCoverage::new(name, line_ratio));
        }

        debug!(path = %path.display(), units = units.len(), "parsed coverage report");
        Ok(Self { units })
    }
}

fn parse_ratio(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}
