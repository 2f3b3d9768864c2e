//! Requirement reference policy for pull requests.
//!
//! When a change touches a policy-triggering path (requirement or spec
//! documents by default), its description must cite a reference such as
//! `REQ-042`. Changes that touch no triggering path skip the check.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::GateError;

/// Read a text input that may legitimately be absent. A missing file reads as "".
pub fn read_optional(path: &Path) -> Result<String, GateError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "input absent, treating as empty");
            Ok(String::new())
        }
        Err(source) => Err(GateError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Repository-relative paths changed by one pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFileSet {
    paths: BTreeSet<String>,
}

impl ChangedFileSet {
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(|p| {
                    let p: String = p.into();
                    p.trim().to_string()
                })
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Parse a newline-delimited list. Lines are trimmed; blank lines are skipped.
    pub fn parse(list: &str) -> Self {
        Self::from_paths(list.lines())
    }

    /// Load a newline-delimited list from disk. A missing file is an empty set.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        read_optional(path).map(|list| Self::parse(&list))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Path prefixes that make a reference mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTrigger {
    prefixes: Vec<String>,
}

impl PolicyTrigger {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// First changed path, in sorted order, that starts with any prefix.
    pub fn first_match<'a>(&self, changed: &'a ChangedFileSet) -> Option<&'a str> {
        changed
            .iter()
            .find(|path| self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str())))
    }
}

/// A literal tag followed by at least `min_digits` ASCII digits.
#[derive(Debug, Clone)]
pub struct ReferencePattern {
    tag: String,
    min_digits: usize,
    regex: Regex,
}

impl ReferencePattern {
    pub fn new(tag: &str, min_digits: usize) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("{}[0-9]{{{},}}", regex::escape(tag), min_digits))?;
        Ok(Self {
            tag: tag.to_string(),
            min_digits,
            regex,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn min_digits(&self) -> usize {
        self.min_digits
    }

    /// Human label for the reference kind, e.g. `REQ` for tag `REQ-`.
    pub fn label(&self) -> &str {
        let trimmed = self.tag.trim_end_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            &self.tag
        } else {
            trimmed
        }
    }

    /// Placeholder shown in hints, e.g. `REQ-###`.
    pub fn placeholder(&self) -> String {
        format!("{}{}", self.tag, "#".repeat(self.min_digits))
    }

    /// First match in `text`, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }
}

/// Outcome of the reference policy. `Skip` means the policy did not apply
/// and is not the same as `Pass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReferenceOutcome {
    /// No changed path matched a trigger prefix
    Skip,
    /// Policy applied and the body cites a reference
    Pass {
        matched: String,
        trigger_path: String,
    },
    /// Policy applied and the body cites no reference
    Fail { trigger_path: String },
}

impl ReferenceOutcome {
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Decide whether `body` satisfies the reference policy for `changed`.
pub fn validate(
    changed: &ChangedFileSet,
    body: &str,
    triggers: &PolicyTrigger,
    pattern: &ReferencePattern,
) -> ReferenceOutcome {
    let Some(trigger_path) = triggers.first_match(changed) else {
        debug!(files = changed.len(), "no triggering paths changed");
        return ReferenceOutcome::Skip;
    };

    debug!(path = trigger_path, "reference policy triggered");

    match pattern.find(body) {
        Some(matched) => ReferenceOutcome::Pass {
            matched: matched.to_string(),
            trigger_path: trigger_path.to_string(),
        },
        None => ReferenceOutcome::Fail {
            trigger_path: trigger_path.to_string(),
        },
    }
}
