//! Centralized UI formatting and color utilities
//!
//! Icons and colors shared by the gate commands. `colored` honors `NO_COLOR`.

use colored::{ColoredString, Colorize};

use crate::reference::ReferenceOutcome;

/// Returns a colored icon for a pass/fail result.
pub fn result_icon(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Returns a colored icon for a reference policy outcome.
///
/// Icons:
/// - Skip: ○ (dimmed)
/// - Pass: ✓ (green)
/// - Fail: ✗ (red)
pub fn outcome_icon(outcome: &ReferenceOutcome) -> ColoredString {
    match outcome {
        ReferenceOutcome::Skip => "○".dimmed(),
        ReferenceOutcome::Pass { .. } => result_icon(true),
        ReferenceOutcome::Fail { .. } => result_icon(false),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (unit names, references)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}
