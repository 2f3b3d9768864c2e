//! Command handlers for the ci-gate CLI
//!
//! Handlers return the process exit code for a completed check. Errors
//! propagated out of a handler mean the check could not run at all.

use anyhow::Result;
use serde::Serialize;

pub mod coverage;
pub mod req_ref;

/// Process exit codes shared by the commands.
pub mod exit_codes {
    /// Check passed or did not apply
    pub const OK: i32 = 0;
    /// Reference policy violated
    pub const POLICY_VIOLATION: i32 = 1;
    /// Usage or input error, and coverage threshold violations
    pub const FAILURE: i32 = 2;
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
