//! `ci-gate req-ref`: requirement reference policy for pull requests.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use ci_gate::config::GateConfig;
use ci_gate::formatters::{found_message, missing_reference_lines, skip_message};
use ci_gate::reference::{
    read_optional, validate, ChangedFileSet, PolicyTrigger, ReferenceOutcome, ReferencePattern,
};
use ci_gate::ui::{colors, outcome_icon};

use super::exit_codes;
use super::print_json;

pub fn cmd_req_ref(
    body_path: &Path,
    changed_path: &Path,
    config: &GateConfig,
    json: bool,
) -> Result<i32> {
    let body = read_optional(body_path)?;
    let changed = ChangedFileSet::load(changed_path)?;

    let triggers = PolicyTrigger::new(config.reference.triggers.iter().cloned());
    let pattern = ReferencePattern::new(&config.reference.tag, config.reference.min_digits)
        .with_context(|| {
            format!(
                "Failed to build reference pattern for tag '{}'",
                config.reference.tag
            )
        })?;

    debug!(
        tag = pattern.tag(),
        min_digits = pattern.min_digits(),
        triggers = ?triggers.prefixes(),
        files = changed.len(),
        "checking reference policy"
    );

    let outcome = validate(&changed, &body, &triggers, &pattern);

    if json {
        print_json(&outcome)?;
    }

    match &outcome {
        ReferenceOutcome::Skip => {
            if !json {
                println!("{} {}", outcome_icon(&outcome), skip_message(&pattern));
            }
            Ok(exit_codes::OK)
        }
        ReferenceOutcome::Pass { matched, .. } => {
            if !json {
                println!(
                    "{} {}",
                    outcome_icon(&outcome),
                    found_message(&pattern, &colors::identifier(matched).to_string())
                );
            }
            Ok(exit_codes::OK)
        }
        ReferenceOutcome::Fail { trigger_path } => {
            let [error, hint] = missing_reference_lines(&pattern);
            eprintln!("{} {}", outcome_icon(&outcome), colors::error(&error));
            eprintln!("  triggered by: {}", trigger_path);
            eprintln!("{}", hint);
            Ok(exit_codes::POLICY_VIOLATION)
        }
    }
}
