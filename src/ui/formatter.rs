//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from the workflow.
//! The `format_*` functions build the text and are testable; `display_*` print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::{FileFailure, FileUpdate, WorkflowResult};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Line reported for a promoted file
pub fn format_update(update: &FileUpdate, release_version: &str, dry_run: bool) -> String {
    let verb = if dry_run { "Would promote" } else { "Promoted" };
    format!(
        "{} {} ({}) to {}",
        verb,
        update.path.display(),
        update.kind,
        release_version
    )
}

/// Line reported for a failed file, already prefixed with its path
pub fn format_failure(failure: &FileFailure) -> String {
    failure.to_string()
}

/// Closing line summarizing the whole run
pub fn format_summary(result: &WorkflowResult, dry_run: bool) -> String {
    if result.is_success() && dry_run {
        format!(
            "Dry run for release {}: {} file(s) would be updated",
            result.release,
            result.updated.len()
        )
    } else if result.is_success() {
        format!(
            "Prepared release {}: {} file(s) updated",
            result.release,
            result.updated.len()
        )
    } else {
        format!(
            "Release {} not prepared: {} of {} file(s) failed",
            result.release.version,
            result.failures.len(),
            result.failures.len() + result.updated.len()
        )
    }
}

/// Display the outcome of a prepare workflow.
///
/// Warnings first, then each updated file, each failure, and a summary line.
pub fn display_workflow_result(result: &WorkflowResult, dry_run: bool) {
    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    let version = result.release.version.to_string();
    for update in &result.updated {
        display_success(&format_update(update, &version, dry_run));
    }

    for failure in &result.failures {
        display_error(&format_failure(failure));
    }

    if result.is_success() {
        display_status(&format_summary(result, dry_run));
    } else {
        display_error(&format_summary(result, dry_run));
    }
}
