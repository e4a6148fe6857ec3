//! Manifest version promotion
//!
//! Rewrites the `"version"` field of a JSON package manifest (`package.json`,
//! `composer.json`, ...) without reformatting anything else in the file.

use crate::checks::Checks;
use crate::domain::{check_sequential_release, Release, SemanticVersion};
use crate::error::{ReleasePrepError, Result};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static VERSION_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""version"(\s*):(\s*)"([^"]*)""#).expect("version field pattern is valid")
});

/// Replace the first `"version": "<value>"` of a manifest with the release version
///
/// # Arguments
/// * `original` - Raw manifest text
/// * `release` - Release whose version is written
/// * `checks` - Optional validations (sequential release against the current value)
///
/// # Returns
/// * `Ok(String)` - Manifest with only the value changed and exactly one trailing newline
/// * `Err(MissingVersionField)` - No version field
/// * `Err(NonSequentialRelease | DuplicateReleaseVersion)` - Sequential check failed
///
/// An existing value that is not a semantic version skips the sequential check.
pub fn promote_manifest_version(
    original: &str,
    release: &Release,
    checks: &Checks,
) -> Result<String> {
    let captures = VERSION_FIELD
        .captures(original)
        .ok_or(ReleasePrepError::MissingVersionField)?;
    let field = captures
        .get(0)
        .ok_or(ReleasePrepError::MissingVersionField)?;
    let before_colon = captures.get(1).map_or("", |m| m.as_str());
    let after_colon = captures.get(2).map_or("", |m| m.as_str());
    let current = captures.get(3).map_or("", |m| m.as_str());

    if checks.sequential {
        match SemanticVersion::parse_exact(current) {
            Ok(current_version) => {
                check_sequential_release(&release.version, &[current_version])?;
            }
            Err(e) => debug!("Skipping sequential check for manifest version: {}", e),
        }
    }

    debug!("Rewriting manifest version {} -> {}", current, release.version);

    let mut promoted = String::with_capacity(original.len() + 8);
    promoted.push_str(&original[..field.start()]);
    promoted.push_str(&format!(
        "\"version\"{}:{}\"{}\"",
        before_colon, after_colon, release.version
    ));
    promoted.push_str(original[field.end()..].trim_end());
    promoted.push('\n');
    Ok(promoted)
}
