//! Sequential release rules
//!
//! Decides whether a version is a legitimate direct successor of another one. Rules are checked
//! from the most significant component down; the build segment only ever acts as a final
//! tie-breaker between otherwise identical versions.

use crate::domain::version::SemanticVersion;
use crate::error::{ReleasePrepError, Result};

/// Returns true if `next` is a valid direct successor of `current`
///
/// - Major bump: `x.0.0`, optionally with an initial pre-release (`-beta`, `-beta.0`)
/// - Minor bump: `x.y.0`, same pre-release restriction
/// - Patch bump: only from a final release, same pre-release restriction
/// - Same `x.y.z`: the next step of the current pre-release series, an initial pre-release of
///   a different label, the final release, or a new build of an identical version
///
/// # Example
/// ```ignore
/// assert!(is_sequential_upgrade(&"1.2.3".parse()?, &"1.2.4".parse()?));
/// assert!(!is_sequential_upgrade(&"1.2.3".parse()?, &"1.4.0".parse()?));
/// ```
pub fn is_sequential_upgrade(current: &SemanticVersion, next: &SemanticVersion) -> bool {
    if is_successor(current.major, next.major) {
        return next.minor == 0 && next.patch == 0 && starts_series(next);
    }
    if next.major != current.major {
        return false;
    }

    if is_successor(current.minor, next.minor) {
        return next.patch == 0 && starts_series(next);
    }
    if next.minor != current.minor {
        return false;
    }

    if is_successor(current.patch, next.patch) {
        // A pre-release has to be finalized before moving on to the next patch.
        return !current.is_prerelease() && starts_series(next);
    }
    if next.patch != current.patch {
        return false;
    }

    same_core_successor(current, next)
}

/// Asserts that `new_version` may be released after `prior_versions`
///
/// `prior_versions` is ordered most recent first. Nothing is checked when there are no prior
/// versions.
///
/// # Returns
/// * `Ok(())` - If the release is sequential
/// * `Err(DuplicateReleaseVersion)` - If `new_version` was already released
/// * `Err(NonSequentialRelease)` - If it doesn't directly follow the most recent prior version
pub fn check_sequential_release(
    new_version: &SemanticVersion,
    prior_versions: &[SemanticVersion],
) -> Result<()> {
    let Some(latest) = prior_versions.first() else {
        return Ok(());
    };

    if prior_versions.iter().any(|prior| prior == new_version) {
        return Err(ReleasePrepError::DuplicateReleaseVersion {
            version: new_version.to_string(),
        });
    }

    if !is_sequential_upgrade(latest, new_version) {
        return Err(ReleasePrepError::NonSequentialRelease {
            current: latest.to_string(),
            next: new_version.to_string(),
        });
    }

    Ok(())
}

fn starts_series(version: &SemanticVersion) -> bool {
    version.prerelease.as_ref().map_or(true, |pre| pre.is_initial())
}

/// `next == current + 1`, false when `current` is already `u64::MAX`
fn is_successor(current: u64, next: u64) -> bool {
    current.checked_add(1) == Some(next)
}

fn build_differs(current: &SemanticVersion, next: &SemanticVersion) -> bool {
    current.build != next.build
}

fn same_core_successor(current: &SemanticVersion, next: &SemanticVersion) -> bool {
    let Some(current_pre) = &current.prerelease else {
        return next.prerelease.is_none() && build_differs(current, next);
    };

    let Some(next_pre) = &next.prerelease else {
        // Finalizing the pre-release.
        return true;
    };

    if current_pre.label != next_pre.label {
        return next_pre.is_initial();
    }

    match (current_pre.increment, next_pre.increment) {
        (Some(current_n), Some(next_n)) if current_pre.same_series(next_pre) => {
            is_successor(current_n, next_n)
                || (next_n == current_n && build_differs(current, next))
        }
        // Same label with a different delimiter is not the same series.
        (Some(_), Some(_)) => false,
        (None, None) => build_differs(current, next),
        // An untracked pre-release may start counting at 0 or 1.
        (None, Some(next_n)) => next_n <= 1,
        (Some(_), None) => false,
    }
}
