//! Pre-release identifier handling for semantic versions
//!
//! A pre-release identifier such as `beta.3` is split into a textual label (`beta`), the
//! delimiter that separates it from its counter (`.`), and the trailing numeric increment (`3`).
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{ReleasePrepError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier with an optional trailing increment
///
/// # Examples
/// - "alpha" -> Prerelease { label: "alpha", delimiter: None, increment: None }
/// - "beta.1" -> Prerelease { label: "beta", delimiter: Some('.'), increment: Some(1) }
/// - "rc-3" -> Prerelease { label: "rc", delimiter: Some('-'), increment: Some(3) }
/// - "7" -> Prerelease { label: "", delimiter: None, increment: Some(7) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerelease {
    identifier: String,
    /// Everything before the trailing numeric group
    pub label: String,
    /// The character separating `label` from `increment`
    pub delimiter: Option<char>,
    /// Trailing numeric group, if the identifier ends with one
    pub increment: Option<u64>,
}

impl Prerelease {
    /// Decompose a pre-release identifier (the part after `-` in a version)
    ///
    /// # Returns
    /// * `Ok(Prerelease)` - Decomposed identifier
    /// * `Err` - If the identifier is empty
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ReleasePrepError::version("Empty pre-release identifier"));
        }

        let identifier = s.to_string();

        if is_numeric(s) {
            if let Ok(increment) = s.parse::<u64>() {
                return Ok(Prerelease {
                    identifier,
                    label: String::new(),
                    delimiter: None,
                    increment: Some(increment),
                });
            }
        }

        if let Some(pos) = s.rfind(['.', '-']) {
            let tail = &s[pos + 1..];
            if is_numeric(tail) {
                if let Ok(increment) = tail.parse::<u64>() {
                    return Ok(Prerelease {
                        identifier,
                        label: s[..pos].to_string(),
                        delimiter: s[pos..].chars().next(),
                        increment: Some(increment),
                    });
                }
            }
        }

        Ok(Prerelease {
            identifier,
            label: s.to_string(),
            delimiter: None,
            increment: None,
        })
    }

    /// The identifier exactly as it appeared in the version string
    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    /// True when this identifier starts a new pre-release series
    ///
    /// An identifier with no counter, or a counter of zero, is an initial pre-release.
    pub fn is_initial(&self) -> bool {
        self.increment.map_or(true, |n| n == 0)
    }

    /// True when `other` uses the same label and delimiter
    pub fn same_series(&self, other: &Prerelease) -> bool {
        self.label == other.label && self.delimiter == other.delimiter
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

impl FromStr for Prerelease {
    type Err = ReleasePrepError;

    fn from_str(s: &str) -> Result<Self> {
        Prerelease::parse(s)
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
