use crate::error::{ReleasePrepError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional validations requested for a promotion
///
/// Parsed from a comma-separated list of check names (currently only `sequential`), or read
/// from the `[checks]` table of the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Checks {
    /// Require the new version to directly follow the most recent released one
    pub sequential: bool,
}

impl Checks {
    /// No optional checks
    pub fn none() -> Self {
        Checks::default()
    }

    /// Only the sequential-release check
    pub fn sequential() -> Self {
        Checks { sequential: true }
    }

    /// Checks requested by either side
    pub fn union(self, other: Checks) -> Self {
        Checks {
            sequential: self.sequential || other.sequential,
        }
    }
}

impl FromStr for Checks {
    type Err = ReleasePrepError;

    fn from_str(s: &str) -> Result<Self> {
        let mut checks = Checks::none();
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match name.to_lowercase().as_str() {
                "sequential" => checks.sequential = true,
                other => {
                    return Err(ReleasePrepError::config(format!(
                        "Unknown check '{}' (expected: sequential)",
                        other
                    )))
                }
            }
        }
        Ok(checks)
    }
}

impl fmt::Display for Checks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sequential {
            write!(f, "sequential")
        } else {
            write!(f, "none")
        }
    }
}
