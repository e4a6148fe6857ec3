use crate::domain::prerelease::Prerelease;
use crate::error::{ReleasePrepError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Unanchored so that versions embedded in tags, headings or paths are found.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+\.\d+\.\d+(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
    )
    .expect("version pattern is valid")
});

/// Semantic version representation
///
/// Unlike a plain `major.minor.patch` triple this keeps the pre-release identifier decomposed
/// (see [`Prerelease`]) and the build metadata verbatim. Values are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Prerelease>,
    pub build: Option<String>,
}

impl SemanticVersion {
    /// Create a release version with no pre-release or build segment
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Find the first version-looking substring of `input`
    ///
    /// Any prefix is ignored, so `v1.2.3`, `release/1.2.3` and `[1.2.3] - 2024-01-01` all
    /// yield `1.2.3`. The match does not have to span the whole input.
    pub fn extract(input: &str) -> Option<&str> {
        VERSION_PATTERN.find(input).map(|m| m.as_str())
    }

    /// Parse the first version found in `input` (e.g., "v1.2.3-beta.1" -> 1.2.3-beta.1)
    pub fn parse(input: &str) -> Result<Self> {
        let found = Self::extract(input).ok_or_else(|| {
            ReleasePrepError::version(format!("No semantic version found in '{}'", input))
        })?;

        Self::parse_exact(found)
    }

    /// Parse `input` as a whole; no prefix or trailing text is allowed
    ///
    /// `1.2.3.4`, `^1.2.3` and `v1.2.3` are all rejected here even though [`parse`] finds
    /// `1.2.3` in each of them.
    ///
    /// [`parse`]: SemanticVersion::parse
    pub fn parse_exact(input: &str) -> Result<Self> {
        let parsed = semver::Version::parse(input).map_err(|e| {
            ReleasePrepError::version(format!("Invalid version '{}': {}", input, e))
        })?;

        let prerelease = if parsed.pre.is_empty() {
            None
        } else {
            Some(Prerelease::parse(parsed.pre.as_str())?)
        };

        let build = if parsed.build.is_empty() {
            None
        } else {
            Some(parsed.build.as_str().to_string())
        };

        Ok(SemanticVersion {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
            build,
        })
    }

    /// True if the version carries a pre-release or build segment
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some() || self.build.is_some()
    }

    /// True when `other` has the same major, minor and patch numbers
    pub fn same_core(&self, other: &SemanticVersion) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }
}

impl FromStr for SemanticVersion {
    type Err = ReleasePrepError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
