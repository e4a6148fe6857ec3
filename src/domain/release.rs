use crate::domain::version::SemanticVersion;
use crate::error::{ReleasePrepError, Result};
use chrono::NaiveDate;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A version paired with the date it is released on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: SemanticVersion,
    pub date: NaiveDate,
}

impl Release {
    /// Create a new release
    pub fn new(version: SemanticVersion, date: NaiveDate) -> Self {
        Release { version, date }
    }

    /// Create a release dated today (local time)
    pub fn today(version: SemanticVersion) -> Self {
        Release::new(version, chrono::Local::now().date_naive())
    }

    /// Parse a release from a version string and an ISO `YYYY-MM-DD` date
    pub fn parse(version: &str, date: &str) -> Result<Self> {
        let version = SemanticVersion::parse(version)?;
        Ok(Release::new(version, parse_date(date)?))
    }

    /// The release date formatted as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|e| ReleasePrepError::date(format!("'{}': {}", date, e)))
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.date_string())
    }
}
