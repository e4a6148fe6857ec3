use thiserror::Error;

/// Unified error type for release-prep operations
#[derive(Error, Debug)]
pub enum ReleasePrepError {
    #[error("Unreleased section is missing")]
    MissingUnreleasedSection,

    #[error("Unreleased section is empty")]
    EmptyUnreleasedSection,

    #[error("Unreleased section has no repository link")]
    MissingRepositoryLink,

    #[error("Version {next} is not a sequential release after {current}")]
    NonSequentialRelease { current: String, next: String },

    #[error("Version {version} has already been released")]
    DuplicateReleaseVersion { version: String },

    #[error("Manifest has no \"version\" field")]
    MissingVersionField,

    #[error("Version parsing error: {0}")]
    InvalidVersion(String),

    #[error("Invalid release date: {0}")]
    InvalidDate(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-prep
pub type Result<T> = std::result::Result<T, ReleasePrepError>;

impl ReleasePrepError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleasePrepError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleasePrepError::InvalidVersion(msg.into())
    }

    /// Create a date error with context
    pub fn date(msg: impl Into<String>) -> Self {
        ReleasePrepError::InvalidDate(msg.into())
    }

    /// Create an unsupported-file error with context
    pub fn unsupported(msg: impl Into<String>) -> Self {
        ReleasePrepError::UnsupportedFile(msg.into())
    }

    /// True for the failures a promotion reports about document content, as opposed to
    /// configuration, parsing of arguments, or I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ReleasePrepError::MissingUnreleasedSection
                | ReleasePrepError::EmptyUnreleasedSection
                | ReleasePrepError::MissingRepositoryLink
                | ReleasePrepError::NonSequentialRelease { .. }
                | ReleasePrepError::DuplicateReleaseVersion { .. }
                | ReleasePrepError::MissingVersionField
        )
    }
}
