use std::fmt;

/// Warnings that occur when selecting files to promote.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A file listed in the configuration does not exist
    ConfiguredFileMissing { path: String },
    /// Neither the command line nor the configuration named any existing file
    NothingToPromote,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ConfiguredFileMissing { path } => {
                write!(f, "Configured file '{}' does not exist, skipping", path)
            }
            BoundaryWarning::NothingToPromote => {
                write!(f, "No files to promote")
            }
        }
    }
}
