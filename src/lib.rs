pub mod boundary;
pub mod changelog;
pub mod checks;
pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ui;

pub use changelog::{promote_changelog, Dialect};
pub use checks::Checks;
pub use domain::{check_sequential_release, is_sequential_upgrade, Release, SemanticVersion};
pub use error::{ReleasePrepError, Result};
pub use manifest::promote_manifest_version;
