//! Maps files to the promoter that understands them, by extension only

use crate::changelog::Dialect;
use crate::error::{ReleasePrepError, Result};
use std::fmt;
use std::path::Path;

/// What kind of document a file is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Changelog(Dialect),
    Manifest,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Changelog(dialect) => write!(f, "{} changelog", dialect),
            FileKind::Manifest => write!(f, "manifest"),
        }
    }
}

/// Classify a file by its extension
///
/// # Returns
/// * `Ok(FileKind::Changelog(_))` - `.md`, `.markdown`, `.adoc`, `.asciidoc`
/// * `Ok(FileKind::Manifest)` - `.json`
/// * `Err(UnsupportedFile)` - Anything else
pub fn classify(path: &Path) -> Result<FileKind> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if let Some(dialect) = Dialect::from_extension(extension) {
        return Ok(FileKind::Changelog(dialect));
    }

    if extension.eq_ignore_ascii_case("json") {
        return Ok(FileKind::Manifest);
    }

    Err(ReleasePrepError::unsupported(format!(
        "{} (expected .md, .markdown, .adoc, .asciidoc or .json)",
        path.display()
    )))
}
