//! Main workflow orchestration logic
//!
//! Selects the files to promote, runs the matching promoter on each one and collects every
//! per-file failure instead of stopping at the first. Nothing in here formats output for the
//! terminal; `main.rs` does that with the returned [`WorkflowResult`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::boundary::BoundaryWarning;
use crate::changelog::promote_changelog;
use crate::checks::Checks;
use crate::classify::{classify, FileKind};
use crate::config::Config;
use crate::domain::release::parse_date;
use crate::domain::{Release, SemanticVersion};
use crate::error::ReleasePrepError;
use crate::manifest::promote_manifest_version;

/// Arguments for the prepare workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrepareWorkflowArgs {
    /// Version being released (a `v` prefix is accepted)
    pub version: String,

    /// Release date as `YYYY-MM-DD`; today when absent
    pub date: Option<String>,

    /// Files to promote; the configured files when empty
    pub files: Vec<PathBuf>,

    /// Checks requested on the command line, added to the configured ones
    pub checks: Checks,

    /// Promote without writing anything back
    pub dry_run: bool,
}

/// A file that was promoted
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// A file that could not be promoted
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ReleasePrepError,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Result of a prepare workflow
#[derive(Debug)]
pub struct WorkflowResult {
    /// The release every file was promoted to
    pub release: Release,

    /// Files promoted (and written, unless dry run)
    pub updated: Vec<FileUpdate>,

    /// Files that failed, in processing order
    pub failures: Vec<FileFailure>,

    /// Non-fatal issues found while selecting files
    pub warnings: Vec<BoundaryWarning>,
}

impl WorkflowResult {
    /// True when no file failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Promote the text of one document according to its kind
pub fn promote_text(
    kind: FileKind,
    original: &str,
    release: &Release,
    checks: &Checks,
) -> crate::error::Result<String> {
    match kind {
        FileKind::Changelog(dialect) => promote_changelog(dialect, original, release, checks),
        FileKind::Manifest => promote_manifest_version(original, release, checks),
    }
}

/// Main prepare workflow
///
/// Orchestrates the release preparation:
/// 1. Build the release from the version and date
/// 2. Select the files (command line, else configuration)
/// 3. Classify, read and promote each file
/// 4. Write every successfully promoted file (unless dry run)
///
/// # Arguments
///
/// * `args` - Workflow arguments (version, date, files, checks, dry_run)
/// * `config` - release-prep configuration
///
/// # Returns
///
/// The per-file outcome, or an error if the version or date is invalid
pub fn run_prepare_workflow(args: &PrepareWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let version = SemanticVersion::parse(&args.version)
        .with_context(|| format!("Invalid release version '{}'", args.version))?;
    let release = match &args.date {
        Some(date) => Release::new(version, parse_date(date)?),
        None => Release::today(version),
    };
    let checks = args.checks.union(config.checks);
    info!("Preparing release {} (checks: {})", release, checks);

    let (targets, warnings) = select_files(args, config);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let mut updated = Vec::new();
    let mut failures = Vec::new();
    for path in targets {
        match promote_file(&path, &release, &checks, args.dry_run) {
            Ok(kind) => updated.push(FileUpdate { path, kind }),
            Err(error) => {
                if error.is_validation() {
                    debug!("Rejected {}: {}", path.display(), error);
                } else {
                    warn!("Failed to promote {}: {}", path.display(), error);
                }
                failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(WorkflowResult {
        release,
        updated,
        failures,
        warnings,
    })
}

/// Files named on the command line, or the configured files that exist
fn select_files(args: &PrepareWorkflowArgs, config: &Config) -> (Vec<PathBuf>, Vec<BoundaryWarning>) {
    let mut warnings = Vec::new();

    let targets: Vec<PathBuf> = if args.files.is_empty() {
        config
            .files
            .all()
            .filter_map(|path| {
                if Path::new(path).exists() {
                    Some(PathBuf::from(path))
                } else {
                    warnings.push(BoundaryWarning::ConfiguredFileMissing { path: path.clone() });
                    None
                }
            })
            .collect()
    } else {
        args.files.clone()
    };

    if targets.is_empty() {
        warnings.push(BoundaryWarning::NothingToPromote);
    }

    (targets, warnings)
}

fn promote_file(
    path: &Path,
    release: &Release,
    checks: &Checks,
    dry_run: bool,
) -> crate::error::Result<FileKind> {
    let kind = classify(path)?;
    let original = fs::read_to_string(path)?;
    let promoted = promote_text(kind, &original, release, checks)?;

    if dry_run {
        debug!("Dry run: not writing {}", path.display());
    } else {
        fs::write(path, promoted)?;
    }
    Ok(kind)
}
