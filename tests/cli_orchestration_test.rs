// tests/cli_orchestration_test.rs
use std::fs;
use std::path::{Path, PathBuf};

use release_prep::boundary::BoundaryWarning;
use release_prep::checks::Checks;
use release_prep::classify::FileKind;
use release_prep::cli::orchestration::{run_prepare_workflow, PrepareWorkflowArgs};
use release_prep::config::Config;
use release_prep::{Dialect, ReleasePrepError};
use tempfile::{tempdir, TempDir};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

/// Temp dir holding a copy of the given fixtures
fn workspace(names: &[&str]) -> TempDir {
    let dir = tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), fixture(name)).unwrap();
    }
    dir
}

fn args(version: &str, files: Vec<PathBuf>) -> PrepareWorkflowArgs {
    PrepareWorkflowArgs {
        version: version.to_string(),
        date: Some("2024-02-01".to_string()),
        files,
        checks: Checks::sequential(),
        dry_run: false,
    }
}

#[test]
fn test_promotes_every_file() {
    let dir = workspace(&["CHANGELOG.md", "CHANGELOG.adoc", "package.json"]);
    let files = vec![
        dir.path().join("CHANGELOG.md"),
        dir.path().join("package.json"),
    ];

    let result = run_prepare_workflow(&args("v1.2.0", files), &Config::default()).unwrap();

    assert!(result.is_success());
    assert_eq!(result.release.to_string(), "1.2.0 (2024-02-01)");
    assert_eq!(result.updated.len(), 2);
    assert_eq!(result.updated[0].kind, FileKind::Changelog(Dialect::Markdown));
    assert_eq!(result.updated[1].kind, FileKind::Manifest);
    assert!(result.warnings.is_empty());

    let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
    assert_eq!(changelog, fixture("CHANGELOG.promoted.md"));
    let manifest = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(manifest.contains("\"version\": \"1.2.0\""));
    assert!(manifest.contains("\"name\": \"widget\""));
}

#[test]
fn test_failures_are_collected_per_file() {
    let dir = workspace(&["CHANGELOG.md", "CHANGELOG.adoc", "package.json"]);
    fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();
    let files = vec![
        // AsciiDoc history is at 0.2.0, so 1.2.0 is not sequential there
        dir.path().join("CHANGELOG.adoc"),
        dir.path().join("notes.txt"),
        dir.path().join("CHANGELOG.md"),
        dir.path().join("missing.json"),
    ];

    let result = run_prepare_workflow(&args("1.2.0", files), &Config::default()).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.updated.len(), 1);
    assert_eq!(result.updated[0].path, dir.path().join("CHANGELOG.md"));
    assert_eq!(result.failures.len(), 3);
    assert!(matches!(
        result.failures[0].error,
        ReleasePrepError::NonSequentialRelease { .. }
    ));
    assert!(matches!(
        result.failures[1].error,
        ReleasePrepError::UnsupportedFile(_)
    ));
    assert!(matches!(result.failures[2].error, ReleasePrepError::Io(_)));

    // A failed file is left untouched
    let adoc = fs::read_to_string(dir.path().join("CHANGELOG.adoc")).unwrap();
    assert_eq!(adoc, fixture("CHANGELOG.adoc"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = workspace(&["CHANGELOG.md", "package.json"]);
    let mut workflow_args = args(
        "1.2.0",
        vec![dir.path().join("CHANGELOG.md"), dir.path().join("package.json")],
    );
    workflow_args.dry_run = true;

    let result = run_prepare_workflow(&workflow_args, &Config::default()).unwrap();

    assert!(result.is_success());
    assert_eq!(result.updated.len(), 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        fixture("CHANGELOG.md")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        fixture("package.json")
    );
}

#[test]
fn test_configured_files_are_used_when_none_given() {
    let dir = workspace(&["CHANGELOG.adoc"]);
    let adoc = dir.path().join("CHANGELOG.adoc");
    let missing = dir.path().join("package.json");

    let mut config = Config::default();
    config.files.changelogs = vec![adoc.to_string_lossy().into_owned()];
    config.files.manifests = vec![missing.to_string_lossy().into_owned()];
    config.checks = Checks::sequential();

    let mut workflow_args = args("0.3.0", vec![]);
    workflow_args.checks = Checks::none();

    let result = run_prepare_workflow(&workflow_args, &config).unwrap();

    assert!(result.is_success());
    assert_eq!(result.updated.len(), 1);
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::ConfiguredFileMissing {
            path: missing.to_string_lossy().into_owned()
        }]
    );
    assert_eq!(
        fs::read_to_string(&adoc).unwrap(),
        fixture("CHANGELOG.promoted.adoc")
    );
}

#[test]
fn test_configured_checks_apply_without_flag() {
    let dir = workspace(&["CHANGELOG.md"]);
    let mut config = Config::default();
    config.checks = Checks::sequential();

    let mut workflow_args = args("3.0.0", vec![dir.path().join("CHANGELOG.md")]);
    workflow_args.checks = Checks::none();

    let result = run_prepare_workflow(&workflow_args, &config).unwrap();
    assert!(!result.is_success());
    assert_eq!(
        result.failures[0].error.to_string(),
        "Version 3.0.0 is not a sequential release after 1.1.0"
    );
}

#[test]
fn test_nothing_to_promote() {
    let dir = tempdir().unwrap();
    let mut config = Config::default();
    config.files.changelogs = vec![dir
        .path()
        .join("CHANGELOG.md")
        .to_string_lossy()
        .into_owned()];

    let result = run_prepare_workflow(&args("1.0.0", vec![]), &config).unwrap();

    assert!(result.is_success());
    assert!(result.updated.is_empty());
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.warnings[1], BoundaryWarning::NothingToPromote);
}
