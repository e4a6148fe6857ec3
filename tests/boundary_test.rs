// tests/boundary_test.rs
use release_prep::boundary::BoundaryWarning;

#[test]
fn test_configured_file_missing_message() {
    let warning = BoundaryWarning::ConfiguredFileMissing {
        path: "docs/CHANGELOG.adoc".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "Configured file 'docs/CHANGELOG.adoc' does not exist, skipping"
    );
}

#[test]
fn test_nothing_to_promote_message() {
    assert_eq!(
        BoundaryWarning::NothingToPromote.to_string(),
        "No files to promote"
    );
}

#[test]
fn test_warnings_compare_by_path() {
    let a = BoundaryWarning::ConfiguredFileMissing {
        path: "a.md".to_string(),
    };
    let b = BoundaryWarning::ConfiguredFileMissing {
        path: "b.md".to_string(),
    };
    assert_ne!(a, b);
    assert_eq!(a.clone(), a);
}
