// tests/promotion_test.rs
use std::fs;
use std::path::Path;

use release_prep::changelog::layout::normalize;
use release_prep::domain::Release;
use release_prep::{promote_changelog, promote_manifest_version, Checks, Dialect, ReleasePrepError};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

fn release(version: &str) -> Release {
    Release::parse(version, "2024-02-01").unwrap()
}

#[test]
fn test_markdown_reference_changelog() {
    let promoted = promote_changelog(
        Dialect::Markdown,
        &fixture("CHANGELOG.md"),
        &release("1.2.0"),
        &Checks::sequential(),
    )
    .unwrap();
    assert_eq!(promoted, fixture("CHANGELOG.promoted.md"));
}

#[test]
fn test_asciidoc_changelog() {
    let promoted = promote_changelog(
        Dialect::AsciiDoc,
        &fixture("CHANGELOG.adoc"),
        &release("0.3.0"),
        &Checks::sequential(),
    )
    .unwrap();
    assert_eq!(promoted, fixture("CHANGELOG.promoted.adoc"));
}

#[test]
fn test_prior_releases_are_kept_verbatim() {
    let original = fixture("CHANGELOG.md");
    let promoted = promote_changelog(
        Dialect::Markdown,
        &original,
        &release("1.2.0"),
        &Checks::none(),
    )
    .unwrap();

    let prior = |text: &str| -> String {
        let start = text.find("## [1.1.0]").unwrap();
        let end = text.find("\n[").unwrap();
        text[start..end].to_string()
    };
    assert_eq!(prior(&promoted), prior(&original));
}

#[test]
fn test_promoted_changelog_is_already_normalized() {
    let promoted = promote_changelog(
        Dialect::AsciiDoc,
        &fixture("CHANGELOG.adoc"),
        &release("0.3.0"),
        &Checks::none(),
    )
    .unwrap();
    assert_eq!(normalize(Dialect::AsciiDoc, &promoted), promoted);
}

#[test]
fn test_promoting_twice_needs_new_entries() {
    let once = promote_changelog(
        Dialect::Markdown,
        &fixture("CHANGELOG.md"),
        &release("1.2.0"),
        &Checks::none(),
    )
    .unwrap();
    let twice = promote_changelog(Dialect::Markdown, &once, &release("1.3.0"), &Checks::none());
    assert!(matches!(twice, Err(ReleasePrepError::EmptyUnreleasedSection)));
}

#[test]
fn test_sequential_check_rejects_skipped_minor() {
    let result = promote_changelog(
        Dialect::Markdown,
        &fixture("CHANGELOG.md"),
        &release("1.3.0"),
        &Checks::sequential(),
    );
    assert!(matches!(
        result,
        Err(ReleasePrepError::NonSequentialRelease { current, next })
            if current == "1.1.0" && next == "1.3.0"
    ));
}

#[test]
fn test_sequential_check_rejects_released_version() {
    let result = promote_changelog(
        Dialect::Markdown,
        &fixture("CHANGELOG.md"),
        &release("1.0.0"),
        &Checks::sequential(),
    );
    assert!(matches!(
        result,
        Err(ReleasePrepError::DuplicateReleaseVersion { version }) if version == "1.0.0"
    ));
}

#[test]
fn test_manifest_fixture() {
    let promoted = promote_manifest_version(
        &fixture("package.json"),
        &release("1.2.0"),
        &Checks::sequential(),
    )
    .unwrap();
    assert_eq!(
        promoted,
        fixture("package.json").replace("\"1.1.0\"", "\"1.2.0\"")
    );
}

#[test]
fn test_manifest_prerelease_series() {
    let manifest = "{\n  \"version\": \"2.0.0-rc.1\"\n}\n";
    let checks = Checks::sequential();

    let next = promote_manifest_version(manifest, &release("2.0.0-rc.2"), &checks).unwrap();
    assert_eq!(next, "{\n  \"version\": \"2.0.0-rc.2\"\n}\n");

    let final_release = promote_manifest_version(manifest, &release("2.0.0"), &checks).unwrap();
    assert_eq!(final_release, "{\n  \"version\": \"2.0.0\"\n}\n");

    assert!(promote_manifest_version(manifest, &release("2.0.0-rc.3"), &checks).is_err());
}

#[test]
fn test_asciidoc_bare_url_headings() {
    let original = "= Changelog\n\n\
                    == https://github.com/o/r/compare/v1.0.0...HEAD[Unreleased]\n\
                    * Fix\n\n\
                    == https://github.com/o/r/releases/tag/v1.0.0[1.0.0] - 2024-01-01\n\
                    * Initial\n";
    let promoted = promote_changelog(
        Dialect::AsciiDoc,
        original,
        &release("1.0.1"),
        &Checks::sequential(),
    )
    .unwrap();
    assert_eq!(
        promoted,
        "= Changelog\n\n\
         == https://github.com/o/r/compare/v1.0.1...HEAD[Unreleased]\n\n\
         == https://github.com/o/r/compare/v1.0.0...v1.0.1[1.0.1] - 2024-02-01\n\
         * Fix\n\n\
         == https://github.com/o/r/releases/tag/v1.0.0[1.0.0] - 2024-01-01\n\
         * Initial\n"
    );
}

#[test]
fn test_asciidoc_unreleased_without_link() {
    let result = promote_changelog(
        Dialect::AsciiDoc,
        "= Changelog\n\n== Unreleased\n* Fix\n",
        &release("1.0.0"),
        &Checks::none(),
    );
    assert!(matches!(result, Err(ReleasePrepError::MissingRepositoryLink)));
}

#[test]
fn test_sequential_check_at_numeric_limits() {
    let original = "## [Unreleased](https://x/y)\n- a\n\n\
                    ## [1.0.0-beta.18446744073709551615] - 2024-01-01\n- b\n";
    let result = promote_changelog(
        Dialect::Markdown,
        original,
        &release("1.0.0-beta.1"),
        &Checks::sequential(),
    );
    assert!(matches!(
        result,
        Err(ReleasePrepError::NonSequentialRelease { .. })
    ));

    let original = "## [Unreleased](https://x/y)\n- a\n\n\
                    ## [18446744073709551615.0.0] - 2024-01-01\n- b\n";
    let result = promote_changelog(
        Dialect::Markdown,
        original,
        &release("1.0.0"),
        &Checks::sequential(),
    );
    assert!(matches!(
        result,
        Err(ReleasePrepError::NonSequentialRelease { .. })
    ));
}

#[test]
fn test_manifest_with_malformed_version_skips_sequential_check() {
    let promoted = promote_manifest_version(
        "{\n  \"version\": \"1.2.3.4\"\n}\n",
        &release("5.0.0"),
        &Checks::sequential(),
    )
    .unwrap();
    assert_eq!(promoted, "{\n  \"version\": \"5.0.0\"\n}\n");
}
