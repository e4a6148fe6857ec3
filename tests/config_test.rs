// tests/config_test.rs
use release_prep::config::{load_config, parse_config, Config, FilesConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.files.changelogs, vec!["CHANGELOG.md".to_string()]);
    assert!(config.files.manifests.is_empty());
    assert!(!config.checks.sequential);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[files]
changelogs = ["CHANGELOG.md", "docs/CHANGELOG.adoc"]
manifests = ["package.json"]

[checks]
sequential = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.files.changelogs,
        vec!["CHANGELOG.md".to_string(), "docs/CHANGELOG.adoc".to_string()]
    );
    assert_eq!(config.files.manifests, vec!["package.json".to_string()]);
    assert!(config.checks.sequential);
}

#[test]
fn test_load_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/releaseprep.toml");
    let config = load_config(Some(path)).unwrap();
    let files: Vec<&String> = config.files.all().collect();
    assert_eq!(files, vec!["CHANGELOG.md", "package.json"]);
    assert!(config.checks.sequential);
}

#[test]
fn test_missing_custom_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(load_config(Some(path.to_str().unwrap())).is_err());
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(parse_config("[files]\nchangelog = [\"CHANGELOG.md\"]\n").is_err());
    assert!(parse_config("[checks]\nmonotonic = true\n").is_err());
    assert!(parse_config("[branches]\nmain = \"v{version}\"\n").is_err());
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.files, FilesConfig::default());
}

#[test]
#[serial]
fn test_local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("releaseprep.toml"),
        "[files]\nchangelogs = [\"HISTORY.md\"]\n",
    )
    .unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(previous).unwrap();

    let config = config.unwrap();
    assert_eq!(config.files.changelogs, vec!["HISTORY.md".to_string()]);
}

#[test]
#[serial]
fn test_invalid_local_config_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("releaseprep.toml"), "[files\n").unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(previous).unwrap();

    let err = config.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}
