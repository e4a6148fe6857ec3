use crate::checks::Checks;
use crate::error::{ReleasePrepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "releaseprep.toml";

/// Configuration file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releaseprep.toml";

/// Represents the complete configuration for release-prep.
///
/// Lists the files promoted when none are given on the command line, and the checks that are
/// always enabled.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub checks: Checks,
}

/// Returns the default list of changelog paths.
fn default_changelogs() -> Vec<String> {
    vec!["CHANGELOG.md".to_string()]
}

/// Files to promote, relative to the working directory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    #[serde(default = "default_changelogs")]
    pub changelogs: Vec<String>,

    #[serde(default)]
    pub manifests: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            changelogs: default_changelogs(),
            manifests: Vec::new(),
        }
    }
}

impl FilesConfig {
    /// Changelogs first, then manifests
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.changelogs.iter().chain(self.manifests.iter())
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleasePrepError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releaseprep.toml` in current directory
/// 3. `.releaseprep.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
