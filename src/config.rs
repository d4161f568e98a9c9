use crate::domain::BumpStrategy;
use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "gitsemver.toml";

/// Name of the per-user configuration file inside the config directory
pub const USER_CONFIG_FILE: &str = ".gitsemver.toml";

/// Represents the complete configuration for git-semver.
///
/// Every value can be overridden from the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tagging: TaggingConfig,

    #[serde(default)]
    pub remote: RemoteConfig,
}

/// How tags are named and bumped
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TaggingConfig {
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,

    #[serde(default)]
    pub bump_strategy: BumpStrategy,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

/// Remote synchronisation before and after tagging
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    #[serde(default)]
    pub fetch: bool,

    #[serde(default)]
    pub push: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
            fetch: false,
            push: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `gitsemver.toml` in current directory
/// 3. `.gitsemver.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        GitSemverError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let config = toml::from_str(&content).map_err(|e| {
        GitSemverError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })?;

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
