use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{VersionTriple, DEFAULT_TAG_PREFIX};
use crate::error::{ReleaseStampError, Result};

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "release-stamp.toml";

/// Represents the complete configuration for release-stamp.
///
/// Contains the version components, where to find the repository, and where
/// to write the generated artifact.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub artifact: ArtifactConfig,
}

/// Version components supplied by the project
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionConfig {
    #[serde(default)]
    pub major: u64,

    #[serde(default)]
    pub minor: u64,

    #[serde(default)]
    pub micro: u64,
}

impl VersionConfig {
    pub fn triple(&self) -> VersionTriple {
        VersionTriple::new(self.major, self.minor, self.micro)
    }
}

fn default_repository_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

/// Location of the repository and how its version tags are named
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_path")]
    pub path: PathBuf,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            path: default_repository_path(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("version.py")
}

/// Destination of the generated version artifact
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactConfig {
    #[serde(default = "default_artifact_path")]
    pub path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        ArtifactConfig {
            path: default_artifact_path(),
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ReleaseStampError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-stamp.toml` in current directory
/// 3. `.release-stamp.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
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
