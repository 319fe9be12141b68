//! TOML configuration file loading
//!
//! An explicitly given configuration file must exist. Without one, the
//! default location under the user's config directory is used if present.

use crate::core::error_handling::ContextualError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Values accepted in the configuration file.
/// Multi-word keys may be written as `log-level` or `log_level`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub program: Option<String>,
    pub verbose: Option<bool>,
    pub format: Option<String>,
    pub color: Option<bool>,
    #[serde(alias = "log_level")]
    pub log_level: Option<String>,
    #[serde(alias = "log_format")]
    pub log_format: Option<String>,
    #[serde(alias = "log_file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

/// Default configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Speedb").join("speedb-version.toml"))
}

/// Parse configuration file contents
pub fn parse_config(path: &Path, contents: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str::<FileConfig>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the configuration file, if any
pub fn load_config_file(config_file: Option<&Path>) -> Result<Option<FileConfig>, ConfigError> {
    let path = match config_file {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_config(&path, &contents).map(Some)
}
