//! Configuration file loader.

use std::path::{Path, PathBuf};

use super::types::Config;

const LOCAL_FILE: &str = ".mtga-log.toml";
const APP_DIR: &str = "mtga-log";
const USER_FILE: &str = "config.toml";

/// Finds and reads the first config file on its search path.
///
/// The search path is `./.mtga-log.toml`, then `mtga-log/config.toml` under
/// the user's config directory.
#[derive(Debug)]
pub struct ConfigLoader {
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader over the default search path.
    #[must_use]
    pub fn new() -> Self {
        let user = dirs::config_dir().map(|dir| dir.join(APP_DIR).join(USER_FILE));
        Self {
            search_paths: std::iter::once(PathBuf::from(LOCAL_FILE))
                .chain(user)
                .collect(),
        }
    }

    /// Create a loader that only looks at `path`, e.g. from `--config`.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            search_paths: vec![path],
        }
    }

    /// Load the first config file found, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match self.find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::load_from_path(path)
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn find_config_file(&self) -> Option<&Path> {
        self.search_paths
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// A config file that exists but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
