//! Configuration management for tokenauth

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default storage key for the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Which token storage backend to select at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// SQLite-backed storage in the data directory
    #[default]
    Persistent,
    /// No storage; every read is absent and every write is dropped
    None,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the auth API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Key the token is stored under
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Token storage backend
    #[serde(default)]
    pub storage: StorageKind,

    /// Directory holding the token database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_key: default_token_key(),
            storage: StorageKind::default(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".tokenauth").join("config.yaml"))
    }

    /// Resolve the config path: explicit path if given, otherwise the default
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields defaults; a missing
    /// file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Apply command-line / environment overrides on top of the file values
    pub fn apply_overrides(
        &mut self,
        api_url: Option<&str>,
        data_dir: Option<&str>,
        storage: Option<StorageKind>,
    ) {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }
        if let Some(dir) = data_dir {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(kind) = storage {
            self.storage = kind;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_url must not be empty".to_string()).into());
        }
        if self.token_key.is_empty() {
            return Err(ConfigError::Invalid("token_key must not be empty".to_string()).into());
        }
        Ok(())
    }
}
