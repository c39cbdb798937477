//! User configuration (`config.toml`)

mod load;

pub use load::{apply_env_overrides, config_path, load, load_from, write_config};

use crate::account::LockoutPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where statistics, accounts and logs are kept; `paths::data_dir()` if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Custom word file; the embedded list if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_list: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

impl Config {
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(crate::paths::data_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `"info"` or `"wordle_game=debug"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub stderr: bool,
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            stderr: true,
            file: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub max_failed_attempts: u32,
    pub lockout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let policy = LockoutPolicy::default();
        Self {
            max_failed_attempts: policy.max_failed_attempts,
            lockout_secs: policy.lockout_secs,
        }
    }
}

impl From<AuthConfig> for LockoutPolicy {
    fn from(auth: AuthConfig) -> Self {
        Self {
            max_failed_attempts: auth.max_failed_attempts,
            lockout_secs: auth.lockout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
