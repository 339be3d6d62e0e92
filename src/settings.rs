//! Client settings
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! `config.toml` in the platform config directory (or the file passed with
//! `--config`), and `SYMBOL_CLI_*` environment variables. Command line flags
//! are applied on top by the caller.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "SYMBOL_CLI";
pub const PROFILES_FILE_NAME: &str = "profiles.json";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DEADLINE_HOURS: i64 = 2;
pub const DEFAULT_HASH_LOCK_AMOUNT: &str = "10";
pub const DEFAULT_HASH_LOCK_DURATION: u64 = 480;
pub const DEFAULT_STATUS_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_STATUS_POLL_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Config file not found: {0}")]
    MissingFile(PathBuf),
    #[error("No home directory available to store profiles")]
    NoHomeDir,
}

/// Values as read from file and environment; everything optional
#[derive(Debug, Default, Deserialize)]
struct SettingsFromFile {
    profiles_file: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
    deadline_hours: Option<i64>,
    hash_lock_amount: Option<String>,
    hash_lock_duration: Option<u64>,
    status_poll_interval_ms: Option<u64>,
    status_poll_timeout_secs: Option<u64>,
    page_size: Option<u32>,
}

/// Settings filled with either configured values or defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub profiles_file: PathBuf,
    pub request_timeout_secs: u64,
    pub deadline_hours: i64,
    /// Relative amount of network currency locked for aggregate bonded
    /// transactions
    pub hash_lock_amount: String,
    /// Blocks the hash lock stays active
    pub hash_lock_duration: u64,
    pub status_poll_interval_ms: u64,
    pub status_poll_timeout_secs: u64,
    pub page_size: u32,
}

impl Settings {
    /// Defaults rooted at `config_dir`
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self {
            profiles_file: config_dir.join(PROFILES_FILE_NAME),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            deadline_hours: DEFAULT_DEADLINE_HOURS,
            hash_lock_amount: DEFAULT_HASH_LOCK_AMOUNT.to_string(),
            hash_lock_duration: DEFAULT_HASH_LOCK_DURATION,
            status_poll_interval_ms: DEFAULT_STATUS_POLL_INTERVAL_MS,
            status_poll_timeout_secs: DEFAULT_STATUS_POLL_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Platform config directory, e.g. `~/.config/symbol-cli` on Linux
    pub fn config_dir() -> Result<PathBuf, SettingsError> {
        ProjectDirs::from("io", "symbol", "symbol-cli")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(SettingsError::NoHomeDir)
    }

    /// Load settings from the default location, or from `config_file` when
    /// given (which must then exist)
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let config_dir = Self::config_dir()?;
        let (file, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (config_dir.join("config.toml"), false),
        };
        if required && !file.exists() {
            return Err(SettingsError::MissingFile(file));
        }
        Self::load_from(&config_dir, &file)
    }

    fn load_from(config_dir: &Path, file: &Path) -> Result<Self, SettingsError> {
        log::debug!("Loading settings from {:?}", file);
        let from_file = Config::builder()
            .add_source(File::from(file.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<SettingsFromFile>()?;

        let defaults = Self::with_config_dir(config_dir);
        Ok(Self {
            profiles_file: from_file.profiles_file.unwrap_or(defaults.profiles_file),
            request_timeout_secs: from_file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            deadline_hours: from_file.deadline_hours.unwrap_or(defaults.deadline_hours),
            hash_lock_amount: from_file
                .hash_lock_amount
                .unwrap_or(defaults.hash_lock_amount),
            hash_lock_duration: from_file
                .hash_lock_duration
                .unwrap_or(defaults.hash_lock_duration),
            status_poll_interval_ms: from_file
                .status_poll_interval_ms
                .unwrap_or(defaults.status_poll_interval_ms),
            status_poll_timeout_secs: from_file
                .status_poll_timeout_secs
                .unwrap_or(defaults.status_poll_timeout_secs),
            page_size: from_file.page_size.unwrap_or(defaults.page_size),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn status_poll_interval(&self) -> Duration {
        Duration::from_millis(self.status_poll_interval_ms)
    }

    pub fn status_poll_timeout(&self) -> Duration {
        Duration::from_secs(self.status_poll_timeout_secs)
    }
}
