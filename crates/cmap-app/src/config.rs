//! Application configuration loaded from `config.toml`.
//!
//! ```toml
//! [api]
//! base_url = "https://courses.example.edu"
//! courses_path = "/search"
//! fields_path = "/fields"
//!
//! [storage]
//! dir = "/var/lib/course-map"
//!
//! [logging]
//! level = "debug"
//! format = "compact"
//! ```
//!
//! Every key is optional. A missing file means defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cmap_catalog::Endpoints;
use cmap_persistence::{FileStore, MemoryStore, StateStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use crate::logging::{LogConfig, LogFormat};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "COURSE_MAP_CONFIG";

/// Errors reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown log level {0:?}")]
    InvalidLevel(String),
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Read { .. } => "Could not read the configuration file. Using defaults.",
            Self::Parse { .. } => "The configuration file is not valid TOML. Using defaults.",
            Self::InvalidLevel(_) => "Log level must be one of error, warn, info, debug, trace.",
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog endpoints.
    pub api: Endpoints,

    /// Where persisted documents live.
    pub storage: StorageConfig,

    /// Log output.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for `filters.json` and `preferences.json`. Defaults to the
    /// platform data directory.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub timestamps: bool,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            timestamps: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidLevel(self.level.clone()))
    }

    /// Build the subscriber configuration, falling back to `info` for an
    /// unknown level.
    pub fn log_config(&self) -> LogConfig {
        LogConfig::default()
            .with_level(self.level().unwrap_or(Level::INFO))
            .with_format(self.format)
            .with_timestamps(self.timestamps)
            .with_log_file(self.file.clone())
    }
}

impl AppConfig {
    /// Load from the default location.
    ///
    /// Returns defaults when the file is absent. A present but broken file
    /// also yields defaults, together with the error so it can be logged
    /// once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::try_load_from(&Self::config_path()) {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    /// Load from a specific path. `Ok(None)` when the file does not exist.
    pub fn try_load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.logging.level()?;
        Ok(Some(config))
    }

    /// Load from a specific path, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).ok().flatten().unwrap_or_default()
    }

    /// Config file path: `$COURSE_MAP_CONFIG`, else `config.toml` in the
    /// platform config directory.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        directories::ProjectDirs::from("edu", "CourseMap", "CourseMap")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Storage backend for the persisted documents.
    ///
    /// Falls back to an in-memory store when no data directory can be
    /// determined; state then lives for the session only.
    pub fn state_store(&self) -> Arc<dyn StateStore> {
        let store = match &self.storage.dir {
            Some(dir) => Some(FileStore::new(dir.clone())),
            None => FileStore::default_location(),
        };
        match store {
            Some(store) => Arc::new(store),
            None => {
                tracing::warn!("No data directory available; state will not survive restarts");
                Arc::new(MemoryStore::new())
            }
        }
    }
}
