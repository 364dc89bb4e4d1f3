//! # Session Configuration
//!
//! Where the cart lives, where the catalog is, and how to log.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TOTE_CATALOG_URL=https://shop.example/api                          │
//! │     TOTE_DB_PATH=/var/lib/tote/tote.db                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/tote/tote.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.tote.tote/tote.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     catalog at http://localhost:3333, cart in the data dir             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! database_path = "/var/lib/tote/tote.db"
//! key = "@RocketShoes:cart"
//!
//! [catalog]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [logging]
//! filter = "info,tote=debug"
//! json = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use tote_catalog::CatalogConfig;
use tote_core::DEFAULT_STORAGE_KEY;
use tote_db::DbConfig;

use crate::error::{SessionError, SessionResult};

/// `database_path` value selecting a throwaway in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

const CONFIG_FILE_NAME: &str = "tote.toml";
const DATABASE_FILE_NAME: &str = "tote.db";

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the cart is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. `None` uses `tote.db` in the platform data directory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Key the serialized cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            database_path: None,
            key: default_storage_key(),
        }
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// How to reach the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives. `RUST_LOG` still wins when set.
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Complete session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or `tote.toml` in the config dir)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading session config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load session config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections take their defaults.
    pub fn from_toml_str(contents: &str) -> SessionResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Session config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SessionResult<()> {
        if self.storage.key.trim().is_empty() {
            return Err(SessionError::InvalidConfig(
                "storage key must not be empty".into(),
            ));
        }

        self.catalog_url()?;

        if self.catalog.timeout_secs == Some(0) {
            return Err(SessionError::InvalidConfig(
                "catalog timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `TOTE_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("TOTE_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("TOTE_STORAGE_KEY") {
            self.storage.key = key;
        }

        if let Some(url) = lookup("TOTE_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.base_url = url;
        }

        if let Some(secs) = lookup("TOTE_CATALOG_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => self.catalog.timeout_secs = Some(secs),
                Err(_) => warn!(value = %secs, "Ignoring non-numeric TOTE_CATALOG_TIMEOUT_SECS"),
            }
        }

        if let Some(json) = lookup("TOTE_LOG_JSON") {
            match json.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.logging.json = true,
                "0" | "false" | "no" | "off" => self.logging.json = false,
                _ => warn!(value = %json, "Ignoring unrecognized TOTE_LOG_JSON"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tote", "tote")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn default_database_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tote", "tote")
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
    }

    // =========================================================================
    // Adapter Configuration
    // =========================================================================

    /// Parsed catalog base URL. Only http and https are accepted.
    pub fn catalog_url(&self) -> SessionResult<Url> {
        let url = Url::parse(&self.catalog.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SessionError::InvalidUrl(format!(
                "catalog URL must use http or https, got: {}",
                other
            ))),
        }
    }

    /// Resolved database location, or `None` if no data directory exists.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.storage
            .database_path
            .clone()
            .or_else(Self::default_database_path)
    }

    pub fn catalog_config(&self) -> SessionResult<CatalogConfig> {
        let config = CatalogConfig::new(self.catalog_url()?);
        Ok(match self.catalog.timeout_secs {
            Some(secs) => config.timeout(Duration::from_secs(secs)),
            None => config,
        })
    }

    pub fn db_config(&self) -> SessionResult<DbConfig> {
        let path = self.database_path().ok_or_else(|| {
            SessionError::InvalidConfig(
                "no database_path configured and no data directory available".into(),
            )
        })?;

        if path == Path::new(IN_MEMORY_DATABASE) {
            return Ok(DbConfig::in_memory());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(DbConfig::new(path))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
