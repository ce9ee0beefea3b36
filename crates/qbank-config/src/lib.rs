//! # qbank-config
//!
//! Layered configuration loading for the qbank catalog service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QBANK_*` prefix, `__` as separator)
//! 2. Project-level `.qbank/config.toml`
//! 3. User-level `~/.config/qbank/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QBANK_SERVER__PORT` -> `server.port`,
//! `QBANK_STORAGE__BACKEND` -> `storage.backend`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use qbank_config::QbankConfig;
//!
//! let config = QbankConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod catalog;
mod error;
mod server;
mod storage;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig, join_key};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QbankConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl QbankConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".qbank/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("QBANK_").split("__"))
    }

    /// Check cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StorageIncomplete`] when the selected storage
    /// backend lacks a field it needs, and [`ConfigError::InvalidPageSize`] for
    /// a non-positive default page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(field) = self.storage.missing_field() {
            return Err(ConfigError::StorageIncomplete {
                backend: self.storage.backend,
                field,
            });
        }
        if self.catalog.default_page_size <= 0 {
            return Err(ConfigError::InvalidPageSize(self.catalog.default_page_size));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qbank").join("config.toml"))
    }
}
