//! Configuration management for Feedhub.
//!
//! Loaded with figment, in order of precedence (highest first):
//! 1. Override persisted under [`keys::CONFIG`] from the settings form
//! 2. Environment variables prefixed with `FEEDHUB_` (native builds only)
//! 3. Default values

use std::fmt;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{keys, JsonStore, KeyValueStore};

/// Default REST endpoint of the hosted backend.
pub const DEFAULT_API_BASE_URL: &str = "https://feedbackhub-server-etyk.onrender.com/api";

/// Environment variable prefix.
const ENV_PREFIX: &str = "FEEDHUB_";

/// Which backend is the source of truth for feedback, complaints and users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Browser key-value store
    #[default]
    Local,
    /// REST service at `api_base_url`
    Remote,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Local => "local",
            DataSource::Remote => "remote",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "local" => Some(DataSource::Local),
            "remote" => Some(DataSource::Remote),
            _ => None,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST service, without a trailing slash.
    pub api_base_url: String,
    /// Active data source.
    pub data_source: DataSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_source: DataSource::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources, reading the persisted override
    /// from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction or validation fails.
    pub fn load<S: KeyValueStore>(store: &JsonStore<S>) -> Result<Self> {
        Self::load_with(store.get_opt::<Config>(keys::CONFIG))
    }

    /// Load configuration with an explicit override.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction or validation fails.
    pub fn load_with(overrides: Option<Config>) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX));
        if let Some(overrides) = overrides {
            figment = figment.merge(Serialized::defaults(overrides));
        }

        let mut config: Config = figment.extract()?;
        config.api_base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Validate and persist as the override.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the write fails.
    pub fn save<S: KeyValueStore>(&self, store: &JsonStore<S>) -> Result<()> {
        self.validate()?;
        store.set(keys::CONFIG, self)?;
        log::info!("[CONFIG] saved: source={}, api={}", self.data_source, self.api_base_url);
        Ok(())
    }

    /// Drop the persisted override.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    pub fn reset<S: KeyValueStore>(store: &JsonStore<S>) -> Result<()> {
        store.remove(keys::CONFIG)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| Error::ConfigValidation {
                message: format!("api_base_url must start with http:// or https://, got '{url}'"),
            })?;
        if host.trim_matches('/').is_empty() {
            return Err(Error::ConfigValidation {
                message: "api_base_url has no host".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_remote(&self) -> bool {
        self.data_source == DataSource::Remote
    }
}
