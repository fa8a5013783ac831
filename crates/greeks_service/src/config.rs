//! Engine configuration
//!
//! Handles loading runtime configuration from TOML with per-field defaults.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML document could not be parsed.
    #[error("Configuration parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Runtime configuration for [`GreeksEngine`](crate::engine::GreeksEngine).
///
/// Every field has a default matching the dashboard's production settings,
/// so a missing or partial TOML document is always usable.
///
/// # Examples
///
/// ```
/// use greeks_service::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.cache_ttl_ms, 1_000);
/// assert_eq!(config.reconnect_delay_ms, 5_000);
///
/// let overridden = EngineConfig::from_toml_str("cache_ttl_ms = 250").unwrap();
/// assert_eq!(overridden.cache_ttl_ms, 250);
/// assert_eq!(overridden.reconnect_delay_ms, 5_000);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum age of a cached Greeks entry in milliseconds
    pub cache_ttl_ms: u64,
    /// Delay between feed reconnection attempts in milliseconds
    pub reconnect_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: 1_000,
            reconnect_delay_ms: 5_000,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a configuration from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Reconnect delay as a [`Duration`].
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}
