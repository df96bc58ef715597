//! Configuration management for pulsetrack.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "pulsetrack";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PULSETRACK_`)
/// 2. TOML config file at `~/.config/pulsetrack/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote GraphQL API configuration.
    pub api: ApiConfig,
    /// Session credentials handed over by the external identity provider.
    pub auth: AuthConfig,
    /// External object storage configuration (photos).
    pub storage: StorageConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL of the GraphQL endpoint.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Session credential configuration.
///
/// Sign-in itself is delegated to the external identity provider; the
/// resulting token is supplied here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Identity of the signed-in user.
    pub user: Option<String>,
    /// Bearer token for remote calls.
    pub token: Option<String>,
}

/// Object storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base URL of the object storage endpoint.
    pub endpoint: Option<String>,
    /// Access level prefix for stored photos.
    pub level: AccessLevel,
}

/// Access level for objects written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Readable only by the owning user.
    #[default]
    Private,
    /// Readable by signed-in users.
    Protected,
    /// Publicly readable.
    Public,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Private => write!(f, "private"),
            Self::Protected => write!(f, "protected"),
            Self::Public => write!(f, "public"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `PULSETRACK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("PULSETRACK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout == 0 {
            return Err(Error::ConfigValidation {
                message: "api.timeout must be greater than 0".to_string(),
            });
        }

        if let Some(endpoint) = &self.api.endpoint {
            if reqwest::Url::parse(endpoint).is_err() {
                return Err(Error::ConfigValidation {
                    message: format!("invalid api.endpoint URL: {endpoint}"),
                });
            }
        }

        if let Some(endpoint) = &self.storage.endpoint {
            if reqwest::Url::parse(endpoint).is_err() {
                return Err(Error::ConfigValidation {
                    message: format!("invalid storage.endpoint URL: {endpoint}"),
                });
            }
        }

        Ok(())
    }

    /// The GraphQL endpoint URL, required for remote commands.
    ///
    /// # Errors
    ///
    /// Returns an error if no endpoint is configured or it is not a valid URL.
    pub fn api_endpoint(&self) -> Result<reqwest::Url> {
        let endpoint = self
            .api
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::ConfigValidation {
                message: "api.endpoint is not configured".to_string(),
            })?;
        reqwest::Url::parse(endpoint).map_err(|e| Error::ConfigValidation {
            message: format!("invalid api.endpoint URL: {e}"),
        })
    }

    /// The object storage endpoint URL, required for photo uploads.
    ///
    /// # Errors
    ///
    /// Returns an error if no endpoint is configured or it is not a valid URL.
    pub fn storage_endpoint(&self) -> Result<reqwest::Url> {
        let endpoint = self
            .storage
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::ConfigValidation {
                message: "storage.endpoint is not configured".to_string(),
            })?;
        reqwest::Url::parse(endpoint).map_err(|e| Error::ConfigValidation {
            message: format!("invalid storage.endpoint URL: {e}"),
        })
    }

    /// The request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.api.endpoint.is_none());
        assert_eq!(config.api.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.auth.user.is_none());
        assert!(config.auth.token.is_none());
        assert_eq!(config.storage.level, AccessLevel::Private);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api.timeout"));
    }

    #[test]
    fn test_validate_invalid_api_endpoint() {
        let mut config = Config::default();
        config.api.endpoint = Some("not a url".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api.endpoint"));
    }

    #[test]
    fn test_validate_invalid_storage_endpoint() {
        let mut config = Config::default();
        config.storage.endpoint = Some("::nope::".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("storage.endpoint"));
    }

    #[test]
    fn test_api_endpoint_unconfigured() {
        let config = Config::default();
        let result = config.api_endpoint();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not configured"));
    }

    #[test]
    fn test_api_endpoint_parses() {
        let mut config = Config::default();
        config.api.endpoint = Some("https://api.example.com/graphql".to_string());

        let url = config.api_endpoint().unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/graphql");
    }

    #[test]
    fn test_storage_endpoint_parses() {
        let mut config = Config::default();
        config.storage.endpoint = Some("https://storage.example.com/".to_string());

        let url = config.storage_endpoint().unwrap();
        assert_eq!(url.as_str(), "https://storage.example.com/");
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_access_level_display() {
        assert_eq!(AccessLevel::Private.to_string(), "private");
        assert_eq!(AccessLevel::Protected.to_string(), "protected");
        assert_eq!(AccessLevel::Public.to_string(), "public");
    }

    #[test]
    fn test_access_level_default_is_private() {
        assert_eq!(AccessLevel::default(), AccessLevel::Private);
    }

    #[test]
    fn test_access_level_wire_format() {
        let json = serde_json::to_string(&AccessLevel::Private).unwrap();
        assert_eq!(json, r#""private""#);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("pulsetrack"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("api"));
        assert!(json.contains("auth"));
        assert!(json.contains("storage"));
    }

    #[test]
    fn test_api_config_deserialize() {
        let json = r#"{"endpoint": "https://api.example.com/graphql", "timeout": 10}"#;
        let api: ApiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(api.timeout, 10);
        assert!(api.endpoint.is_some());
    }

    #[test]
    fn test_config_clone_and_debug() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
        assert!(format!("{config:?}").contains("Config"));
    }
}
