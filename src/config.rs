use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(
                    f,
                    "Failed to read config file {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Invalid TOML syntax in {}: {}", path.display(), source)
            }
            ConfigError::InvalidValue {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for '{}'\n  Expected: {}",
                    value, field, expected
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Client configuration loaded from `~/.config/costex/config.toml`.
///
/// All fields have sensible defaults and can be overridden via the
/// `COSTEX_*` environment variables.
///
/// Example in `config.toml`:
/// ```toml
/// region = "eu-west-1"
/// timeout_secs = 60
/// max_retries = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Signing region (default: "us-east-1")
    #[serde(default = "default_region")]
    pub region: String,
    /// Full endpoint override, e.g. for a local test server. When unset the
    /// endpoint is derived from the region.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum retry attempts for throttled or failed requests (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Minimum interval between requests in milliseconds (default: 0)
    #[serde(default)]
    pub min_request_interval_ms: u64,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            min_request_interval_ms: 0,
        }
    }
}

impl Config {
    pub fn dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("costex")
    }

    pub fn path() -> PathBuf {
        Self::dir().join("config.toml")
    }

    /// Loads the config file if present, falls back to defaults otherwise,
    /// then applies environment overrides and validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.clone(),
                    source: e,
                })?;
            debug!(path = %path.display(), "loaded config file");
            config
        } else {
            Self::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Environment overrides: `COSTEX_REGION` (or `AWS_REGION`),
    /// `COSTEX_ENDPOINT`, `COSTEX_TIMEOUT_SECS`, `COSTEX_MAX_RETRIES`.
    fn apply_env(&mut self) {
        if let Ok(region) = std::env::var("COSTEX_REGION").or_else(|_| std::env::var("AWS_REGION"))
            && !region.is_empty()
        {
            self.region = region;
        }
        if let Ok(endpoint) = std::env::var("COSTEX_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.endpoint = Some(endpoint);
        }
        if let Ok(timeout) = std::env::var("COSTEX_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse()
        {
            self.timeout_secs = secs;
        }
        if let Ok(retries) = std::env::var("COSTEX_MAX_RETRIES")
            && let Ok(count) = retries.parse()
        {
            self.max_retries = count;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "region".to_string(),
                value: self.region.clone(),
                expected: "a non-empty region name, e.g. us-east-1".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                value: self.timeout_secs.to_string(),
                expected: "a positive number of seconds".to_string(),
            });
        }
        if let Some(endpoint) = &self.endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "endpoint".to_string(),
                value: endpoint.clone(),
                expected: "an http:// or https:// URL".to_string(),
            });
        }
        Ok(())
    }

    /// The endpoint requests are sent to: the override if set, otherwise
    /// the regional production endpoint.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://ce.{}.amazonaws.com", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.endpoint(), "https://ce.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str("region = \"eu-west-1\"\nmax_retries = 7\n").unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.max_retries, 7);
        // unset fields keep their defaults
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.endpoint(), "https://ce.eu-west-1.amazonaws.com");
    }

    #[test]
    fn test_endpoint_override_wins() {
        let config = Config {
            endpoint: Some("http://127.0.0.1:8080/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_validate_rejects_empty_region() {
        let config = Config {
            region: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "region"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint_scheme() {
        let config = Config {
            endpoint: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        let display = format!("{}", err);
        assert!(display.contains("ftp://example.com"));
        assert!(display.contains("endpoint"));
    }
}
