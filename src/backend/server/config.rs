/**
 * Server Configuration
 *
 * Settings are read from an optional TOML file named by `EDITOR_CONFIG`,
 * then overridden by environment variables:
 *
 * | Variable                 | Default   |
 * |--------------------------|-----------|
 * | `SERVER_HOST`            | `0.0.0.0` |
 * | `SERVER_PORT`            | `3000`    |
 * | `SESSION_IDLE_TTL_SECS`  | unset (sessions live for the process lifetime) |
 * | `EVICTION_INTERVAL_SECS` | `300`     |
 * | `CORS_ALLOW_ANY`         | `true`    |
 *
 * # Error Handling
 *
 * `ServerConfig::load` logs configuration errors and falls back to the
 * defaults so a bad value never prevents startup.
 */

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::shared::ConfigError;

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Evict sessions idle for longer than this many seconds
    pub session_idle_ttl_secs: Option<u64>,
    pub eviction_interval_secs: u64,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            session_idle_ttl_secs: None,
            eviction_interval_secs: 300,
            cors_allow_any: true,
        }
    }
}

impl ServerConfig {
    /// Read settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_error = |message: String| ConfigError::File {
            path: path.display().to_string(),
            message,
        };
        let contents = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| file_error(e.to_string()))
    }

    /// Defaults or `EDITOR_CONFIG`, then environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var("EDITOR_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, but logs errors and returns the defaults instead
    pub fn load() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid server configuration: {}", e);
                tracing::warn!("Falling back to default server configuration");
                Self::default()
            }
        }
    }

    /// Apply overrides from a key lookup (the environment in production)
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = parse_value("SERVER_PORT", &port)?;
        }
        if let Some(ttl) = lookup("SESSION_IDLE_TTL_SECS") {
            self.session_idle_ttl_secs = Some(parse_value("SESSION_IDLE_TTL_SECS", &ttl)?);
        }
        if let Some(interval) = lookup("EVICTION_INTERVAL_SECS") {
            self.eviction_interval_secs = parse_value("EVICTION_INTERVAL_SECS", &interval)?;
        }
        if let Some(cors) = lookup("CORS_ALLOW_ANY") {
            self.cors_allow_any = parse_flag("CORS_ALLOW_ANY", &cors)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.eviction_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "EVICTION_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }
        self.socket_addr().map(|_| ())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_HOST",
                value: self.host.clone(),
            })
    }

    /// Idle TTL, when eviction is enabled
    pub fn session_idle_ttl(&self) -> Option<Duration> {
        self.session_idle_ttl_secs.map(Duration::from_secs)
    }

    /// Eviction period, never shorter than one second
    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.eviction_interval_secs.max(1))
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
