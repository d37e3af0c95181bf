use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Editor configuration wrapper.
///
/// Reads `EDITOR_API_URL` and `EDITOR_POLL_INTERVAL_SECS`; the `api`
/// parameter of a pasted editor link replaces the server URL for that
/// session.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[Config] Ignoring invalid editor configuration: {}", e);
                Self {
                    app: AppConfig::default(),
                }
            }
        }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url =
            std::env::var("EDITOR_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let mut builder = AppConfig::builder().server_url(server_url);

        if let Ok(secs) = std::env::var("EDITOR_POLL_INTERVAL_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "EDITOR_POLL_INTERVAL_SECS",
                value: secs.clone(),
            })?;
            builder = builder.poll_interval(Duration::from_secs(secs));
        }

        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Copy of this configuration pointing at another API base
    pub fn with_server_url(&self, url: &str) -> Result<Self, ConfigError> {
        Self::with_builder(
            AppConfig::builder()
                .server_url(url)
                .poll_interval(self.poll_interval()),
        )
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn poll_interval(&self) -> Duration {
        self.app.poll_interval
    }
}
