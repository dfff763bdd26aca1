use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::polling::PollingConfig;
use super::sendgrid::SendgridConfig;
use super::webhook::WebhookConfig;

/// Main configuration structure for Blockwatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Poll interval and initial watermark
    #[serde(default)]
    pub polling: PollingConfig,

    /// SendGrid API access
    #[serde(default)]
    pub sendgrid: SendgridConfig,

    /// Chat webhook destination
    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an optional file, then apply overrides
    ///
    /// Overrides (environment variables and flags) win over file values.
    /// Fails when a required value is supplied by neither.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interval) = overrides.interval {
            self.polling.interval = interval;
        }
        if let Some(ts) = overrides.last_timestamp {
            self.polling.last_timestamp = Some(ts);
        }
        if let Some(timeout) = overrides.request_timeout {
            self.polling.request_timeout = Some(timeout);
        }
        if let Some(url) = overrides.webhook_url {
            self.webhook.url = Some(url);
        }
        if let Some(token) = overrides.sendgrid_token {
            self.sendgrid.api_token = Some(token);
        }
        if let Some(api_url) = overrides.sendgrid_api_url {
            self.sendgrid.api_url = api_url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Required values must be present; emptiness is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.webhook_url()?;
        self.sendgrid_token()?;

        if self.polling.interval == 0 {
            return Err(ConfigError::Validation(
                "Poll interval must be at least 1 second".to_string(),
            ));
        }

        if self.polling.request_timeout == Some(0) {
            return Err(ConfigError::Validation(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn webhook_url(&self) -> Result<&str, ConfigError> {
        self.webhook
            .url
            .as_deref()
            .ok_or(ConfigError::Missing("webhook.url / WEBHOOK_URI"))
    }

    pub fn sendgrid_token(&self) -> Result<&str, ConfigError> {
        self.sendgrid
            .api_token
            .as_deref()
            .ok_or(ConfigError::Missing("sendgrid.api_token / SENDGRID_TOKEN"))
    }
}

/// Environment/command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interval: Option<u64>,
    pub last_timestamp: Option<i64>,
    pub request_timeout: Option<u64>,
    pub webhook_url: Option<String>,
    pub sendgrid_token: Option<String>,
    pub sendgrid_api_url: Option<String>,
    pub log_level: Option<String>,
}
