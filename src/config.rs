//! Configuration management for the site server.
//!
//! This module handles loading and validating configuration from
//! environment variables. A `.env` file is honored when present so local
//! runs do not need exported variables.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL of the transactional-email provider.
const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Transactional-email API base URL
    pub resend_base_url: String,

    /// Transactional-email API key
    pub resend_api_key: String,

    /// Studio inbox that receives the notification email
    pub contact_recipient: String,

    /// Sender identity for both outbound emails
    pub mail_from: String,

    /// Reply-to address stamped on the auto-reply
    pub contact_reply_to: String,

    /// TCP port the HTTP endpoint binds to (default: 8080)
    pub port: u16,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Deployment environment name; anything other than "production"
    /// exposes raw provider errors in 500 responses (default: "production")
    pub environment: String,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: API key for the email provider
    ///
    /// Optional environment variables:
    /// - `RESEND_BASE_URL`: provider base URL (default: `https://api.resend.com`)
    /// - `CONTACT_RECIPIENT`: studio inbox (default: `hello@meltemistudio.gr`)
    /// - `MAIL_FROM`: sender identity (default: `Meltemi Studio <noreply@meltemistudio.gr>`)
    /// - `CONTACT_REPLY_TO`: auto-reply reply-to (default: `hello@meltemistudio.gr`)
    /// - `PORT`: bind port (default: 8080)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `APP_ENV`: deployment environment (default: "production")
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is absent
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY")
            .map_err(|_| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        if resend_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let resend_base_url =
            env::var("RESEND_BASE_URL").unwrap_or_else(|_| DEFAULT_RESEND_BASE_URL.to_string());

        if !resend_base_url.starts_with("http://") && !resend_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let contact_recipient = env::var("CONTACT_RECIPIENT")
            .unwrap_or_else(|_| "hello@meltemistudio.gr".to_string());
        let contact_recipient = EmailAddress::new(contact_recipient)
            .map_err(|e| ConfigError::InvalidValue {
                var: "CONTACT_RECIPIENT".to_string(),
                reason: e.to_string(),
            })?
            .into_inner();

        let mail_from = env::var("MAIL_FROM")
            .unwrap_or_else(|_| "Meltemi Studio <noreply@meltemistudio.gr>".to_string());

        if mail_from.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "MAIL_FROM".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let contact_reply_to =
            env::var("CONTACT_REPLY_TO").unwrap_or_else(|_| "hello@meltemistudio.gr".to_string());
        let contact_reply_to = EmailAddress::new(contact_reply_to)
            .map_err(|e| ConfigError::InvalidValue {
                var: "CONTACT_REPLY_TO".to_string(),
                reason: e.to_string(),
            })?
            .into_inner();

        let port = Self::parse_env_u16("PORT", 8080)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let environment = env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            resend_base_url,
            resend_api_key,
            contact_recipient,
            mail_from,
            contact_reply_to,
            port,
            request_timeout,
            environment,
            log_level,
        })
    }

    /// Whether 500 responses may carry the raw provider error text.
    pub fn expose_error_details(&self) -> bool {
        self.environment != "production"
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_base_url: DEFAULT_RESEND_BASE_URL.to_string(),
            resend_api_key: String::new(),
            contact_recipient: "hello@meltemistudio.gr".to_string(),
            mail_from: "Meltemi Studio <noreply@meltemistudio.gr>".to_string(),
            contact_reply_to: "hello@meltemistudio.gr".to_string(),
            port: 8080,
            request_timeout: 10,
            environment: "production".to_string(),
            log_level: "info".to_string(),
        }
    }
}
