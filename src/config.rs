use thiserror::Error;

use crate::api::input_sanitization::config::{
    InputSanitizationConfig, DEFAULT_MAX_KEY_LENGTH, DEFAULT_MAX_STRING_LENGTH,
};

const DEFAULT_SERVICE_NAME: &str = "api-event-handler";
const DEFAULT_REDACTED_HEADERS: [&str; 3] = ["authorization", "x-api-key", "cookie"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: String, value: String },

    #[error("LOG_FORMAT must be 'json' or 'pretty', got '{0}'")]
    InvalidLogFormat(String),

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_name: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Header names dropped from request logs, compared ignoring case
    pub redacted_headers: Vec<String>,
    pub sanitization: InputSanitizationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            redacted_headers: DEFAULT_REDACTED_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            sanitization: InputSanitizationConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; absent keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let service_name = lookup("SERVICE_NAME")
            .or_else(|| lookup("AWS_LAMBDA_FUNCTION_NAME"))
            .unwrap_or(defaults.service_name);

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        let redacted_headers = match lookup("REDACTED_HEADERS") {
            Some(value) => value
                .split(',')
                .map(|h| h.trim().to_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
            None => defaults.redacted_headers,
        };

        let sanitization = InputSanitizationConfig::new()
            .with_max_string_length(parse_number(
                &lookup,
                "SANITIZE_MAX_STRING_LENGTH",
                DEFAULT_MAX_STRING_LENGTH,
            )?)
            .with_max_key_length(parse_number(
                &lookup,
                "SANITIZE_MAX_KEY_LENGTH",
                DEFAULT_MAX_KEY_LENGTH,
            )?);

        Ok(Self {
            service_name,
            log_level,
            log_format,
            redacted_headers,
            sanitization,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::Empty("SERVICE_NAME"));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Empty("LOG_LEVEL"));
        }

        if self.sanitization.max_string_length == 0 {
            return Err(ConfigError::Zero("SANITIZE_MAX_STRING_LENGTH"));
        }

        if self.sanitization.max_key_length == 0 {
            return Err(ConfigError::Zero("SANITIZE_MAX_KEY_LENGTH"));
        }

        Ok(())
    }
}

fn parse_number<F>(lookup: &F, key: &str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
