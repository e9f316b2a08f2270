use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Cached default configuration
static DEFAULT_CONFIG: Lazy<Arc<InputSanitizationConfig>> =
    Lazy::new(|| Arc::new(InputSanitizationConfig::default()));

pub const DEFAULT_MAX_STRING_LENGTH: usize = 10_000;
pub const DEFAULT_MAX_KEY_LENGTH: usize = 100;

/// Input sanitization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSanitizationConfig {
    /// Maximum length of a sanitized string, in characters
    pub max_string_length: usize,
    /// Maximum length of an object key, in characters
    pub max_key_length: usize,
}

impl Default for InputSanitizationConfig {
    fn default() -> Self {
        Self {
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

impl InputSanitizationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum string length
    pub fn with_max_string_length(mut self, length: usize) -> Self {
        self.max_string_length = length;
        self
    }

    /// Set maximum key length
    pub fn with_max_key_length(mut self, length: usize) -> Self {
        self.max_key_length = length;
        self
    }

    /// Get the cached default configuration
    pub fn default_cached() -> Arc<Self> {
        Arc::clone(&DEFAULT_CONFIG)
    }
}
