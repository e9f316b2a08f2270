//! Input sanitization for request payloads
//!
//! Strips control characters from text, bounds its length, and rebuilds JSON
//! objects with every string leaf cleaned and every key checked.

pub mod config;
pub mod sanitizers;

#[cfg(test)]
mod tests;

pub use config::InputSanitizationConfig;
pub use sanitizers::Sanitizer;

use serde_json::{Map, Value};

use crate::domain::errors::HandlerResult;

/// Sanitize a string with the default limits
pub fn sanitize_text(input: &str) -> String {
    Sanitizer::sanitize_text(input, &InputSanitizationConfig::default_cached())
}

/// Sanitize a JSON object with the default limits
pub fn sanitize_object(input: &Value) -> HandlerResult<Map<String, Value>> {
    Sanitizer::sanitize_object(input, &InputSanitizationConfig::default_cached())
}
