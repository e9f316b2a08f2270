use serde_json::{Map, Value};

use super::config::InputSanitizationConfig;
use crate::domain::errors::{HandlerError, HandlerResult};

/// Core sanitization functions
pub struct Sanitizer;

impl Sanitizer {
    /// C0 controls, DEL and C1 controls
    pub fn is_unsafe_char(c: char) -> bool {
        matches!(c as u32, 0x00..=0x1F | 0x7F..=0x9F)
    }

    /// Remove control characters, then truncate to the configured length
    pub fn sanitize_text(input: &str, config: &InputSanitizationConfig) -> String {
        input
            .chars()
            .filter(|c| !Self::is_unsafe_char(*c))
            .take(config.max_string_length)
            .collect()
    }

    /// Sanitize every string leaf of a JSON object into a new map
    ///
    /// Nested objects are sanitized recursively and their keys re-validated.
    /// Arrays and other scalars are copied unchanged.
    pub fn sanitize_object(
        input: &Value,
        config: &InputSanitizationConfig,
    ) -> HandlerResult<Map<String, Value>> {
        let object = input
            .as_object()
            .ok_or_else(|| HandlerError::validation("object", "Expected an object"))?;

        let mut sanitized = Map::with_capacity(object.len());
        for (key, value) in object {
            Self::validate_key(key, config)?;

            let clean = match value {
                Value::String(text) => Value::String(Self::sanitize_text(text, config)),
                Value::Object(_) => Value::Object(Self::sanitize_object(value, config)?),
                other => other.clone(),
            };
            sanitized.insert(key.clone(), clean);
        }

        Ok(sanitized)
    }

    fn validate_key(key: &str, config: &InputSanitizationConfig) -> HandlerResult<()> {
        if key.is_empty() {
            return Err(HandlerError::invalid_value(
                "key",
                key,
                "Invalid key: keys cannot be empty",
            ));
        }

        if key.chars().count() > config.max_key_length {
            return Err(HandlerError::invalid_value(
                "key",
                key,
                format!(
                    "Invalid key '{}': exceeds maximum length of {} characters",
                    key, config.max_key_length
                ),
            ));
        }

        Ok(())
    }
}
