use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use super::input_sanitization::{InputSanitizationConfig, Sanitizer};
use crate::application::event::HttpEvent;
use crate::domain::errors::{HandlerError, HandlerResult};

/// Decode, parse and sanitize the request body
///
/// Absent and empty bodies yield `None`. Objects come back sanitized; any
/// other JSON value is passed on as parsed.
pub fn parse_request_body(
    event: &HttpEvent,
    config: &InputSanitizationConfig,
) -> HandlerResult<Option<Value>> {
    let raw = match event.body.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    let parsed: Value = if event.is_base64_encoded {
        let bytes = STANDARD.decode(raw).map_err(|e| {
            HandlerError::validation("body", format!("Invalid base64 request body: {}", e))
        })?;
        serde_json::from_slice(&bytes).map_err(invalid_json)?
    } else {
        serde_json::from_str(raw).map_err(invalid_json)?
    };

    if parsed.is_object() {
        let sanitized = Sanitizer::sanitize_object(&parsed, config)?;
        return Ok(Some(Value::Object(sanitized)));
    }

    Ok(Some(parsed))
}

fn invalid_json(err: serde_json::Error) -> HandlerError {
    HandlerError::validation("body", format!("Invalid JSON in request body: {}", err))
}
