//! Uniform response envelope
//!
//! Every response, success or failure, carries a JSON body of the shape
//! `{success, data?, error?}` and the fixed security headers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{error, warn};

use super::security_headers::SecurityHeadersConfig;
use crate::domain::errors::HandlerError;

/// HTTP-shaped response returned to the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ResponseEnvelope {
    /// Parse the body back into JSON
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Client-facing identity of a failure
///
/// Only `name` and `message` reach the client. Field and value are kept for
/// the server-side log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSummary {
    pub name: String,
    pub message: String,
    #[serde(skip)]
    pub field: Option<String>,
    #[serde(skip)]
    pub value: Option<String>,
}

impl From<&HandlerError> for ErrorSummary {
    fn from(err: &HandlerError) -> Self {
        Self {
            name: err.name().to_string(),
            message: err.to_string(),
            field: err.field().map(str::to_string),
            value: err.value().map(str::to_string),
        }
    }
}

impl From<&str> for ErrorSummary {
    fn from(message: &str) -> Self {
        Self {
            name: "Error".to_string(),
            message: message.to_string(),
            field: None,
            value: None,
        }
    }
}

impl From<String> for ErrorSummary {
    fn from(message: String) -> Self {
        ErrorSummary::from(message.as_str())
    }
}

/// Builds response envelopes
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Serialize `body` and merge the security headers, `extra_headers` winning
    pub fn format(
        status_code: u16,
        body: &Value,
        extra_headers: &BTreeMap<String, String>,
    ) -> ResponseEnvelope {
        let mut headers = SecurityHeadersConfig::default_cached().to_headers();
        headers.extend(
            extra_headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        ResponseEnvelope {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    /// 200 response with `{success: true, data}`
    pub fn success(data: Value) -> ResponseEnvelope {
        Self::success_with_status(data, 200)
    }

    pub fn success_with_status(data: Value, status_code: u16) -> ResponseEnvelope {
        Self::success_with_headers(data, status_code, &BTreeMap::new())
    }

    pub fn success_with_headers(
        data: Value,
        status_code: u16,
        extra_headers: &BTreeMap<String, String>,
    ) -> ResponseEnvelope {
        Self::format(
            status_code,
            &json!({ "success": true, "data": data }),
            extra_headers,
        )
    }

    /// Failure response with `{success: false, error: {name, message}}`
    ///
    /// Always emits one log record before returning.
    pub fn failure(error: impl Into<ErrorSummary>, status_code: u16) -> ResponseEnvelope {
        Self::failure_with_headers(error, status_code, &BTreeMap::new())
    }

    pub fn failure_with_headers(
        error: impl Into<ErrorSummary>,
        status_code: u16,
        extra_headers: &BTreeMap<String, String>,
    ) -> ResponseEnvelope {
        let summary = error.into();

        if status_code >= 500 {
            error!(
                status_code,
                error_name = %summary.name,
                error_message = %summary.message,
                field = summary.field.as_deref(),
                value = summary.value.as_deref(),
                "Request failed"
            );
        } else {
            warn!(
                status_code,
                error_name = %summary.name,
                error_message = %summary.message,
                field = summary.field.as_deref(),
                value = summary.value.as_deref(),
                "Request rejected"
            );
        }

        Self::format(
            status_code,
            &json!({ "success": false, "error": summary }),
            extra_headers,
        )
    }

    /// Failure response with the status mapped from the error kind
    pub fn error_response(err: &HandlerError) -> ResponseEnvelope {
        Self::failure(err, err.status_code())
    }

    pub fn error_response_with_headers(
        err: &HandlerError,
        extra_headers: &BTreeMap<String, String>,
    ) -> ResponseEnvelope {
        Self::failure_with_headers(err, err.status_code(), extra_headers)
    }
}
