//! Inbound event schema
//!
//! Mirrors the HTTP API (payload v2) event the serverless runtime delivers.
//! Raw payloads are validated here, once, and rejected when they do not fit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::{HandlerError, HandlerResult};
use crate::domain::value_objects::ParameterMap;

/// HTTP-triggered event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub route_key: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub raw_query_string: Option<String>,
    #[serde(default)]
    pub headers: Option<ParameterMap>,
    #[serde(default)]
    pub query_string_parameters: Option<ParameterMap>,
    #[serde(default)]
    pub path_parameters: Option<ParameterMap>,
    #[serde(default)]
    pub stage_variables: Option<ParameterMap>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    pub request_context: EventRequestContext,
}

/// Request metadata supplied by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequestContext {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub api_id: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub time_epoch: Option<i64>,
    pub http: HttpDescription,
}

/// Transport-level details of the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpDescription {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub source_ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl HttpEvent {
    /// Validate a raw payload against the event schema
    pub fn from_value(value: Value) -> HandlerResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| HandlerError::validation("event", format!("Malformed event: {}", e)))
    }

    /// Minimal event for a method and path
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            version: Some("2.0".to_string()),
            route_key: None,
            raw_path: None,
            raw_query_string: None,
            headers: None,
            query_string_parameters: None,
            path_parameters: None,
            stage_variables: None,
            body: None,
            is_base64_encoded: false,
            request_context: EventRequestContext {
                account_id: None,
                api_id: None,
                domain_name: None,
                stage: None,
                request_id: None,
                time: None,
                time_epoch: None,
                http: HttpDescription {
                    method: method.into(),
                    path: path.into(),
                    protocol: None,
                    source_ip: None,
                    user_agent: None,
                },
            },
        }
    }

    pub fn with_path_parameters(mut self, params: ParameterMap) -> Self {
        self.path_parameters = Some(params);
        self
    }

    pub fn with_query_parameters(mut self, params: ParameterMap) -> Self {
        self.query_string_parameters = Some(params);
        self
    }

    pub fn with_headers(mut self, headers: ParameterMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.request_context.http.method
    }

    pub fn path(&self) -> &str {
        &self.request_context.http.path
    }
}

/// Invocation metadata from the runtime, used for log correlation only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationMeta {
    pub request_id: String,
    pub function_name: String,
    pub function_version: Option<String>,
    pub invoked_function_arn: Option<String>,
}

impl InvocationMeta {
    pub fn new(request_id: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: function_name.into(),
            function_version: None,
            invoked_function_arn: None,
        }
    }

    pub fn with_function_version(mut self, version: impl Into<String>) -> Self {
        self.function_version = Some(version.into());
        self
    }

    pub fn with_function_arn(mut self, arn: impl Into<String>) -> Self {
        self.invoked_function_arn = Some(arn.into());
        self
    }
}
