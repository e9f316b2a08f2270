//! Entry point for one HTTP-triggered invocation
//!
//! Steps run strictly in order and stop at the first failure:
//! open the invocation scope, build the request context, log the request,
//! parse the body, record the operation, answer with a success envelope.
//! Failures, panics included, become error envelopes in one place. Every
//! envelope names the answering function version.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::body::parse_request_body;
use super::request_log::RequestSummary;
use super::response::{ResponseEnvelope, ResponseFormatter};
use crate::application::context::RequestContextBuilder;
use crate::application::dto::OperationResult;
use crate::application::event::{HttpEvent, InvocationMeta};
use crate::application::operations::OperationRecord;
use crate::config::Config;
use crate::domain::errors::{HandlerError, HandlerResult};
use crate::telemetry::InvocationScope;

/// Response header naming the function version that answered
pub const FUNCTION_VERSION_HEADER: &str = "X-Lambda-Function-Version";

const UNPUBLISHED_VERSION: &str = "$LATEST";

/// Classifies, logs and answers inbound events
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Arc<Config>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle a raw payload, rejecting it with a 400 when it is not an event
    pub fn handle_value(&self, payload: Value, invocation: &InvocationMeta) -> ResponseEnvelope {
        let mut scope = InvocationScope::enter(invocation);
        let headers = response_headers(invocation);

        let response = match HttpEvent::from_value(payload) {
            Ok(event) => guarded(|| self.process(&event, invocation), &headers),
            Err(err) => ResponseFormatter::error_response_with_headers(&err, &headers),
        };

        scope.record_status(response.status_code);
        response
    }

    /// Handle an already validated event
    pub fn handle(&self, event: &HttpEvent, invocation: &InvocationMeta) -> ResponseEnvelope {
        let mut scope = InvocationScope::enter(invocation);
        let headers = response_headers(invocation);

        let response = guarded(|| self.process(event, invocation), &headers);

        scope.record_status(response.status_code);
        response
    }

    fn process(&self, event: &HttpEvent, invocation: &InvocationMeta) -> HandlerResult<Value> {
        let ctx = RequestContextBuilder::new(event, invocation).build()?;

        RequestSummary::new(&ctx, &self.config.redacted_headers).log();

        let body = parse_request_body(event, &self.config.sanitization)?;

        OperationRecord::describe(&ctx, body.as_ref()).log();

        let result = OperationResult::completed(&ctx, Utc::now());
        Ok(serde_json::to_value(result)?)
    }
}

/// Run `work` and turn its outcome into an envelope
///
/// Panics are caught here, once, and answered as a 500.
fn guarded<F>(work: F, headers: &BTreeMap<String, String>) -> ResponseEnvelope
where
    F: FnOnce() -> HandlerResult<Value>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(work))
        .unwrap_or_else(|payload| Err(HandlerError::internal(panic_message(&*payload))));

    match outcome {
        Ok(data) => ResponseFormatter::success_with_headers(data, 200, headers),
        Err(err) => ResponseFormatter::error_response_with_headers(&err, headers),
    }
}

fn response_headers(invocation: &InvocationMeta) -> BTreeMap<String, String> {
    let version = invocation
        .function_version
        .as_deref()
        .unwrap_or(UNPUBLISHED_VERSION);
    BTreeMap::from([(FUNCTION_VERSION_HEADER.to_string(), version.to_string())])
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unexpected fault while handling request".to_string())
}
