//! # API Event Handler - CRUD request logging for HTTP-triggered functions
//!
//! Receives one HTTP API event per invocation, classifies it into a CRUD
//! intent, sanitizes the JSON payload, logs a structured description of the
//! request and answers with a uniform JSON envelope carrying security headers.
//! Nothing is persisted.
//!
//! ## Layers
//!
//! - **Domain**: methods, CRUD operations, error taxonomy, classification,
//!   resource id extraction
//! - **Application**: inbound event schema, request context, operation records
//! - **API**: input sanitization, body parsing, response formatting, dispatcher
//!
//! ## Example Usage
//!
//! ```
//! use api_event_handler::{Dispatcher, HttpEvent, InvocationMeta};
//!
//! let event = HttpEvent::new("GET", "/items");
//! let invocation = InvocationMeta::new("req-1", "api-event-handler");
//!
//! let response = Dispatcher::default().handle(&event, &invocation);
//! assert_eq!(response.status_code, 200);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use api::input_sanitization::{sanitize_object, sanitize_text};
pub use api::{Dispatcher, ResponseEnvelope, ResponseFormatter};
pub use application::{HttpEvent, InvocationMeta, RequestContext, RequestContextBuilder};
pub use config::Config;
pub use domain::errors::{ErrorKind, HandlerError, HandlerResult};
pub use domain::resource_id::extract_resource_id;
pub use domain::validation::{classify_operation, is_valid_method};
pub use domain::value_objects::{CrudOperation, HttpMethod, ParameterMap};
