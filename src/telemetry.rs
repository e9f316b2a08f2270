//! Tracing setup and per-invocation log scope

use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span, span::EnteredSpan};
use tracing_subscriber::EnvFilter;

use crate::application::event::InvocationMeta;
use crate::config::{Config, LogFormat};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber for the configured level and format
pub fn init_tracing(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    let result = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

/// Log scope of a single invocation
///
/// Entering attaches the invocation metadata to every record emitted while
/// the scope is alive. Dropping it logs the outcome and closes the span, on
/// every exit path.
pub struct InvocationScope {
    started: Instant,
    status_code: Option<u16>,
    _span: EnteredSpan,
}

impl InvocationScope {
    pub fn enter(invocation: &InvocationMeta) -> Self {
        let span = info_span!(
            "invocation",
            request_id = %invocation.request_id,
            function_name = %invocation.function_name,
            function_version = invocation.function_version.as_deref(),
        );

        Self {
            started: Instant::now(),
            status_code: None,
            _span: span.entered(),
        }
    }

    pub fn record_status(&mut self, status_code: u16) {
        self.status_code = Some(status_code);
    }
}

impl Drop for InvocationScope {
    fn drop(&mut self) {
        info!(
            duration_ms = self.started.elapsed().as_millis() as u64,
            status_code = self.status_code,
            "Invocation finished"
        );
    }
}
