//! Error taxonomy for request handling
//!
//! Every failure in the pipeline is a [`HandlerError`] value. The dispatcher
//! is the only place that turns one into an HTTP-shaped response, using the
//! status table on [`ErrorKind`].

use thiserror::Error;

/// Result type used by every fallible step of the pipeline
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Discriminant of a [`HandlerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Authorization,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Name reported to clients in the error envelope
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Authorization => "AuthorizationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Internal => "Error",
        }
    }

    /// HTTP status code for this kind of failure
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Authorization => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure raised while handling a single request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Malformed or missing input
    #[error("{message}")]
    Validation {
        field: String,
        value: Option<String>,
        message: String,
    },

    /// Caller lacks permission. Reserved for collaborators.
    #[error("{message}")]
    Authorization { message: String },

    /// Referenced resource is absent. Reserved for collaborators.
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Anything unexpected
    #[error("{message}")]
    Internal { message: String },
}

impl HandlerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::Validation {
            field: field.into(),
            value: None,
            message: message.into(),
        }
    }

    /// Validation failure that records the offending value for diagnostics
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        HandlerError::Validation {
            field: field.into(),
            value: Some(value.into()),
            message: message.into(),
        }
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        HandlerError::Authorization {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        HandlerError::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        HandlerError::Internal {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HandlerError::Validation { .. } => ErrorKind::Validation,
            HandlerError::Authorization { .. } => ErrorKind::Authorization,
            HandlerError::NotFound { .. } => ErrorKind::NotFound,
            HandlerError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            HandlerError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Offending value recorded with a validation failure, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            HandlerError::Validation { value, .. } => value.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::internal(format!("Serialization error: {}", err))
    }
}
