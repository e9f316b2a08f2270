use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::application::context::RequestContext;
use crate::domain::value_objects::CrudOperation;

pub const COMPLETION_MESSAGE: &str = "Request logged successfully";

/// Payload returned in the `data` field of a successful response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub message: String,
    pub operation: CrudOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub request_id: String,
    pub timestamp: String,
}

impl OperationResult {
    /// Result for a request that finished at `completed_at`
    pub fn completed(ctx: &RequestContext<'_>, completed_at: DateTime<Utc>) -> Self {
        Self {
            message: COMPLETION_MESSAGE.to_string(),
            operation: ctx.operation(),
            resource_id: ctx.resource_id().map(str::to_string),
            request_id: ctx.invocation().request_id.clone(),
            timestamp: completed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
