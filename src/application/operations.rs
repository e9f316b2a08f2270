//! Operation-specific views of a classified request
//!
//! Nothing is stored. Each branch only decides which fields end up in the
//! logged record.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::application::context::RequestContext;
use crate::domain::value_objects::{CrudOperation, HttpMethod, ParameterMap};

/// Whether a read targets a collection or a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadScope {
    List,
    Item,
}

/// Request body as seen by a handler branch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum BodyView {
    Absent,
    Present(Value),
}

impl BodyView {
    pub fn from_option(body: Option<&Value>) -> Self {
        match body {
            Some(value) => BodyView::Present(value.clone()),
            None => BodyView::Absent,
        }
    }
}

/// Description of one handled operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub operation: CrudOperation,
    pub method: HttpMethod,
    pub path: String,
    pub request_id: String,
    pub header_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ReadScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<ParameterMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyView>,
}

impl OperationRecord {
    /// Build the view for the branch selected by the classified operation
    pub fn describe(ctx: &RequestContext<'_>, body: Option<&Value>) -> Self {
        let event = ctx.event();
        let mut record = Self {
            operation: ctx.operation(),
            method: ctx.method(),
            path: ctx.path().to_string(),
            request_id: ctx.invocation().request_id.clone(),
            header_count: event.headers.as_ref().map_or(0, ParameterMap::len),
            scope: None,
            resource_id: None,
            query: None,
            body: None,
        };

        match ctx.operation() {
            CrudOperation::Read => {
                record.scope = Some(match ctx.resource_id() {
                    Some(_) => ReadScope::Item,
                    None => ReadScope::List,
                });
                record.resource_id = ctx.resource_id().map(str::to_string);
                record.query = event.query_string_parameters.clone();
            }
            CrudOperation::Create => {
                record.body = Some(BodyView::from_option(body));
            }
            CrudOperation::Update => {
                record.resource_id = ctx.resource_id().map(str::to_string);
                record.body = Some(BodyView::from_option(body));
            }
            CrudOperation::Delete => {
                record.resource_id = ctx.resource_id().map(str::to_string);
            }
        }

        record
    }

    pub fn log(&self) {
        info!(
            operation = %self.operation,
            method = %self.method,
            path = %self.path,
            resource_id = self.resource_id.as_deref(),
            scope = ?self.scope,
            header_count = self.header_count,
            query = ?self.query,
            body = ?self.body,
            "{} operation recorded",
            self.operation
        );
    }
}
