use crate::application::event::{HttpEvent, InvocationMeta};
use crate::domain::errors::{HandlerError, HandlerResult};
use crate::domain::resource_id::extract_resource_id;
use crate::domain::validation::classify_operation;
use crate::domain::value_objects::{CrudOperation, HttpMethod};

/// Everything known about one classified request
///
/// Built once per invocation and borrowed by the handler branches. The event
/// and invocation metadata are borrowed from the dispatcher that owns them.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext<'a> {
    event: &'a HttpEvent,
    invocation: &'a InvocationMeta,
    method: HttpMethod,
    operation: CrudOperation,
    resource_id: Option<String>,
}

impl<'a> RequestContext<'a> {
    pub fn event(&self) -> &'a HttpEvent {
        self.event
    }

    pub fn invocation(&self) -> &'a InvocationMeta {
        self.invocation
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn operation(&self) -> CrudOperation {
        self.operation
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn path(&self) -> &'a str {
        self.event.path()
    }
}

/// Builds a [`RequestContext`] from the raw event
pub struct RequestContextBuilder<'a> {
    event: &'a HttpEvent,
    invocation: &'a InvocationMeta,
}

impl<'a> RequestContextBuilder<'a> {
    pub fn new(event: &'a HttpEvent, invocation: &'a InvocationMeta) -> Self {
        Self { event, invocation }
    }

    /// Validate the method, extract the resource id and classify
    ///
    /// An invalid method stops here. Classification failures are returned
    /// unchanged.
    pub fn build(self) -> HandlerResult<RequestContext<'a>> {
        let raw_method = self.event.method();
        let method = HttpMethod::parse(raw_method).ok_or_else(|| {
            HandlerError::invalid_value(
                "method",
                raw_method,
                format!("Invalid HTTP method: {}", raw_method),
            )
        })?;

        let resource_id = extract_resource_id(self.event.path_parameters.as_ref());
        let operation = classify_operation(method, resource_id.is_some())?;

        Ok(RequestContext {
            event: self.event,
            invocation: self.invocation,
            method,
            operation,
            resource_id,
        })
    }
}
