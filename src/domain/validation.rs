//! Method validation and CRUD classification
//!
//! Classification is a pure mapping from the request method and the presence
//! of a resource identifier. Methods that modify a specific resource require
//! an identifier.

use crate::domain::errors::{HandlerError, HandlerResult};
use crate::domain::value_objects::{CrudOperation, HttpMethod};

/// True iff `value` is exactly one of the accepted method names
pub fn is_valid_method(value: &str) -> bool {
    HttpMethod::parse(value).is_some()
}

/// Map a method to its CRUD intent
///
/// GET and POST always classify. PUT/PATCH and DELETE fail with a
/// validation error on the `resourceId` field when no identifier is present.
pub fn classify_operation(
    method: HttpMethod,
    has_resource_id: bool,
) -> HandlerResult<CrudOperation> {
    match method {
        HttpMethod::Get => Ok(CrudOperation::Read),
        HttpMethod::Post => Ok(CrudOperation::Create),
        HttpMethod::Put | HttpMethod::Patch if has_resource_id => Ok(CrudOperation::Update),
        HttpMethod::Put | HttpMethod::Patch => Err(HandlerError::invalid_value(
            "resourceId",
            method.as_str(),
            "Resource ID required for update operations",
        )),
        HttpMethod::Delete if has_resource_id => Ok(CrudOperation::Delete),
        HttpMethod::Delete => Err(HandlerError::invalid_value(
            "resourceId",
            method.as_str(),
            "Resource ID required for delete operations",
        )),
    }
}
