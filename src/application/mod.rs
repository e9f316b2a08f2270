pub mod context;
pub mod dto;
pub mod event;
pub mod operations;

pub use context::{RequestContext, RequestContextBuilder};
pub use event::{HttpEvent, InvocationMeta};
pub use operations::OperationRecord;
