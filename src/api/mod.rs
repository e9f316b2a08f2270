pub mod body;
pub mod handler;
pub mod input_sanitization;
pub mod request_log;
pub mod response;
pub mod security_headers;

pub use handler::Dispatcher;
pub use response::{ResponseEnvelope, ResponseFormatter};
