pub mod crud_operation;
pub mod http_method;
pub mod parameter_map;

pub use crud_operation::CrudOperation;
pub use http_method::HttpMethod;
pub use parameter_map::ParameterMap;
