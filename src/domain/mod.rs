pub mod errors;
pub mod resource_id;
pub mod validation;
pub mod value_objects;
