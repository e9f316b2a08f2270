use serde::{Deserialize, Serialize};

/// Business-level intent a request is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrudOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl CrudOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudOperation::Create => "CREATE",
            CrudOperation::Read => "READ",
            CrudOperation::Update => "UPDATE",
            CrudOperation::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for CrudOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
