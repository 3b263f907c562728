//! User records

use serde::{Deserialize, Serialize};

use super::Named;

/// A workspace member as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user (e.g. "U023BECGF")
    pub id: String,
    /// Username (the handle used for lookups)
    #[serde(default)]
    pub name: String,
    /// Remaining fields of the upstream record
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Create a user record with no extra fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether the record is flagged as a bot account
    pub fn is_bot(&self) -> bool {
        self.extra
            .get("is_bot")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}

impl Named for User {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Response shape of the user listing call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub members: Vec<User>,
}
