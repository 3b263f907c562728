//! Workspace (team) and bot identity records from the session-start response

use serde::{Deserialize, Serialize};

/// The workspace the token belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Subdomain, as in `<domain>.slack.com`
    #[serde(default)]
    pub domain: String,
}

/// The account the token authenticates as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
}
