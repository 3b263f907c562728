//! Channel and direct-message conversation records

use serde::{Deserialize, Serialize};

use super::Named;

/// A channel as returned by the service
///
/// Only `id` and `name` are interpreted; every other field is kept verbatim
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique identifier for this channel (e.g. "C024BE91L")
    pub id: String,
    /// Channel name without the leading '#'
    #[serde(default)]
    pub name: String,
    /// Remaining fields of the upstream record
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Channel {
    /// Create a channel record with no extra fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Channel {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Named for Channel {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Response shape of the channel listing call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelList {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// A direct-message conversation between the bot and one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    /// Conversation identifier, usable as a message destination
    pub id: String,
    /// Identifier of the user on the other side
    #[serde(default)]
    pub user: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DirectMessage {
    pub fn new(id: impl Into<String>, user: impl Into<String>) -> Self {
        DirectMessage {
            id: id.into(),
            user: user.into(),
            extra: serde_json::Map::new(),
        }
    }
}
