//! Realtime connection state and information types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about an established realtime connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// WebSocket URL the connection was opened to
    pub url: String,
    /// HTTP status of the upgrade response (normally 101)
    pub http_status: u16,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
}

/// Connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum ConnectionState {
    /// Not connected
    #[default]
    Disconnected,
    /// WebSocket handshake in progress
    Connecting,
    /// Handshake complete, frames are being relayed
    Connected,
}

impl ConnectionInfo {
    /// Create connection info stamped with the current time
    pub fn new(url: impl Into<String>, http_status: u16) -> Self {
        ConnectionInfo {
            url: url.into(),
            http_status,
            connected_at: Utc::now(),
        }
    }
}
