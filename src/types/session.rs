//! Session-start (`rtm.start`) response

use serde::{Deserialize, Serialize};

use super::{Channel, DirectMessage, SelfInfo, Team, User};

/// The parts of the session-start response the bot keeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStart {
    /// WebSocket URL for the realtime connection
    pub url: String,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub ims: Vec<DirectMessage>,
    #[serde(rename = "self", default)]
    pub self_info: Option<SelfInfo>,
    #[serde(default)]
    pub team: Option<Team>,
}
