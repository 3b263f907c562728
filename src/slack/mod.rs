//! Slack adapter
//!
//! The [`Bot`] issues RPC calls over HTTP through an [`ApiTransport`] and
//! relays frames from the realtime WebSocket as [`BotEvent`](crate::BotEvent)s.

mod auth;
mod bot;
mod channels;
mod chat;
mod ims;
mod lookup;
mod transport;
mod users;
mod websocket;

#[cfg(test)]
mod test_support;

pub use bot::Bot;
pub use transport::{ApiTransport, HttpTransport};

/// RPC method names
pub mod methods {
    pub const RTM_START: &str = "rtm.start";
    pub const CHANNELS_LIST: &str = "channels.list";
    pub const USERS_LIST: &str = "users.list";
    pub const IM_OPEN: &str = "im.open";
    pub const CHAT_POST_MESSAGE: &str = "chat.postMessage";
}
