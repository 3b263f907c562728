//! Record types exchanged with the chat service

pub mod channel;
pub mod connection;
pub mod message;
pub mod session;
pub mod team;
pub mod user;

// Re-export for convenience
pub use channel::{Channel, ChannelList, DirectMessage};
pub use connection::{ConnectionInfo, ConnectionState};
pub use message::MessageParams;
pub use session::SessionStart;
pub use team::{SelfInfo, Team};
pub use user::{User, UserList};

/// Records that can be looked up by their human-readable name
pub trait Named {
    fn name(&self) -> &str;
}
