//! Minimal Slack bot client
//!
//! Logs in with a token, keeps the workspace snapshot returned by the session
//! start call, relays realtime WebSocket frames to subscribers and posts
//! messages to channels or users by name.
//!
//! ```no_run
//! use slackbot::{Bot, BotConfig, BotEvent, MessageParams};
//!
//! # async fn run() -> slackbot::Result<()> {
//! let bot = Bot::new(BotConfig::new("xoxb-...").with_name("helper"))?;
//! let mut events = bot.subscribe();
//! bot.login().await?;
//!
//! bot.post_message_to_channel("general", "hello", MessageParams::default()).await?;
//!
//! while let Some(event) = events.recv().await {
//!     if let BotEvent::Message(frame) = event {
//!         println!("{frame:?}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod events;
pub mod slack;
pub mod types;

// Re-exports for convenience
pub use config::BotConfig;
pub use error::{Error, ErrorCode, Result};
pub use events::{BotEvent, EventBus, RealtimeFrame};
pub use slack::{ApiTransport, Bot, HttpTransport};
pub use types::{
    Channel, ChannelList, ConnectionInfo, ConnectionState, DirectMessage, MessageParams, SelfInfo,
    Team, User, UserList,
};
