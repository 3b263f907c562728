//! Bot events and observer registration
//!
//! Observers call [`EventBus::subscribe`] and receive every event emitted
//! after that point, in emission order. Dropping the receiver unsubscribes.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::types::ConnectionInfo;

/// A raw inbound realtime frame, passed through unparsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealtimeFrame {
    Text(String),
    Binary(Vec<u8>),
}

impl RealtimeFrame {
    /// The frame's text, if it was a text frame
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RealtimeFrame::Text(text) => Some(text),
            RealtimeFrame::Binary(_) => None,
        }
    }
}

/// Events emitted by a [`Bot`](crate::Bot)
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    /// Login finished and the snapshot is populated
    Start,
    /// The realtime connection is established
    Open(ConnectionInfo),
    /// One inbound realtime frame
    Message(RealtimeFrame),
    /// The realtime stream ended
    Close,
}

/// Fan-out of bot events to any number of subscribers
///
/// Each subscriber has its own unbounded queue, so a slow subscriber never
/// loses events and never holds up the others.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<BotEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new observer
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<BotEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().push(tx);
        rx
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }

    /// Deliver an event to all current subscribers
    ///
    /// Subscribers whose receiver was dropped are removed.
    pub fn emit(&self, event: BotEvent) {
        let mut subscribers = self.lock();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        if subscribers.is_empty() {
            tracing::trace!("No subscribers, event dropped");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<mpsc::UnboundedSender<BotEvent>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
