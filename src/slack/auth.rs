use std::collections::BTreeMap;

use crate::error::Result;
use crate::events::BotEvent;
use crate::types::SessionStart;

use super::bot::{decode, Bot};
use super::methods;

impl Bot {
    /// Start a session and open the realtime connection
    ///
    /// Calls `rtm.start` once, stores the realtime URL and the snapshot
    /// (channels, users, direct messages, identity, team), emits `Start` and
    /// then connects. Nothing is retried; the first failure is returned.
    pub async fn login(&self) -> Result<()> {
        let body = self.api_call(methods::RTM_START, BTreeMap::new()).await?;
        let start: SessionStart = decode(body)?;

        tracing::info!(
            channels = start.channels.len(),
            users = start.users.len(),
            ims = start.ims.len(),
            "Session started"
        );

        self.apply_session(start).await;
        self.events.emit(BotEvent::Start);

        self.connect().await
    }
}
