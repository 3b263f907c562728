use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::{Channel, ChannelList};

use super::bot::{decode, Bot};
use super::lookup::find_by_name;
use super::methods;

impl Bot {
    /// List channels
    ///
    /// Served from the login snapshot when present, otherwise fetched with one
    /// `channels.list` call. The fetched list is not cached.
    pub async fn get_channels(&self) -> Result<ChannelList> {
        let cached = self.snapshot.read().await.channels.clone();
        if let Some(channels) = cached {
            return Ok(ChannelList { channels });
        }

        let body = self.api_call(methods::CHANNELS_LIST, BTreeMap::new()).await?;
        decode(body)
    }

    /// Find a channel by name (without the leading '#')
    ///
    /// Returns `None` when no channel has that name. If several do, the last
    /// one listed is returned.
    pub async fn get_channel(&self, name: &str) -> Result<Option<Channel>> {
        let list = self.get_channels().await?;
        Ok(find_by_name(&list.channels, name).cloned())
    }

    /// Resolve a channel name to its identifier
    pub async fn get_channel_id(&self, name: &str) -> Result<String> {
        self.get_channel(name)
            .await?
            .map(|channel| channel.id)
            .ok_or_else(|| Error::not_found(format!("No channel named '{name}'")))
    }
}
