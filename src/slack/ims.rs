use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::DirectMessage;

use super::bot::Bot;
use super::methods;

impl Bot {
    /// Open (or fetch) the direct-message conversation with a user
    ///
    /// Returns the raw `im.open` response.
    pub async fn open_im(&self, user_id: &str) -> Result<serde_json::Value> {
        let params = BTreeMap::from([("user".to_string(), user_id.to_string())]);
        self.api_call(methods::IM_OPEN, params).await
    }

    /// Resolve a username to the identifier of the bot's conversation with them
    ///
    /// Uses a known conversation when there is one. Otherwise opens one with a
    /// single `im.open` call and remembers it.
    ///
    /// # Arguments
    /// * `name` - The username to resolve
    ///
    /// # Returns
    /// A Result containing the conversation identifier, or a `NotFound` Error
    /// if no user has that name
    pub async fn get_chat_id(&self, name: &str) -> Result<String> {
        let user = self
            .get_user(name)
            .await?
            .ok_or_else(|| Error::not_found(format!("No user named '{name}'")))?;

        let known = self
            .snapshot
            .read()
            .await
            .ims
            .iter()
            .rev()
            .find(|im| im.user == user.id)
            .map(|im| im.id.clone());
        if let Some(id) = known {
            return Ok(id);
        }

        let response = self.open_im(&user.id).await?;
        let id = response
            .get("channel")
            .and_then(|channel| channel.get("id"))
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::parse("im.open response has no channel.id"))?
            .to_string();

        tracing::debug!(user = %user.id, channel = %id, "Opened direct message");
        self.snapshot
            .write()
            .await
            .ims
            .push(DirectMessage::new(id.clone(), user.id));

        Ok(id)
    }
}
