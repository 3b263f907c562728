use std::collections::BTreeMap;

use crate::error::Result;
use crate::types::MessageParams;

use super::bot::Bot;
use super::methods;

impl Bot {
    /// Post a message to a channel or conversation identifier
    ///
    /// The request starts from `text`, `channel = id` and, when the bot has a
    /// display name, `username`. Values in `params` replace those defaults.
    ///
    /// # Arguments
    /// * `id` - The channel or conversation identifier to post to
    /// * `text` - The message text
    /// * `params` - Optional fields overriding the defaults
    ///
    /// # Returns
    /// A Result containing the raw `chat.postMessage` response or an Error
    pub async fn post_message(
        &self,
        id: &str,
        text: &str,
        params: MessageParams,
    ) -> Result<serde_json::Value> {
        let mut query = BTreeMap::from([
            ("text".to_string(), text.to_string()),
            ("channel".to_string(), id.to_string()),
        ]);
        if let Some(name) = self.name() {
            query.insert("username".to_string(), name.to_string());
        }
        params.merge_into(&mut query);

        self.api_call(methods::CHAT_POST_MESSAGE, query).await
    }

    /// Post a direct message to a user by username
    pub async fn post_message_to_user(
        &self,
        name: &str,
        text: &str,
        params: MessageParams,
    ) -> Result<serde_json::Value> {
        let chat_id = self.get_chat_id(name).await?;
        self.post_message(&chat_id, text, params).await
    }

    /// Post a message to a channel by name
    pub async fn post_message_to_channel(
        &self,
        name: &str,
        text: &str,
        params: MessageParams,
    ) -> Result<serde_json::Value> {
        let channel_id = self.get_channel_id(name).await?;
        self.post_message(&channel_id, text, params).await
    }
}
