//! Optional parameters for posting messages

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-supplied options for `chat.postMessage`
///
/// Every field is optional. When merged into a request the precedence is,
/// lowest first: the bot's defaults (`text`, `channel`, `username`), then
/// `extra`, then the named fields. The API token is added last and cannot be
/// overridden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageParams {
    /// Sender name shown for the message (overrides the bot's display name)
    pub username: Option<String>,
    /// Post as the authenticated user instead of as a bot
    pub as_user: Option<bool>,
    pub icon_emoji: Option<String>,
    pub icon_url: Option<String>,
    /// Reply in the thread whose parent has this timestamp
    pub thread_ts: Option<String>,
    /// Also show a threaded reply in the channel
    pub reply_broadcast: Option<bool>,
    /// "full" or "none"
    pub parse: Option<String>,
    pub link_names: Option<bool>,
    pub unfurl_links: Option<bool>,
    pub unfurl_media: Option<bool>,
    pub mrkdwn: Option<bool>,
    /// Legacy attachments, sent JSON-encoded
    pub attachments: Option<serde_json::Value>,
    /// Block Kit layout, sent JSON-encoded
    pub blocks: Option<serde_json::Value>,
    /// Any other query parameter
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl MessageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    pub fn in_thread(mut self, thread_ts: impl Into<String>) -> Self {
        self.thread_ts = Some(thread_ts.into());
        self
    }

    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }

    pub fn with_attachments(mut self, attachments: serde_json::Value) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn with_blocks(mut self, blocks: serde_json::Value) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Set an arbitrary query parameter
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Overlay these options onto `params`, replacing any existing keys
    pub(crate) fn merge_into(self, params: &mut BTreeMap<String, String>) {
        params.extend(self.extra);

        let strings = [
            ("username", self.username),
            ("icon_emoji", self.icon_emoji),
            ("icon_url", self.icon_url),
            ("thread_ts", self.thread_ts),
            ("parse", self.parse),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                params.insert(key.to_string(), value);
            }
        }

        let flags = [
            ("as_user", self.as_user),
            ("reply_broadcast", self.reply_broadcast),
            ("link_names", self.link_names),
            ("unfurl_links", self.unfurl_links),
            ("unfurl_media", self.unfurl_media),
            ("mrkdwn", self.mrkdwn),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                params.insert(key.to_string(), value.to_string());
            }
        }

        let documents = [("attachments", self.attachments), ("blocks", self.blocks)];
        for (key, value) in documents {
            if let Some(value) = value {
                params.insert(key.to_string(), value.to_string());
            }
        }
    }
}
