use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio::task::JoinHandle;
use url::Url;

use crate::config::BotConfig;
use crate::error::{Error, ErrorCode, Result};
use crate::events::{BotEvent, EventBus};
use crate::types::{
    Channel, ConnectionInfo, ConnectionState, DirectMessage, SelfInfo, SessionStart, Team, User,
};

use super::transport::{ApiTransport, HttpTransport};

/// State captured from the session-start response
#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    pub(crate) ws_url: Option<String>,
    pub(crate) self_info: Option<SelfInfo>,
    pub(crate) team: Option<Team>,
    pub(crate) channels: Option<Vec<Channel>>,
    pub(crate) users: Option<Vec<User>>,
    pub(crate) ims: Vec<DirectMessage>,
}

/// Realtime connection bookkeeping
#[derive(Default)]
pub(crate) struct Realtime {
    pub(crate) state: Arc<RwLock<ConnectionState>>,
    pub(crate) info: RwLock<Option<ConnectionInfo>>,
    pub(crate) relay: Mutex<Option<JoinHandle<()>>>,
}

/// A bot account connected to one workspace
///
/// Holds the token and display name, the snapshot taken at login and the
/// realtime relay. All operations take `&self`; wrap the bot in an `Arc` to
/// share it between tasks.
pub struct Bot {
    config: BotConfig,
    api_base: Url,
    transport: Arc<dyn ApiTransport>,
    pub(crate) snapshot: RwLock<Snapshot>,
    pub(crate) realtime: Realtime,
    pub(crate) events: EventBus,
}

impl Bot {
    /// Create a bot that talks to the service over HTTPS
    ///
    /// Fails with `InvalidArgument` if the token is missing. No network call is
    /// made; call [`login`](Bot::login) or use [`start`](Bot::start).
    pub fn new(config: BotConfig) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a bot that issues RPC calls through `transport`
    pub fn with_transport(config: BotConfig, transport: Arc<dyn ApiTransport>) -> Result<Self> {
        config.validate()?;

        let api_base = Url::parse(&config.api_base)
            .map_err(|e| Error::invalid_argument(format!("Invalid API base URL: {e}")))?;
        let events = EventBus::new();

        Ok(Self {
            config,
            api_base,
            transport,
            snapshot: RwLock::new(Snapshot::default()),
            realtime: Realtime::default(),
            events,
        })
    }

    /// Create a bot and log it in
    ///
    /// The `Start` and `Open` events fire before this returns, so observers
    /// that need them should use [`new`](Bot::new), [`subscribe`](Bot::subscribe)
    /// and then [`login`](Bot::login).
    pub async fn start(config: BotConfig) -> Result<Self> {
        let bot = Self::new(config)?;
        bot.login().await?;
        Ok(bot)
    }

    /// Display name used as the default sender name
    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    /// Register an observer for bot events
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<BotEvent> {
        self.events.subscribe()
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }

    /// Realtime URL from the session-start response, once logged in
    pub async fn ws_url(&self) -> Option<String> {
        self.snapshot.read().await.ws_url.clone()
    }

    /// The account the token authenticates as, once logged in
    pub async fn identity(&self) -> Option<SelfInfo> {
        self.snapshot.read().await.self_info.clone()
    }

    /// The workspace the token belongs to, once logged in
    pub async fn team(&self) -> Option<Team> {
        self.snapshot.read().await.team.clone()
    }

    /// Direct-message conversations known to the bot
    pub async fn direct_messages(&self) -> Vec<DirectMessage> {
        self.snapshot.read().await.ims.clone()
    }

    /// Current state of the realtime connection
    pub async fn connection_state(&self) -> ConnectionState {
        *self.realtime.state.read().await
    }

    /// Details of the realtime connection, once opened
    pub async fn connection_info(&self) -> Option<ConnectionInfo> {
        self.realtime.info.read().await.clone()
    }

    /// Replace the snapshot with the contents of a session-start response
    pub(crate) async fn apply_session(&self, start: SessionStart) {
        let mut snapshot = self.snapshot.write().await;
        snapshot.ws_url = Some(start.url);
        snapshot.self_info = start.self_info;
        snapshot.team = start.team;
        snapshot.channels = Some(start.channels);
        snapshot.users = Some(start.users);
        snapshot.ims = start.ims;
    }

    /// Build the request URL for an RPC method
    ///
    /// The token is inserted last so a caller-supplied `token` key never wins.
    pub(crate) fn method_url(&self, method: &str, mut params: BTreeMap<String, String>) -> Result<Url> {
        params.insert("token".to_string(), self.config.token.clone());

        let base = self.api_base.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{method}"))
            .map_err(|e| Error::invalid_argument(format!("Invalid method URL: {e}")))?;
        url.query_pairs_mut().extend_pairs(params.iter());

        Ok(url)
    }

    /// Perform one RPC call and return the parsed body
    ///
    /// A body carrying `"ok": false` is turned into an `Api` error holding the
    /// service's error string.
    ///
    /// # Arguments
    /// * `method` - The RPC method name (e.g., "chat.postMessage")
    /// * `params` - Query parameters; `token` is always set from the configuration
    ///
    /// # Returns
    /// A Result containing the parsed response body or an Error
    pub async fn api_call(
        &self,
        method: &str,
        params: BTreeMap<String, String>,
    ) -> Result<serde_json::Value> {
        let url = self.method_url(method, params)?;
        tracing::debug!(method, "RPC call");

        let body = self.transport.get(url).await?;

        if body.get("ok").and_then(serde_json::Value::as_bool) == Some(false) {
            let api_error = body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown_error")
                .to_string();
            tracing::warn!(method, error = %api_error, "RPC call rejected");

            return Err(Error::new(ErrorCode::Api, format!("{method} failed: {api_error}"))
                .with_api_error(api_error));
        }

        Ok(body)
    }
}

/// Decode a response body into a typed record
pub(crate) fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::test_support::MockTransport;
    use serde_json::json;

    fn bot_with(mock: &Arc<MockTransport>) -> Bot {
        Bot::with_transport(BotConfig::new("xoxb-test").with_name("bot"), mock.clone()).unwrap()
    }

    #[test]
    fn test_missing_token_fails_before_network() {
        let mock = Arc::new(MockTransport::new());
        let result = Bot::with_transport(BotConfig::new(""), mock.clone());

        let err = result.err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(mock.total_calls(), 0);
    }

    #[test]
    fn test_new_rejects_missing_token() {
        let err = Bot::new(BotConfig::new("  ")).err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(Bot::new(BotConfig::new("xoxb-test")).is_ok());
    }

    #[test]
    fn test_method_url() {
        let mock = Arc::new(MockTransport::new());
        let bot = bot_with(&mock);

        let params = BTreeMap::from([("user".to_string(), "U1".to_string())]);
        let url = bot.method_url("im.open", params).unwrap();
        assert_eq!(url.as_str(), "https://slack.com/api/im.open?token=xoxb-test&user=U1");
    }

    #[test]
    fn test_method_url_without_trailing_slash() {
        let mock = Arc::new(MockTransport::new());
        let bot = Bot::with_transport(
            BotConfig::new("t").with_api_base("http://127.0.0.1:8080/api"),
            mock,
        )
        .unwrap();

        let url = bot.method_url("rtm.start", BTreeMap::new()).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/rtm.start?token=t");
    }

    #[test]
    fn test_method_url_encodes_values() {
        let mock = Arc::new(MockTransport::new());
        let bot = bot_with(&mock);

        let params = BTreeMap::from([("text".to_string(), "hello & bye".to_string())]);
        let url = bot.method_url("chat.postMessage", params).unwrap();
        let text: Vec<_> = url.query_pairs().filter(|(k, _)| k == "text").collect();
        assert_eq!(text[0].1, "hello & bye");
    }

    #[tokio::test]
    async fn test_token_always_overwrites_caller_token() {
        let mock = Arc::new(MockTransport::new().respond("users.list", json!({"ok": true})));
        let bot = bot_with(&mock);

        let params = BTreeMap::from([("token".to_string(), "stolen".to_string())]);
        bot.api_call("users.list", params).await.unwrap();

        let sent = mock.requests_for("users.list");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["token"], "xoxb-test");
    }

    #[tokio::test]
    async fn test_api_error_body_is_a_failure() {
        let mock = Arc::new(
            MockTransport::new().respond("chat.postMessage", json!({"ok": false, "error": "not_in_channel"})),
        );
        let bot = bot_with(&mock);

        let err = bot.api_call("chat.postMessage", BTreeMap::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Api);
        assert_eq!(err.api_error(), Some("not_in_channel"));
    }

    #[tokio::test]
    async fn test_body_without_ok_passes_through() {
        let mock = Arc::new(MockTransport::new().respond("custom.method", json!({"value": 3})));
        let bot = bot_with(&mock);

        let body = bot.api_call("custom.method", BTreeMap::new()).await.unwrap();
        assert_eq!(body, json!({"value": 3}));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mock = Arc::new(MockTransport::new());
        let bot = bot_with(&mock);

        let err = bot.api_call("users.list", BTreeMap::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NetworkError);
        assert_eq!(mock.calls("users.list"), 1);
    }

    #[tokio::test]
    async fn test_accessors_before_login() {
        let mock = Arc::new(MockTransport::new());
        let bot = bot_with(&mock);

        assert_eq!(bot.name(), Some("bot"));
        assert!(bot.ws_url().await.is_none());
        assert!(bot.identity().await.is_none());
        assert!(bot.direct_messages().await.is_empty());
        assert_eq!(bot.connection_state().await, ConnectionState::Disconnected);
        assert!(bot.connection_info().await.is_none());
    }
}
