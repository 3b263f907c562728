use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::RwLock;
use tokio_tungstenite::{connect_async, tungstenite::Error as WsError, tungstenite::Message};

use crate::error::{Error, ErrorCode, Result};
use crate::events::{BotEvent, EventBus, RealtimeFrame};
use crate::types::{ConnectionInfo, ConnectionState};

use super::bot::Bot;

impl Bot {
    /// Open the realtime connection at the URL obtained by `login`
    ///
    /// Emits `Open` once the handshake completes, then one `Message` per
    /// inbound text or binary frame in arrival order, and `Close` when the
    /// stream ends. Calling this again replaces the previous relay.
    pub async fn connect(&self) -> Result<()> {
        let ws_url = self.ws_url().await.ok_or_else(|| {
            Error::new(ErrorCode::InvalidState, "connect called before login")
        })?;

        self.set_connection_state(ConnectionState::Connecting).await;

        let (ws_stream, response) = match connect_async(ws_url.as_str()).await {
            Ok(connected) => connected,
            Err(e) => {
                self.set_connection_state(ConnectionState::Disconnected).await;
                return Err(Error::network(format!("WebSocket connection failed: {e}")));
            }
        };

        let info = ConnectionInfo::new(ws_url, response.status().as_u16());
        tracing::info!(url = %info.url, status = info.http_status, "Realtime connection open");

        // The old socket must not relay anything after the new Open
        let mut relay = self.realtime.relay.lock().await;
        if let Some(previous) = relay.take() {
            previous.abort();
            let _ = previous.await;
        }

        *self.realtime.info.write().await = Some(info.clone());
        self.set_connection_state(ConnectionState::Connected).await;
        self.events.emit(BotEvent::Open(info));

        *relay = Some(tokio::spawn(relay_frames(
            ws_stream,
            self.events.clone(),
            Arc::clone(&self.realtime.state),
        )));

        Ok(())
    }

    async fn set_connection_state(&self, state: ConnectionState) {
        *self.realtime.state.write().await = state;
    }
}

/// Forward every data frame from `stream` to `events` until the stream ends
///
/// Ping and pong frames are answered by the transport and not forwarded.
pub(crate) async fn relay_frames<S>(
    mut stream: S,
    events: EventBus,
    state: Arc<RwLock<ConnectionState>>,
) where
    S: Stream<Item = std::result::Result<Message, WsError>> + Unpin,
{
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => events.emit(BotEvent::Message(RealtimeFrame::Text(text))),
            Ok(Message::Binary(data)) => {
                events.emit(BotEvent::Message(RealtimeFrame::Binary(data)))
            }
            Ok(Message::Close(frame)) => {
                tracing::info!(?frame, "Realtime connection closed by server");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Realtime connection error");
                break;
            }
        }
    }

    *state.write().await = ConnectionState::Disconnected;
    events.emit(BotEvent::Close);
}
