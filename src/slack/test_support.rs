//! Test doubles for the HTTP transport and the realtime server

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use url::Url;

use crate::error::{Error, Result};

use super::transport::ApiTransport;

/// Answers RPC calls from canned bodies and records every request
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: HashMap<String, serde_json::Value>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer calls to `method` with `body`
    pub(crate) fn respond(mut self, method: &str, body: serde_json::Value) -> Self {
        self.responses.insert(method.to_string(), body);
        self
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn calls(&self, method: &str) -> usize {
        self.requests_for(method).len()
    }

    /// Query parameters of every request made to `method`, oldest first
    pub(crate) fn requests_for(&self, method: &str) -> Vec<BTreeMap<String, String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|url| method_of(url) == method)
            .map(|url| url.query_pairs().into_owned().collect())
            .collect()
    }

    /// Names of the methods called, oldest first
    pub(crate) fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|url| method_of(url).to_string())
            .collect()
    }
}

fn method_of(url: &Url) -> &str {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, url: Url) -> Result<serde_json::Value> {
        let method = method_of(&url).to_string();
        self.requests.lock().unwrap().push(url);

        self.responses
            .get(&method)
            .cloned()
            .ok_or_else(|| Error::network(format!("no canned response for {method}")))
    }
}

/// A one-shot WebSocket server that sends `frames` to the first client and
/// then closes the connection
pub(crate) async fn serve_frames(frames: Vec<Message>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();

        for frame in frames {
            if ws.send(frame).await.is_err() {
                return;
            }
        }
        let _ = ws.close(None).await;

        // Drain until the client acknowledges the close
        while let Some(Ok(_)) = ws.next().await {}
    });

    addr
}

/// Session-start body pointing the realtime connection at `addr`
pub(crate) fn session_start_body(addr: SocketAddr) -> serde_json::Value {
    serde_json::json!({
        "ok": true,
        "url": format!("ws://{addr}"),
        "self": {"id": "U0", "name": "bot"},
        "team": {"id": "T1", "name": "Acme", "domain": "acme"},
        "channels": [
            {"id": "C1", "name": "general"},
            {"id": "C2", "name": "random"}
        ],
        "users": [
            {"id": "U1", "name": "alice"},
            {"id": "U2", "name": "bob"}
        ],
        "ims": [
            {"id": "D1", "user": "U1"}
        ]
    })
}
