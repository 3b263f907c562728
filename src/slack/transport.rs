use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};

/// The HTTP request/response service the bot issues RPC calls through
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issue one GET request and return the parsed JSON body
    ///
    /// Non-2xx responses and undecodable bodies are errors. A decoded body is
    /// returned as-is, whatever it contains.
    async fn get(&self, url: Url) -> Result<serde_json::Value>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport with a 30 second request timeout
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client (shares its connection pool and settings)
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, url: Url) -> Result<serde_json::Value> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(format!("GET request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(Error::network(format!(
                "API request failed with status {status}: {error_text}"
            ))
            .with_http_status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
