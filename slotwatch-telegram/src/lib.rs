//! Slotwatch Telegram Client
//!
//! A small, type-safe HTTP client for the Telegram Bot API, covering the
//! single method the watcher needs: `sendMessage`.
//!
//! # Example
//!
//! ```no_run
//! use slotwatch_telegram::TelegramClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), slotwatch_telegram::ClientError> {
//!     let client = TelegramClient::new("123456:bot-token");
//!     client.send_message("987654", "Earlier appointment available!").await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod messages;

pub use error::{ClientError, Result};
pub use messages::Message;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot authentication token
    token: String,
    /// HTTP client instance
    client: Client,
}

/// Telegram's uniform response envelope
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new client for the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a client against a custom base URL
    ///
    /// Useful for pointing at a local Bot API server or a test stub.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a Bot API method
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Handle an API response and unwrap Telegram's envelope
    ///
    /// Checks the HTTP status, decodes the `{ok, result, description}`
    /// envelope, and surfaces `ok=false` as a typed error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        if !envelope.ok {
            return Err(ClientError::BotApiError(
                envelope
                    .description
                    .unwrap_or_else(|| "Unknown Bot API error".to_string()),
            ));
        }

        envelope
            .result
            .ok_or_else(|| ClientError::ParseError("Envelope ok but result missing".to_string()))
    }
}
