//! Alert notification
//!
//! Broadcasts an alert text to every configured chat. Deliveries are issued
//! concurrently, one per recipient, and are fire-and-forget: an individual
//! failure is logged and never aborts the others or reaches the poll loop.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use slotwatch_telegram::TelegramClient;

/// Delivers one alert to one recipient
#[async_trait]
pub trait AlertSender: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> anyhow::Result<()>;
}

/// Telegram-backed alert sender
pub struct TelegramAlertSender {
    client: TelegramClient,
}

impl TelegramAlertSender {
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlertSender for TelegramAlertSender {
    async fn send(&self, chat_id: &str, text: &str) -> anyhow::Result<()> {
        self.client.send_message(chat_id, text).await?;
        Ok(())
    }
}

/// Fans an alert out to all configured recipients
pub struct Notifier {
    sender: Arc<dyn AlertSender>,
    recipients: Vec<String>,
}

impl Notifier {
    pub fn new(sender: Arc<dyn AlertSender>, recipients: Vec<String>) -> Self {
        Self { sender, recipients }
    }

    /// Sends the text to every recipient concurrently
    ///
    /// Returns once every delivery has been attempted.
    pub async fn broadcast(&self, text: &str) {
        debug!("Broadcasting alert to {} chat(s)", self.recipients.len());

        let mut handles = Vec::new();

        for chat_id in &self.recipients {
            let sender = Arc::clone(&self.sender);
            let chat_id = chat_id.clone();
            let text = text.to_string();

            handles.push(tokio::spawn(async move {
                if let Err(e) = sender.send(&chat_id, &text).await {
                    warn!("Failed to deliver alert to chat {}: {:#}", chat_id, e);
                }
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("Alert delivery task panicked: {}", e);
            }
        }
    }
}
