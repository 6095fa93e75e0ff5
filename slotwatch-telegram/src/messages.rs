//! Message-related API endpoints

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TelegramClient;
use crate::error::Result;

/// Request body for the `sendMessage` method
#[derive(Debug, Clone, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// The subset of Telegram's Message object the watcher cares about
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
}

impl TelegramClient {
    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - The recipient chat identifier
    /// * `text` - The message text
    ///
    /// # Returns
    /// The delivered message
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<Message> {
        debug!("Sending message to chat {}", chat_id);

        let url = self.method_url("sendMessage");
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        self.handle_response(response).await
    }
}
