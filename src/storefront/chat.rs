//! Shopping assistant widget.

use super::Storefront;
use crate::domain::chat::{ChatMessage, CHAT_ERROR_REPLY, CHAT_OFFLINE_REPLY};

impl Storefront {
    pub async fn toggle_chatbot(&self) {
        self.update_page(|p| p.toggle_chatbot()).await;
    }

    /// Post the shopper's message, then the reply (or a canned apology).
    /// Blank input is ignored.
    pub async fn send_chat_message(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.update_page(|p| p.push_chat(ChatMessage::user(text)))
            .await;

        let reply = match self.client.chat().send(text).await {
            Ok(reply) => reply,
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, "chat request did not reach the server");
                CHAT_OFFLINE_REPLY.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.update_page(|p| p.push_chat(ChatMessage::bot(reply)))
            .await;
    }
}
