//! Chat sub-client.

use crate::client::StoreClient;
use crate::domain::chat::wire::ChatRequest;
use crate::error::StoreError;

/// Sub-client for the shopping assistant.
pub struct Chat<'a> {
    pub(crate) client: &'a StoreClient,
}

impl<'a> Chat<'a> {
    /// Send one message and return the assistant's reply text.
    pub async fn send(&self, message: &str) -> Result<String, StoreError> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        Ok(self.client.http.send_chat(&request).await?.response)
    }
}
