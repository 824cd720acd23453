//! Wire types for `POST /api/chatbot`.

use serde::{Deserialize, Serialize};

/// The message only; no conversation id or history is sent.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_round_shapes() {
        let body = serde_json::to_value(ChatRequest {
            message: "cheap phones".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"message": "cheap phones"}));

        let resp: ChatResponse =
            serde_json::from_str(r#"{"response": "Try the Redmi Note 13."}"#).unwrap();
        assert_eq!(resp.response, "Try the Redmi Note 13.");
    }
}
