//! Chat domain: the shopping assistant widget.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Shown when the assistant answered with a non-OK status.
pub const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Shown when the assistant could not be reached.
pub const CHAT_OFFLINE_REPLY: &str =
    "Sorry, I am having trouble connecting. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One bubble in the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}
