//! # Chatbot DTOs
//!
//! The assistant itself runs server-side; `intent` and `source` describe how
//! the reply was produced and are informational only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of the chat endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Assistant reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub source: String,
}

/// Who authored a conversation message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One stored conversation message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(with = "crate::dto::timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Stored conversation (`GET /api/chatbot/history`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatHistory {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Suggested prompts (`GET /api/chatbot/suggestions`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSuggestions {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_payload() {
        let history: ChatHistory = serde_json::from_str(
            r#"{"messages":[
                {"role":"user","content":"Do you sell croissants?","timestamp":"2024-05-01T09:00:00.123"},
                {"role":"assistant","content":"Yes!","timestamp":"2024-05-01T09:00:01"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[1].role, ChatRole::Assistant);

        let empty: ChatHistory = serde_json::from_str("{}").unwrap();
        assert!(empty.messages.is_empty());
    }
}
