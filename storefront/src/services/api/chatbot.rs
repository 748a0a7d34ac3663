//! # Chatbot Endpoints
//!
//! The public endpoint answers anyone; the authenticated one also stores the
//! exchange in the user's history and can answer about their orders.

use super::client::ApiClient;
use super::error::ApiError;
use shared::{ChatHistory, ChatReply, ChatRequest, ChatSuggestions, MessageResponse};

pub async fn chat(client: &ApiClient, message: String) -> Result<ChatReply, ApiError> {
    client
        .send(client.post("/chatbot/chat").json(&ChatRequest { message }))
        .await
}

pub async fn chat_authenticated(client: &ApiClient, message: String) -> Result<ChatReply, ApiError> {
    client
        .send(client.post("/chatbot/chat/auth").json(&ChatRequest { message }))
        .await
}

/// Most recent `limit` messages of the user's conversation.
pub async fn chat_history(client: &ApiClient, limit: u32) -> Result<ChatHistory, ApiError> {
    client
        .send(client.get("/chatbot/history").query(&[("limit", limit)]))
        .await
}

pub async fn clear_chat_history(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    client.send(client.delete("/chatbot/history")).await
}

pub async fn chat_suggestions(client: &ApiClient) -> Result<ChatSuggestions, ApiError> {
    client.send(client.get("/chatbot/suggestions")).await
}
