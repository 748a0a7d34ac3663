//! # Chat Widget
//!
//! Floating support chat. History is loaded once, the first time the widget
//! opens; logged-in users talk to the endpoint that stores the conversation.

use crate::app::auth::AuthContext;
use crate::core::error::{AppError, Result};
use crate::core::service::SupportApi;
use crate::services::api::ApiError;
use chrono::Utc;
use shared::{ChatMessage, ChatRole};
use std::sync::Arc;

pub const HISTORY_LIMIT: u32 = 10;

pub const GREETING: &str = "Hello! Welcome to Sweet Bakery. How can I help you today?";

/// Shown in place of a reply when the assistant cannot be reached.
pub const APOLOGY: &str =
    "Sorry, I'm having trouble right now. Please try again later or call our hotline 0901 234 567.";

fn message(role: ChatRole, content: impl Into<String>) -> ChatMessage {
    ChatMessage {
        role,
        content: content.into(),
        timestamp: Utc::now(),
    }
}

fn greeting() -> Vec<ChatMessage> {
    vec![message(ChatRole::Assistant, GREETING)]
}

/// Time of day shown under a bubble.
pub fn format_time(msg: &ChatMessage) -> String {
    msg.timestamp.format("%H:%M").to_string()
}

pub struct ChatWidget {
    support: Arc<dyn SupportApi>,
    auth: AuthContext,
    messages: Vec<ChatMessage>,
    history_loaded: bool,
    pub is_open: bool,
    pub sending: bool,
}

impl ChatWidget {
    pub fn new(support: Arc<dyn SupportApi>, auth: AuthContext) -> Self {
        Self {
            support,
            auth,
            messages: Vec::new(),
            history_loaded: false,
            is_open: false,
            sending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Open the widget, loading the stored conversation on first open.
    ///
    /// # Errors
    ///
    /// `SessionExpired` when the API rejected the token; the widget still
    /// shows the greeting.
    pub async fn open(&mut self) -> Result<&[ChatMessage]> {
        self.is_open = true;
        if !self.history_loaded {
            self.load_history().await?;
        }
        Ok(&self.messages)
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    async fn load_history(&mut self) -> Result<()> {
        self.messages = if self.auth.is_authenticated() {
            match self.support.chat_history(HISTORY_LIMIT).await {
                Ok(history) if !history.messages.is_empty() => history.messages,
                Ok(_) => greeting(),
                Err(ApiError::SessionExpired) => {
                    self.messages = greeting();
                    return Err(AppError::SessionExpired);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Chat history unavailable");
                    greeting()
                }
            }
        } else {
            greeting()
        };
        self.history_loaded = true;
        Ok(())
    }

    /// Send `input` and append the reply.
    ///
    /// Blank input is ignored and yields `None`. The user's message is shown
    /// before the request goes out; a failed request appends [`APOLOGY`],
    /// except a rejected token, which is returned as `SessionExpired`.
    pub async fn send(&mut self, input: &str) -> Result<Option<&ChatMessage>> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.messages.push(message(ChatRole::User, text));
        self.sending = true;

        let reply = if self.auth.is_authenticated() {
            self.support.chat_authenticated(text.to_string()).await
        } else {
            self.support.chat(text.to_string()).await
        };

        let content = match reply {
            Ok(reply) => {
                tracing::debug!(intent = %reply.intent, source = %reply.source, "Chat reply");
                reply.response
            }
            Err(ApiError::SessionExpired) => {
                self.sending = false;
                return Err(AppError::SessionExpired);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat request failed");
                APOLOGY.to_string()
            }
        };
        self.messages.push(message(ChatRole::Assistant, content));
        self.sending = false;
        Ok(self.messages.last())
    }

    /// Delete the stored conversation and start over with the greeting.
    pub async fn clear_history(&mut self) -> Result<()> {
        if self.auth.is_authenticated() {
            self.support.clear_chat_history().await.map_err(|e| match e {
                ApiError::SessionExpired => AppError::SessionExpired,
                other => {
                    tracing::warn!(error = %other, "Clearing chat history failed");
                    AppError::Api("Could not clear chat history".to_string())
                }
            })?;
        }
        self.messages = greeting();
        self.history_loaded = true;
        Ok(())
    }

    /// Prompts offered as quick replies.
    pub async fn suggestions(&self) -> Result<Vec<String>> {
        self.support
            .chat_suggestions()
            .await
            .map(|s| s.suggestions)
            .map_err(|e| AppError::from_api(e, "Failed to load suggestions"))
    }
}
