//! Chat widget against the fake assistant.

mod common;

use common::FakeBackend;
use shared::ChatRole;
use storefront::core::error::AppError;
use storefront::pages::chatbot::{APOLOGY, GREETING};

#[tokio::test]
async fn test_guest_chat() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.storefront();
    let mut widget = app.chat();

    // Act
    let opened: Vec<String> = widget
        .open()
        .await
        .expect("open should succeed in test")
        .iter()
        .map(|m| m.content.clone())
        .collect();
    let reply = widget
        .send("Do you bake gluten free bread?")
        .await
        .expect("send should succeed in test")
        .cloned();

    // Assert
    assert_eq!(opened, vec![GREETING.to_string()]);
    let reply = reply.expect("reply should be appended");
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, "You asked about: Do you bake gluten free bread?");
    assert_eq!(widget.messages().len(), 3);
    assert!(backend.state.lock().chat_history.is_empty());
}

#[tokio::test]
async fn test_assistant_failure_apologises() {
    let backend = FakeBackend::start().await;
    let app = backend.storefront();
    let mut widget = app.chat();
    widget.open().await.expect("open should succeed in test");

    let reply = widget
        .send("please fail")
        .await
        .expect("a failed reply should not be an error")
        .map(|m| m.content.clone());

    assert_eq!(reply.as_deref(), Some(APOLOGY));
    assert!(!widget.sending);
    assert_eq!(widget.messages()[1].role, ChatRole::User);
    assert_eq!(widget.send("   ").await, Ok(None));
}

#[tokio::test]
async fn test_customer_history_survives_reopen() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.customer().await;
    let mut first = app.chat();
    first.open().await.expect("open should succeed in test");
    first
        .send("Opening hours?")
        .await
        .expect("send should succeed in test");

    // Act
    let mut second = app.chat();
    let restored: Vec<(ChatRole, String)> = second
        .open()
        .await
        .expect("reopen should succeed in test")
        .iter()
        .map(|m| (m.role, m.content.clone()))
        .collect();
    second.clear_history().await.expect("clear should succeed in test");

    // Assert
    assert_eq!(
        restored,
        vec![
            (ChatRole::User, "Opening hours?".to_string()),
            (ChatRole::Assistant, "You asked about: Opening hours?".to_string()),
        ]
    );
    assert_eq!(second.messages().len(), 1);
    assert_eq!(second.messages()[0].content, GREETING);
    assert!(backend.state.lock().chat_history.is_empty());
}

#[tokio::test]
async fn test_expired_session_ends_customer_chat() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.customer().await;
    let mut widget = app.chat();
    widget.open().await.expect("open should succeed in test");
    backend.expire_sessions();

    // Act
    let result = widget.send("Still there?").await.map(|reply| reply.cloned());
    if let Err(e) = &result {
        app.handle_error(e);
    }

    // Assert
    assert_eq!(result, Err(AppError::SessionExpired));
    assert!(!widget.sending);
    assert!(!app.auth.is_authenticated());
    assert!(widget.messages().iter().all(|m| m.content != APOLOGY));
}
