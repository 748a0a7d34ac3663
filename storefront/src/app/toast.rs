//! # Toast Context
//!
//! Ephemeral queue of UI messages. Each toast dismisses itself after its
//! duration plus a short fade-out; callers without a runtime prune with
//! [`ToastContext::expire`].

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// How long a toast stays when no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Fade-out time added before a toast is removed.
pub const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    message: String,
    kind: ToastKind,
    duration: Duration,
    shown_at: Instant,
}

impl Toast {
    fn expires_at(&self) -> Instant {
        self.shown_at + self.duration + FADE_OUT
    }
}

/// A toast as rendered: `index` is its position in the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleToast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub icon: &'static str,
    pub index: usize,
}

#[derive(Debug, Default)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Cheap-clone handle; clones share the queue.
#[derive(Clone, Default)]
pub struct ToastContext {
    queue: Arc<RwLock<ToastQueue>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message and return its id.
    ///
    /// Inside a tokio runtime a task removes the toast once it has expired.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration: Option<Duration>) -> u64 {
        let duration = duration.unwrap_or(DEFAULT_DURATION);
        let message = message.into();

        let id = {
            let mut queue = self.queue.write();
            queue.next_id += 1;
            let id = queue.next_id;
            queue.toasts.push(Toast {
                id,
                message: message.clone(),
                kind,
                duration,
                shown_at: Instant::now(),
            });
            id
        };

        tracing::debug!(id, kind = kind.as_str(), message = %message, "Toast shown");

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let ctx = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(duration + FADE_OUT).await;
                ctx.dismiss(id);
            });
        }

        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error, None)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Info, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Warning, None)
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.queue.write().toasts.retain(|toast| toast.id != id);
    }

    /// Remove every toast that expired at `now`; returns how many.
    pub fn expire(&self, now: Instant) -> usize {
        let mut queue = self.queue.write();
        let before = queue.toasts.len();
        queue.toasts.retain(|toast| toast.expires_at() > now);
        before - queue.toasts.len()
    }

    /// Current toasts in insertion order.
    pub fn visible(&self) -> Vec<VisibleToast> {
        self.queue
            .read()
            .toasts
            .iter()
            .enumerate()
            .map(|(index, toast)| VisibleToast {
                id: toast.id,
                message: toast.message.clone(),
                kind: toast.kind,
                icon: toast.kind.icon(),
                index,
            })
            .collect()
    }

    /// Take every queued toast, leaving the queue empty.
    pub fn drain(&self) -> Vec<VisibleToast> {
        let visible = self.visible();
        self.queue.write().toasts.clear();
        visible
    }

    pub fn is_empty(&self) -> bool {
        self.queue.read().toasts.is_empty()
    }
}
