#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use tokio::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification that expires after its time to live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, ttl: Duration) -> Self {
        Self { message: message.into(), kind, expires_at: Instant::now() + ttl }
    }

    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(ToastKind::Success, message, ttl)
    }

    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(ToastKind::Error, message, ttl)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds at most one toast; showing a new one replaces the old.
#[derive(Clone, Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The visible toast, clearing it first if it has expired.
    pub fn current(&mut self) -> Option<&Toast> {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.as_ref()
    }
}
