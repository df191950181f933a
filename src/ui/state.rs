use std::time::{Duration, Instant};

use crate::event::events::ToastKind;

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub sidebar_index: usize,
    pub toast: Option<Toast>,
}

/// The shared non-blocking notification. One at a time; a new toast replaces
/// the current one and every toast expires on its own.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: Instant::now() + TOAST_LIFETIME,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
