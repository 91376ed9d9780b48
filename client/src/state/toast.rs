//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Toast ids increase monotonically so a delayed dismiss can never remove a
//! newer toast that reused a slot. At most `MAX_VISIBLE_TOASTS` are kept; the
//! oldest drops first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use ventureboard::error::ApiError;

pub const MAX_VISIBLE_TOASTS: usize = 3;

/// How long a toast stays up before auto-dismiss, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, title: title.into(), message: message.into() });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Queue an error toast describing `err`.
    pub fn push_api_error(&mut self, title: impl Into<String>, err: &ApiError) -> u64 {
        self.push(ToastKind::Error, title, err.message.clone())
    }

    /// Remove toast `id`. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
