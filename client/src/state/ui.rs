//! App-level UI chrome state: toasts and dark mode.
//!
//! DESIGN
//! ======
//! Async action outcomes surface through a central toast queue instead of
//! per-page status strings. The pending/settle pair mirrors the usual
//! promise-toast flow: push a pending info toast, then replace it in place
//! when the request resolves.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

/// One queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Queue-local identifier for dismissal and replacement.
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// UI state for toasts and dark mode.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Active toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Next toast ID to hand out.
    pub next_toast_id: u64,
}

impl UiState {
    /// Queue a toast and return its ID.
    pub fn push_toast(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Replace a pending toast's level and message in place; no-op if the
    /// toast was already dismissed.
    pub fn settle_toast(&mut self, id: u64, level: ToastLevel, message: impl Into<String>) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.level = level;
            toast.message = message.into();
        }
    }

    /// Remove a toast by ID.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
