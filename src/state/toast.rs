//! Single-slot toast notification state.
//!
//! At most one toast exists. `show` replaces whatever is displayed, and the
//! lifecycle setters take the toast id so timers armed for a replaced toast
//! cannot touch its successor.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity, rendered as an `is-<kind>` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "is-success",
            Self::Error => "is-error",
            Self::Info => "is-info",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted in its initial (transparent, offset) state.
    #[default]
    Entering,
    Visible,
    /// Exit transition running; removal follows.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    /// Full class attribute for the toast element.
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = format!("notification-toast {}", self.kind.class());
        if self.phase == ToastPhase::Visible {
            class.push_str(" is-visible");
        }
        class
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Replace any current toast with a new one. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Start the entrance transition. Returns `false` if `id` is stale.
    pub fn enter(&mut self, id: u64) -> bool {
        self.transition(id, ToastPhase::Entering, ToastPhase::Visible)
    }

    /// Start the exit transition. Returns `false` if `id` is stale.
    pub fn leave(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop the toast. Returns `false` if `id` is stale.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    fn transition(&mut self, id: u64, from: ToastPhase, to: ToastPhase) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == from => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }
}
