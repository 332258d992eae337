//! In-app notification state (toasts and persistent alerts).
//!
//! DESIGN
//! ======
//! One alert visible at a time; a newer alert replaces the current one.
//! Auto-dismiss is seq-guarded: the timer that expires for alert N dismisses
//! only alert N, never a newer alert that replaced it in the meantime.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// Visual/semantic variant of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    /// CSS modifier suffix for the alert card.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
    /// Auto-dismiss delay; `None` means the alert stays until closed by hand.
    pub timeout_ms: Option<u32>,
    /// Monotonic identity used to guard delayed dismissal.
    pub seq: u64,
}

/// Notification surface state.
#[derive(Clone, Debug, Default)]
pub struct AlertsState {
    pub current: Option<Alert>,
    next_seq: u64,
}

impl AlertsState {
    /// Show an alert, replacing whatever is currently visible.
    /// Returns the alert's seq for timer-based dismissal.
    pub fn show(
        &mut self,
        kind: AlertKind,
        title: impl Into<String>,
        body: impl Into<String>,
        timeout_ms: Option<u32>,
    ) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Alert {
            kind,
            title: title.into(),
            body: body.into(),
            timeout_ms,
            seq,
        });
        seq
    }

    /// Dismiss the alert with the given seq. A stale seq (the alert was
    /// already replaced) is a no-op.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|a| a.seq == seq) {
            self.current = None;
        }
    }

    /// Dismiss whatever is visible (close button).
    pub fn dismiss_current(&mut self) {
        self.current = None;
    }
}
