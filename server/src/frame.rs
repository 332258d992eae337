//! Reply construction over the shared wire frame.
//!
//! DESIGN
//! ======
//! The `frames` crate owns the `Frame` struct and the protobuf codec; this
//! module adds the server-side vocabulary on top of it. Replies correlate to
//! requests via `parent_id` and inherit the request syscall. Standalone
//! pushes (`session:connected`, snapshot refreshes) get fresh ids with no
//! parent.
//!
//! Timestamps are stamped here at construction. Clients send `ts: 0` and the
//! server's receive path never trusts a client clock.

use std::time::{SystemTime, UNIX_EPOCH};

use frames::{Frame, Status};
use serde_json::Value;
use uuid::Uuid;

// =============================================================================
// FIELD CONSTANTS
// =============================================================================

/// Frame data key for error messages.
pub const FRAME_MESSAGE: &str = "message";

/// Frame data key for grepable error codes.
pub const FRAME_CODE: &str = "code";

/// Frame data key for the retryable flag on error frames.
pub const FRAME_RETRYABLE: &str = "retryable";

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for structured error frames.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Current time as milliseconds since Unix epoch.
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Build a standalone server push with no parent request.
#[must_use]
pub fn push(syscall: impl Into<String>, status: Status, data: Value) -> Frame {
    Frame {
        id: Uuid::new_v4().to_string(),
        parent_id: None,
        ts: now_ms(),
        from: None,
        syscall: syscall.into(),
        status,
        data,
    }
}

/// Reply construction on the shared frame type.
pub trait FrameReply {
    /// Create a done response with no payload. Terminal.
    fn done(&self) -> Frame;

    /// Create a done response carrying a payload. Terminal.
    fn done_with(&self, data: Value) -> Frame;

    /// Create an error response from a plain string. Terminal.
    fn error(&self, message: impl Into<String>) -> Frame;

    /// Create a structured error response from a typed error. Terminal.
    fn error_from(&self, err: &(impl ErrorCode + ?Sized)) -> Frame;

    /// Extract the syscall prefix (everything before the first ':').
    fn prefix(&self) -> &str;
}

impl FrameReply for Frame {
    fn done(&self) -> Frame {
        reply(self, Status::Done, serde_json::json!({}))
    }

    fn done_with(&self, data: Value) -> Frame {
        reply(self, Status::Done, data)
    }

    fn error(&self, message: impl Into<String>) -> Frame {
        reply(
            self,
            Status::Error,
            serde_json::json!({ FRAME_MESSAGE: message.into() }),
        )
    }

    fn error_from(&self, err: &(impl ErrorCode + ?Sized)) -> Frame {
        reply(
            self,
            Status::Error,
            serde_json::json!({
                FRAME_CODE: err.error_code(),
                FRAME_MESSAGE: err.to_string(),
                FRAME_RETRYABLE: err.retryable(),
            }),
        )
    }

    fn prefix(&self) -> &str {
        let Some((prefix, _)) = self.syscall.split_once(':') else {
            return &self.syscall;
        };
        prefix
    }
}

/// Build a reply frame. Inherits `parent_id` and `syscall` from the request.
fn reply(req: &Frame, status: Status, data: Value) -> Frame {
    Frame {
        id: Uuid::new_v4().to_string(),
        parent_id: Some(req.id.clone()),
        ts: now_ms(),
        from: None,
        syscall: req.syscall.clone(),
        status,
        data,
    }
}

// =============================================================================
// TESTS
// =============================================================================
