//! In-memory rate limiting for login attempts.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by normalized email. Checked before the password hash is verified
//! so a locked account costs no bcrypt work.
//!
//! TRADE-OFFS
//! ==========
//! State is per-process. A restart clears all windows, which is acceptable
//! for a brake on credential stuffing; durable lockouts are out of scope.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_ATTEMPT_LIMIT: usize = 5;
const DEFAULT_WINDOW_SECS: u64 = 300;

#[derive(Clone, Copy)]
struct RateLimitConfig {
    attempt_limit: usize,
    window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        let window_secs = env_parse("LOGIN_RATE_WINDOW_SECS", DEFAULT_WINDOW_SECS);
        Self {
            attempt_limit: env_parse("LOGIN_RATE_LIMIT", DEFAULT_ATTEMPT_LIMIT),
            window: Duration::from_secs(window_secs),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("login attempt limit exceeded (max {limit} attempts/{window_secs}s)")]
    AttemptsExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: std::sync::Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: std::sync::Arc::new(Mutex::new(HashMap::new())),
            config: RateLimitConfig::from_env(),
        }
    }

    /// Check the attempt window for one email, then record the attempt.
    ///
    /// # Errors
    ///
    /// Returns `AttemptsExceeded` when the window is already full. The
    /// rejected attempt is not recorded, so the window drains on its own.
    pub fn check_and_record(&self, email: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(email, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, email: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        let deque = inner.entry(email.to_owned()).or_default();
        prune_window(deque, now, cfg.window);
        if deque.len() >= cfg.attempt_limit {
            return Err(RateLimitError::AttemptsExceeded {
                limit: cfg.attempt_limit,
                window_secs: cfg.window.as_secs(),
            });
        }

        deque.push_back(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
