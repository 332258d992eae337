//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard route guard and the sidebar to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the session check.
///
/// `loading` starts `true` so the route guard waits for the initial
/// `/api/auth/me` round trip instead of redirecting on first paint.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}
