//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures come back as [`AuthError`] values carrying the user-facing
//! message; the session check returns `Option` so a missing session degrades
//! to the login redirect without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

/// Sign-in failure, mapped from the login endpoint's status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password.
    InvalidCredential,
    /// Too many attempts for this account right now.
    RateLimited,
    /// Anything else: network failure, server error.
    Other,
}

impl AuthError {
    /// User-facing message for the login form.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidCredential => "Correo o contraseña incorrectos.",
            Self::RateLimited => "Cuenta bloqueada temporalmente por muchos intentos.",
            Self::Other => "Ocurrió un error inesperado.",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_error_from_status(status: u16) -> AuthError {
    match status {
        401 => AuthError::InvalidCredential,
        429 => AuthError::RateLimited,
        _ => AuthError::Other,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn ticket_request_failed_message(status: u16) -> String {
    format!("ticket request failed: {status}")
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the mapped [`AuthError`] when the credentials are rejected, the
/// account is rate-limited, or the request fails outright.
pub async fn login(email: &str, password: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|_| AuthError::Other)?
            .send()
            .await
            .map_err(|_| AuthError::Other)?;
        if !resp.ok() {
            return Err(auth_error_from_status(resp.status()));
        }
        resp.json::<User>().await.map_err(|_| AuthError::Other)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Other)
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Create a WebSocket authentication ticket via `POST /api/auth/ws-ticket`.
///
/// # Errors
///
/// Returns an error string if the ticket request fails.
pub async fn create_ws_ticket() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/ws-ticket")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(ticket_request_failed_message(resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct TicketResponse {
            ticket: String,
        }
        let body: TicketResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.ticket)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
