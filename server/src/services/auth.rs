//! Password auth service — credential checks, hashing, admin bootstrap.
//!
//! DESIGN
//! ======
//! Accounts are provisioned out of band (env-seeded admin, future user
//! management); there is no self-registration endpoint. Login failures are
//! deliberately indistinguishable: unknown email and wrong password both
//! surface as `InvalidCredentials`.

use sqlx::{PgPool, Row};

use crate::services::session::SessionUser;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Lowercase and trim an email. Returns `None` when clearly malformed.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Hash a password with bcrypt at the default cost.
///
/// # Errors
///
/// Returns `Hash` if bcrypt rejects the input (e.g. over its length cap).
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored bcrypt hash. Malformed hashes count
/// as a mismatch rather than an error.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Check credentials against the users table.
///
/// # Errors
///
/// Returns `InvalidCredentials` for unknown email or wrong password, `Db`
/// if the lookup itself fails.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<SessionUser, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, name, email, password_hash FROM users WHERE email = $1")
        .bind(&normalized)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let password_hash: String = row.get("password_hash");
    if !verify_password(password, &password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(SessionUser {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
    })
}

/// Seed or refresh the admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD` /
/// `ADMIN_NAME`. Returns the normalized email, or `None` when the env vars
/// are not set.
///
/// # Errors
///
/// Returns `InvalidEmail` when `ADMIN_EMAIL` does not parse, `Hash` or `Db`
/// when hashing or the upsert fail.
pub async fn ensure_admin_user(pool: &PgPool) -> Result<Option<String>, AuthError> {
    let (Ok(email), Ok(password)) = (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) else {
        return Ok(None);
    };
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrador".into());

    let normalized = normalize_email(&email).ok_or(AuthError::InvalidEmail)?;
    let password_hash = hash_password(&password)?;

    sqlx::query(
        r"INSERT INTO users (email, password_hash, name)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash, name = EXCLUDED.name",
    )
    .bind(&normalized)
    .bind(&password_hash)
    .bind(&name)
    .execute(pool)
    .await?;

    Ok(Some(normalized))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
