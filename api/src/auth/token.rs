//! # Opaque bearer-session tokens
//!
//! A login issues a 32-byte random token (64 hex chars) and records it in the
//! `admin_sessions` table with an expiry. Every admin operation resolves its
//! token through [`require_admin`], which joins the session row to the admin
//! user in one query and rejects unknown, expired, or inactive credentials.
//! Logout deletes the row, so revocation is immediate.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::AdminUser;

const TOKEN_BYTES: usize = 32;
const DEFAULT_TTL_HOURS: i64 = 24;

/// Generate a new opaque session token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Session lifetime, overridable via SESSION_TTL_HOURS.
pub fn session_ttl() -> Duration {
    let hours = std::env::var("SESSION_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_TTL_HOURS);
    Duration::hours(hours)
}

/// Create a session row for `user_id` and return the bearer token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, ApiError> {
    let token = generate_token();
    let expires_at: DateTime<Utc> = Utc::now() + session_ttl();

    sqlx::query("INSERT INTO admin_sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(token)
}

/// Resolve a bearer token to an active admin user, or fail closed.
pub async fn require_admin(pool: &PgPool, token: &str) -> Result<AdminUser, ApiError> {
    if token.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    let user: Option<AdminUser> = sqlx::query_as(
        "SELECT u.id, u.username, u.email, u.password_hash, u.is_active, u.created_at, u.last_login
         FROM admin_users u
         JOIN admin_sessions s ON s.user_id = u.id
         WHERE s.token = $1 AND s.expires_at > NOW()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let user = user.ok_or(ApiError::Unauthorized)?;
    if !user.is_active {
        return Err(ApiError::Inactive);
    }

    Ok(user)
}

/// Delete the session row for `token`. Missing rows are not an error.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove expired session rows. Run at server startup.
pub async fn sweep_expired_sessions(pool: &PgPool) -> Result<u64, ApiError> {
    let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
        .execute(pool)
        .await?;
    let swept = result.rows_affected();
    if swept > 0 {
        tracing::info!(swept, "removed expired admin sessions");
    }
    Ok(swept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_distinct_and_hex() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), TOKEN_BYTES * 2);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ttl_defaults_when_env_is_unset() {
        std::env::remove_var("SESSION_TTL_HOURS");
        assert_eq!(session_ttl(), Duration::hours(DEFAULT_TTL_HOURS));
    }
}
