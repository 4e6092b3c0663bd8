//! # Admin user model
//!
//! Two representations of the site administrator:
//!
//! - [`AdminUser`] (server only) — the complete `admin_users` row, including
//!   the Argon2 `password_hash` and the `is_active` flag. Loaded directly from
//!   queries via [`sqlx::FromRow`]; [`AdminUser::to_info`] projects it for the
//!   client.
//! - [`UserInfo`] — the client-safe subset that crosses the server/client
//!   boundary. It omits the password hash and converts ids and timestamps to
//!   strings so it works in WASM. This is also the "user descriptor" the
//!   session guard caches alongside the bearer token.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full administrator record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl AdminUser {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            username: self.username.clone(),
            email: self.email.clone(),
            is_active: self.is_active,
            created_at: self.created_at.to_rfc3339(),
            last_login: self.last_login.map(|t| t.to_rfc3339()),
        }
    }
}

/// Administrator information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: String,
    pub last_login: Option<String>,
}

/// Response returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}
