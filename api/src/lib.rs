//! # API crate — shared fullstack server functions for the portfolio site
//!
//! This crate is the backbone of the fullstack architecture. It defines every
//! Dioxus server function the web frontend calls, along with the supporting
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing and opaque bearer-session tokens |
//! | [`bootstrap`] | `server` | Initial admin account provisioning at startup |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows and their client-safe projections |
//! | [`sections`] | — | Section-visibility endpoints (public + admin) |
//! | [`blog`] | — | Blog post CRUD and public listing |
//! | [`newsletter`] | — | Newsletter drafts and subscriber management |
//! | [`contact`] | — | Contact form submission and the admin inbox |
//! | [`uploads`] | — | File upload metadata and storage |
//! | [`slug`] | — | URL slug derivation for posts |
//! | [`validate`] | — | Input validation for the public endpoints |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` annotated with `#[get(...)]` or `#[post(...)]` is
//! compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! Admin-only functions take the bearer credential as an explicit `token`
//! argument; the server side resolves it through `auth::require_admin`, which
//! fails closed on unknown, expired, or inactive credentials.

use dioxus::prelude::*;

pub mod auth;
pub mod blog;
#[cfg(feature = "server")]
pub mod bootstrap;
pub mod contact;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
pub mod newsletter;
pub mod sections;
pub mod slug;
pub mod uploads;
pub mod validate;

pub use models::{
    BlogPost, BlogPostSummary, ContactMessage, LoginResponse, MessageList, Newsletter, Section,
    SectionList, StoredFile, Subscriber, UserInfo, DEFAULT_SECTIONS,
};

/// Log in with the admin username and password.
///
/// On success returns the opaque bearer token plus the user descriptor; the
/// client persists both. Creating and storing the credential is the login
/// flow's job — the session guard only ever reads or deletes it.
#[cfg(feature = "server")]
#[post("/api/auth/login")]
pub async fn login(username: String, password: String) -> Result<LoginResponse, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::AdminUser;

    let username = username.trim().to_string();
    if username.is_empty() || password.is_empty() {
        return Err(ServerFnError::new("Username and password are required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<AdminUser> = sqlx::query_as("SELECT * FROM admin_users WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Incorrect username or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    if !valid {
        return Err(ServerFnError::new("Incorrect username or password"));
    }

    if !user.is_active {
        return Err(ServerFnError::new("Account is inactive"));
    }

    sqlx::query("UPDATE admin_users SET last_login = NOW() WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let access_token = auth::create_session(pool, user.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(username = %user.username, "admin logged in");

    Ok(LoginResponse {
        access_token,
        user: user.to_info(),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(username: String, password: String) -> Result<LoginResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Verify a bearer token and return the current admin user.
///
/// Any failure — unknown token, expired session, inactive account — is an
/// error; the caller treats all of them as "not authenticated".
#[cfg(feature = "server")]
#[get("/api/auth/me")]
pub async fn verify_session(token: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn verify_session(token: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out: revoke the session row behind the token.
#[cfg(feature = "server")]
#[post("/api/auth/logout")]
pub async fn logout(token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    auth::delete_session(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout(token: String) -> Result<(), ServerFnError> {
    Ok(())
}

/// Change the admin password after re-checking the current one.
#[cfg(feature = "server")]
#[post("/api/auth/password")]
pub async fn change_password(
    token: String,
    current_password: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    if current_password.is_empty() || new_password.is_empty() {
        return Err(ServerFnError::new(
            "Current password and new password are required",
        ));
    }
    if new_password.len() < 8 {
        return Err(ServerFnError::new(
            "New password must be at least 8 characters long",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let valid = auth::verify_password(&current_password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    if !valid {
        return Err(ServerFnError::new("Incorrect current password"));
    }

    let new_hash = auth::hash_password(&new_password)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE admin_users SET password_hash = $1 WHERE id = $2")
        .bind(&new_hash)
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/password")]
pub async fn change_password(
    token: String,
    current_password: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
