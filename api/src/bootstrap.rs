//! Startup provisioning: make sure the site has an administrator.
//!
//! Reads ADMIN_USERNAME / ADMIN_EMAIL / ADMIN_PASSWORD and creates the
//! account if neither the username nor the email exists yet. Without the
//! variables the step is skipped, which is fine for databases provisioned
//! some other way.

use sqlx::PgPool;

use crate::error::ApiError;

/// Ensure an admin account exists. Returns true if one was created.
pub async fn ensure_admin_user(pool: &PgPool) -> Result<bool, ApiError> {
    let (Ok(username), Ok(email), Ok(password)) = (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::debug!("admin credentials not configured, skipping seed");
        return Ok(false);
    };

    let existing: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT id FROM admin_users WHERE username = $1 OR email = $2")
            .bind(&username)
            .bind(&email)
            .fetch_optional(pool)
            .await?;

    if existing.is_some() {
        return Ok(false);
    }

    let password_hash = crate::auth::hash_password(&password)?;

    sqlx::query(
        "INSERT INTO admin_users (username, email, password_hash, is_active)
         VALUES ($1, $2, $3, TRUE)",
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .execute(pool)
    .await?;

    tracing::info!(username = %username, "created initial admin user");

    Ok(true)
}
