//! # Newsletter endpoints
//!
//! Public subscribe plus admin draft management and the subscriber list.
//! There is no delivery pipeline here: "sending" a newsletter records the
//! transition and timestamp, nothing more.

use dioxus::prelude::*;

use crate::models::{Newsletter, Subscriber};

#[cfg(feature = "server")]
use crate::models::{NewsletterRow, SubscriberRow};

/// Subscribe an email address. Duplicate subscriptions are accepted quietly.
#[cfg(feature = "server")]
#[post("/api/newsletter/subscribe")]
pub async fn subscribe(email: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    if !crate::validate::valid_email(&email) {
        return Err(ServerFnError::new("A valid email address is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO newsletter_subscribers (email) VALUES ($1)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(&email)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/newsletter/subscribe")]
pub async fn subscribe(email: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List newsletter drafts, newest first.
#[cfg(feature = "server")]
#[get("/api/newsletter/newsletters")]
pub async fn admin_list_newsletters(token: String) -> Result<Vec<Newsletter>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<NewsletterRow> =
        sqlx::query_as("SELECT * FROM newsletters ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(NewsletterRow::to_newsletter).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/newsletter/newsletters")]
pub async fn admin_list_newsletters(token: String) -> Result<Vec<Newsletter>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a newsletter draft.
#[cfg(feature = "server")]
#[post("/api/newsletter/newsletters")]
pub async fn create_newsletter(
    token: String,
    subject: String,
    content: String,
) -> Result<Newsletter, ServerFnError> {
    use crate::db::get_pool;

    let subject = crate::validate::required(&subject, "Subject").map_err(ServerFnError::new)?;
    let content = crate::validate::required(&content, "Content").map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: NewsletterRow = sqlx::query_as(
        "INSERT INTO newsletters (subject, content, status, author_id)
         VALUES ($1, $2, 'draft', $3)
         RETURNING *",
    )
    .bind(&subject)
    .bind(&content)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_newsletter())
}

#[cfg(not(feature = "server"))]
#[post("/api/newsletter/newsletters")]
pub async fn create_newsletter(
    token: String,
    subject: String,
    content: String,
) -> Result<Newsletter, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a draft's subject and content. Sent newsletters are immutable.
#[cfg(feature = "server")]
#[post("/api/newsletter/newsletters/:id")]
pub async fn update_newsletter(
    id: String,
    token: String,
    subject: String,
    content: String,
) -> Result<Newsletter, ServerFnError> {
    use crate::db::get_pool;

    let subject = crate::validate::required(&subject, "Subject").map_err(ServerFnError::new)?;
    let content = crate::validate::required(&content, "Content").map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let newsletter_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<NewsletterRow> = sqlx::query_as(
        "UPDATE newsletters SET subject = $2, content = $3, updated_at = NOW()
         WHERE id = $1 AND status = 'draft'
         RETURNING *",
    )
    .bind(newsletter_id)
    .bind(&subject)
    .bind(&content)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Draft not found (already sent?)"));
    };

    Ok(row.to_newsletter())
}

#[cfg(not(feature = "server"))]
#[post("/api/newsletter/newsletters/:id")]
pub async fn update_newsletter(
    id: String,
    token: String,
    subject: String,
    content: String,
) -> Result<Newsletter, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark a draft as sent.
#[cfg(feature = "server")]
#[post("/api/newsletter/newsletters/:id/send")]
pub async fn mark_newsletter_sent(id: String, token: String) -> Result<Newsletter, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let newsletter_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<NewsletterRow> = sqlx::query_as(
        "UPDATE newsletters SET status = 'sent', sent_at = NOW(), updated_at = NOW()
         WHERE id = $1 AND status = 'draft'
         RETURNING *",
    )
    .bind(newsletter_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Draft not found (already sent?)"));
    };

    tracing::info!(id = %id, "newsletter marked sent");

    Ok(row.to_newsletter())
}

#[cfg(not(feature = "server"))]
#[post("/api/newsletter/newsletters/:id/send")]
pub async fn mark_newsletter_sent(id: String, token: String) -> Result<Newsletter, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a newsletter draft or sent record.
#[cfg(feature = "server")]
#[post("/api/newsletter/newsletters/:id/delete")]
pub async fn delete_newsletter(id: String, token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let newsletter_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM newsletters WHERE id = $1")
        .bind(newsletter_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Newsletter not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/newsletter/newsletters/:id/delete")]
pub async fn delete_newsletter(id: String, token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List subscribers, newest first.
#[cfg(feature = "server")]
#[get("/api/newsletter/subscribers")]
pub async fn admin_list_subscribers(token: String) -> Result<Vec<Subscriber>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<SubscriberRow> =
        sqlx::query_as("SELECT * FROM newsletter_subscribers ORDER BY subscribed_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(SubscriberRow::to_subscriber).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/newsletter/subscribers")]
pub async fn admin_list_subscribers(token: String) -> Result<Vec<Subscriber>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove a subscriber.
#[cfg(feature = "server")]
#[post("/api/newsletter/subscribers/:id/delete")]
pub async fn remove_subscriber(id: String, token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let subscriber_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM newsletter_subscribers WHERE id = $1")
        .bind(subscriber_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/newsletter/subscribers/:id/delete")]
pub async fn remove_subscriber(id: String, token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
