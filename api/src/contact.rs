//! # Contact endpoints
//!
//! The public contact form writes straight into the inbox table; the admin
//! console reads it back with unread counters and can mark or delete
//! messages. No notification email is sent from here.

use dioxus::prelude::*;

use crate::models::{ContactMessage, MessageList};

#[cfg(feature = "server")]
use crate::models::ContactMessageRow;

const MAX_MESSAGE_LEN: usize = 5000;

/// Submit a message through the public contact form.
#[cfg(feature = "server")]
#[post("/api/contact/submit")]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let name = crate::validate::required(&name, "Name").map_err(ServerFnError::new)?;
    let subject = crate::validate::required(&subject, "Subject").map_err(ServerFnError::new)?;
    let message = crate::validate::required(&message, "Message").map_err(ServerFnError::new)?;

    let email = email.trim().to_lowercase();
    if !crate::validate::valid_email(&email) {
        return Err(ServerFnError::new("A valid email address is required"));
    }
    if message.len() > MAX_MESSAGE_LEN {
        return Err(ServerFnError::new("Message is too long"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO contact_messages (name, email, subject, message) VALUES ($1, $2, $3, $4)",
    )
    .bind(&name)
    .bind(&email)
    .bind(&subject)
    .bind(&message)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(from = %email, "contact message received");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/contact/submit")]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the inbox: all messages, newest first, with counters.
#[cfg(feature = "server")]
#[get("/api/contact/messages")]
pub async fn admin_list_messages(token: String) -> Result<MessageList, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ContactMessageRow> =
        sqlx::query_as("SELECT * FROM contact_messages ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let unread_count = rows.iter().filter(|m| !m.is_read).count();
    let messages: Vec<ContactMessage> = rows.iter().map(ContactMessageRow::to_message).collect();
    let total = messages.len();

    Ok(MessageList {
        messages,
        total,
        unread_count,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/contact/messages")]
pub async fn admin_list_messages(token: String) -> Result<MessageList, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark one message as read.
#[cfg(feature = "server")]
#[post("/api/contact/messages/:id/mark-read")]
pub async fn mark_message_read(id: String, token: String) -> Result<ContactMessage, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let message_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ContactMessageRow> = sqlx::query_as(
        "UPDATE contact_messages SET is_read = TRUE WHERE id = $1 RETURNING *",
    )
    .bind(message_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Message not found"));
    };

    Ok(row.to_message())
}

#[cfg(not(feature = "server"))]
#[post("/api/contact/messages/:id/mark-read")]
pub async fn mark_message_read(id: String, token: String) -> Result<ContactMessage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete one message from the inbox.
#[cfg(feature = "server")]
#[post("/api/contact/messages/:id/delete")]
pub async fn delete_message(id: String, token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let message_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
        .bind(message_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Message not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/contact/messages/:id/delete")]
pub async fn delete_message(id: String, token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
