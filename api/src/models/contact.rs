//! Contact message model for the public contact form and the admin inbox.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full contact message row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ContactMessageRow {
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            is_read: self.is_read,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// One message submitted through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Inbox listing with the counters the dashboard shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageList {
    pub messages: Vec<ContactMessage>,
    pub total: usize,
    pub unread_count: usize,
}
