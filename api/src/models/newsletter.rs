//! Newsletter drafts and subscriber list. Drafting and subscriber management
//! only — actual delivery is intentionally not part of this site.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Lifecycle of a newsletter draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterStatus {
    Draft,
    Sent,
}

impl NewsletterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsletterStatus::Draft => "draft",
            NewsletterStatus::Sent => "sent",
        }
    }

    pub fn from_str_or_draft(s: &str) -> Self {
        match s {
            "sent" => NewsletterStatus::Sent,
            _ => NewsletterStatus::Draft,
        }
    }
}

/// Full newsletter row. Status is stored as text.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterRow {
    pub id: Uuid,
    pub subject: String,
    pub content: String,
    pub status: String,
    pub author_id: Uuid,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl NewsletterRow {
    pub fn to_newsletter(&self) -> Newsletter {
        Newsletter {
            id: self.id.to_string(),
            subject: self.subject.clone(),
            content: self.content.clone(),
            status: NewsletterStatus::from_str_or_draft(&self.status),
            sent_at: self.sent_at.map(|t| t.to_rfc3339()),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Newsletter draft as shown in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Newsletter {
    pub id: String,
    pub subject: String,
    pub content: String,
    pub status: NewsletterStatus,
    pub sent_at: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Full subscriber row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SubscriberRow {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl SubscriberRow {
    pub fn to_subscriber(&self) -> Subscriber {
        Subscriber {
            id: self.id.to_string(),
            email: self.email.clone(),
            subscribed_at: self.subscribed_at.to_rfc3339(),
        }
    }
}

/// One newsletter subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub subscribed_at: String,
}
