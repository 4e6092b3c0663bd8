//! Blog post model: full row, list summary, and publication status.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    pub fn from_str_or_draft(s: &str) -> Self {
        match s {
            "published" => PostStatus::Published,
            _ => PostStatus::Draft,
        }
    }
}

/// Full blog post row from the database. The status column is stored as text.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: String,
    pub author_id: Uuid,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl BlogPostRow {
    pub fn to_post(&self) -> BlogPost {
        BlogPost {
            id: self.id.to_string(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            excerpt: self.excerpt.clone(),
            featured_image: self.featured_image.clone(),
            status: PostStatus::from_str_or_draft(&self.status),
            published_at: self.published_at.map(|t| t.to_rfc3339()),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.map(|t| t.to_rfc3339()),
        }
    }

    pub fn to_summary(&self) -> BlogPostSummary {
        BlogPostSummary {
            id: self.id.to_string(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            featured_image: self.featured_image.clone(),
            status: PostStatus::from_str_or_draft(&self.status),
            published_at: self.published_at.map(|t| t.to_rfc3339()),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Complete post, as served to the post detail page and the editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Listing projection without the post body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(PostStatus::from_str_or_draft("published"), PostStatus::Published);
        assert_eq!(PostStatus::from_str_or_draft("draft"), PostStatus::Draft);
        // Unknown column values degrade to draft rather than erroring.
        assert_eq!(PostStatus::from_str_or_draft("archived"), PostStatus::Draft);
        assert_eq!(PostStatus::Published.as_str(), "published");
    }
}
