//! Database models and their client-safe projections.
//!
//! Each domain follows the same split: the full database row (server only,
//! `sqlx::FromRow`) and a serializable projection that can cross the
//! server/client boundary via server functions. Projections carry `String`
//! ids and RFC 3339 timestamp strings so they work in WASM.

mod blog;
mod contact;
mod newsletter;
mod section;
mod upload;
mod user;

pub use blog::{BlogPost, BlogPostSummary, PostStatus};
pub use contact::{ContactMessage, MessageList};
pub use newsletter::{Newsletter, NewsletterStatus, Subscriber};
pub use section::{Section, SectionList, DEFAULT_SECTIONS};
pub use upload::StoredFile;
pub use user::{LoginResponse, UserInfo};

#[cfg(feature = "server")]
pub use blog::BlogPostRow;
#[cfg(feature = "server")]
pub use contact::ContactMessageRow;
#[cfg(feature = "server")]
pub use newsletter::{NewsletterRow, SubscriberRow};
#[cfg(feature = "server")]
pub use section::SectionRow;
#[cfg(feature = "server")]
pub use upload::StoredFileRow;
#[cfg(feature = "server")]
pub use user::AdminUser;
