//! # Section visibility model
//!
//! A [`Section`] is one named, independently hideable region of the public
//! site ("about", "blog", ...). Rows are owned by the admin API; the public
//! pages only ever read a replica through the visibility store in the `ui`
//! crate.
//!
//! [`DEFAULT_SECTIONS`] is the canonical list of sections and their default
//! visibility. It is used in two places that must stay in sync: the server
//! materializes missing rows from it, and the client falls back to it when
//! the visibility fetch fails entirely.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Every known section and whether it is visible by default.
/// Blog and newsletter start hidden; the rest of the site starts visible.
pub const DEFAULT_SECTIONS: &[(&str, bool)] = &[
    ("about", true),
    ("skills", true),
    ("experience", true),
    ("portfolio", true),
    ("blog", false),
    ("newsletter", false),
    ("contact", true),
];

/// Full section row from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SectionRow {
    pub id: Uuid,
    pub section_name: String,
    pub is_visible: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
}

#[cfg(feature = "server")]
impl SectionRow {
    /// Convert to the client-side representation.
    pub fn to_section(&self) -> Section {
        Section {
            id: self.id.to_string(),
            section_name: self.section_name.clone(),
            is_visible: self.is_visible,
            updated_at: self.updated_at.map(|t| t.to_rfc3339()),
            updated_by: self.updated_by.map(|u| u.to_string()),
        }
    }
}

/// One toggleable region of the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub section_name: String,
    pub is_visible: bool,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
}

/// Wire shape for the visibility endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionList {
    pub sections: Vec<Section>,
}
