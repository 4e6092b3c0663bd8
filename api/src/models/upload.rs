//! Uploaded file metadata. The bytes live on disk under the uploads
//! directory; only this record crosses the wire.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full uploaded-file row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct StoredFileRow {
    pub id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl StoredFileRow {
    pub fn to_file(&self) -> StoredFile {
        StoredFile {
            id: self.id.to_string(),
            filename: self.filename.clone(),
            original_filename: self.original_filename.clone(),
            file_size: self.file_size,
            mime_type: self.mime_type.clone(),
            description: self.description.clone(),
            uploaded_at: self.uploaded_at.to_rfc3339(),
        }
    }
}

/// Uploaded file metadata as shown in the admin file manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredFile {
    pub id: String,
    pub filename: String,
    pub original_filename: String,
    pub file_size: i64,
    pub mime_type: String,
    pub description: Option<String>,
    pub uploaded_at: String,
}
