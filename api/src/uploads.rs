//! # File upload endpoints
//!
//! Uploads arrive as base64 payloads from the admin console. Bytes land under
//! the uploads directory with a uuid-prefixed name (originals may collide);
//! the metadata row is what the file manager lists.

use dioxus::prelude::*;

use crate::models::StoredFile;

#[cfg(feature = "server")]
use crate::models::StoredFileRow;

/// 10 MiB, matching what a portfolio realistically serves inline.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[cfg(feature = "server")]
fn uploads_dir() -> std::path::PathBuf {
    std::env::var("UPLOADS_DIR")
        .unwrap_or_else(|_| "uploads".to_string())
        .into()
}

/// Store an uploaded file and record its metadata.
#[cfg(feature = "server")]
#[post("/api/files/upload")]
pub async fn upload_file(
    token: String,
    filename: String,
    mime_type: String,
    data_base64: String,
    description: Option<String>,
) -> Result<StoredFile, ServerFnError> {
    use base64::Engine;

    use crate::db::get_pool;

    let original = crate::validate::required(&filename, "Filename").map_err(ServerFnError::new)?;
    // Strip any path the browser may have attached.
    let original = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(&original)
        .to_string();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(data_base64.as_bytes())
        .map_err(|e| ServerFnError::new(format!("invalid upload payload: {e}")))?;

    if bytes.is_empty() {
        return Err(ServerFnError::new("File is empty"));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ServerFnError::new("File is larger than 10 MiB"));
    }

    let stored_name = format!("{}-{}", uuid::Uuid::new_v4(), original);
    let dir = uploads_dir();
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let path = dir.join(&stored_name);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: StoredFileRow = sqlx::query_as(
        "INSERT INTO uploaded_files
            (filename, original_filename, file_path, file_size, mime_type, description)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&stored_name)
    .bind(&original)
    .bind(path.to_string_lossy().into_owned())
    .bind(bytes.len() as i64)
    .bind(mime_type.trim())
    .bind(description.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(file = %stored_name, size = bytes.len(), "file uploaded");

    Ok(row.to_file())
}

#[cfg(not(feature = "server"))]
#[post("/api/files/upload")]
pub async fn upload_file(
    token: String,
    filename: String,
    mime_type: String,
    data_base64: String,
    description: Option<String>,
) -> Result<StoredFile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List uploaded files, newest first.
#[cfg(feature = "server")]
#[get("/api/files")]
pub async fn admin_list_files(token: String) -> Result<Vec<StoredFile>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<StoredFileRow> =
        sqlx::query_as("SELECT * FROM uploaded_files ORDER BY uploaded_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(StoredFileRow::to_file).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/files")]
pub async fn admin_list_files(token: String) -> Result<Vec<StoredFile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an uploaded file: the row first, then the bytes on disk. A missing
/// disk file is logged and ignored so the listing cannot wedge.
#[cfg(feature = "server")]
#[post("/api/files/:id/delete")]
pub async fn delete_file(id: String, token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let file_id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<StoredFileRow> =
        sqlx::query_as("DELETE FROM uploaded_files WHERE id = $1 RETURNING *")
            .bind(file_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new("File not found"));
    };

    if let Err(e) = tokio::fs::remove_file(&row.file_path).await {
        tracing::warn!(file = %row.file_path, error = %e, "could not remove file from disk");
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/files/:id/delete")]
pub async fn delete_file(id: String, token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
