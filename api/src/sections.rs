//! # Section visibility endpoints
//!
//! The authority behind the client-side visibility store. The public endpoint
//! requires no credential; the admin endpoints resolve their bearer token
//! first and record who flipped which section.
//!
//! Both read endpoints materialize any missing default section before
//! answering, so a fresh database serves the canonical seven sections on the
//! first request.

use dioxus::prelude::*;

use crate::models::{Section, SectionList};

#[cfg(feature = "server")]
use crate::models::SectionRow;

/// Insert any of the default sections that do not exist yet.
#[cfg(feature = "server")]
async fn ensure_default_sections(
    pool: &sqlx::PgPool,
    updated_by: Option<uuid::Uuid>,
) -> Result<(), crate::error::ApiError> {
    for (name, visible) in crate::models::DEFAULT_SECTIONS {
        sqlx::query(
            "INSERT INTO section_visibility (section_name, is_visible, updated_by)
             VALUES ($1, $2, $3)
             ON CONFLICT (section_name) DO NOTHING",
        )
        .bind(name)
        .bind(visible)
        .bind(updated_by)
        .execute(pool)
        .await?;
    }
    Ok(())
}

#[cfg(feature = "server")]
async fn load_all_sections(pool: &sqlx::PgPool) -> Result<SectionList, crate::error::ApiError> {
    let rows: Vec<SectionRow> =
        sqlx::query_as("SELECT * FROM section_visibility ORDER BY section_name")
            .fetch_all(pool)
            .await?;

    Ok(SectionList {
        sections: rows.iter().map(SectionRow::to_section).collect(),
    })
}

/// Get visibility of all sections. Public: this is the call the visibility
/// store makes once per page load.
#[cfg(feature = "server")]
#[get("/api/sections/visibility")]
pub async fn get_section_visibility() -> Result<SectionList, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    ensure_default_sections(pool, None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    load_all_sections(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/sections/visibility")]
pub async fn get_section_visibility() -> Result<SectionList, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get visibility of all sections for the admin console.
#[cfg(feature = "server")]
#[get("/api/sections/visibility/admin")]
pub async fn get_section_visibility_admin(token: String) -> Result<SectionList, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    ensure_default_sections(pool, Some(user.id))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    load_all_sections(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/sections/visibility/admin")]
pub async fn get_section_visibility_admin(token: String) -> Result<SectionList, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set one section's visibility. Creates the row if the section is new.
#[cfg(feature = "server")]
#[post("/api/sections/visibility/:name")]
pub async fn update_section_visibility(
    name: String,
    token: String,
    is_visible: bool,
) -> Result<Section, ServerFnError> {
    use crate::db::get_pool;

    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(ServerFnError::new("Section name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: SectionRow = sqlx::query_as(
        "INSERT INTO section_visibility (section_name, is_visible, updated_at, updated_by)
         VALUES ($1, $2, NOW(), $3)
         ON CONFLICT (section_name) DO UPDATE SET
            is_visible = $2,
            updated_at = NOW(),
            updated_by = $3
         RETURNING *",
    )
    .bind(&name)
    .bind(is_visible)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(section = %name, visible = is_visible, "section visibility updated");

    Ok(row.to_section())
}

#[cfg(not(feature = "server"))]
#[post("/api/sections/visibility/:name")]
pub async fn update_section_visibility(
    name: String,
    token: String,
    is_visible: bool,
) -> Result<Section, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Restore every default section to its default visibility.
#[cfg(feature = "server")]
#[post("/api/sections/visibility/reset")]
pub async fn reset_section_visibility(token: String) -> Result<SectionList, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    for (name, visible) in crate::models::DEFAULT_SECTIONS {
        sqlx::query(
            "INSERT INTO section_visibility (section_name, is_visible, updated_at, updated_by)
             VALUES ($1, $2, NOW(), $3)
             ON CONFLICT (section_name) DO UPDATE SET
                is_visible = $2,
                updated_at = NOW(),
                updated_by = $3",
        )
        .bind(name)
        .bind(visible)
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    tracing::info!("section visibility reset to defaults");

    load_all_sections(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/sections/visibility/reset")]
pub async fn reset_section_visibility(token: String) -> Result<SectionList, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
