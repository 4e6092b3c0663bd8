//! # Blog endpoints
//!
//! Public read access to published posts plus the admin CRUD surface. Slugs
//! are derived from the title on creation and never change afterwards, so
//! published URLs stay stable through edits.

use dioxus::prelude::*;

use crate::models::{BlogPost, BlogPostSummary};

#[cfg(feature = "server")]
use crate::models::BlogPostRow;

#[cfg(feature = "server")]
async fn fetch_post_row(
    pool: &sqlx::PgPool,
    id: uuid::Uuid,
) -> Result<BlogPostRow, crate::error::ApiError> {
    let row: Option<BlogPostRow> = sqlx::query_as("SELECT * FROM blog_posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| crate::error::ApiError::NotFound("blog post".into()))
}

#[cfg(feature = "server")]
fn parse_id(id: &str) -> Result<uuid::Uuid, ServerFnError> {
    uuid::Uuid::parse_str(id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// List published posts, newest first.
#[cfg(feature = "server")]
#[get("/api/blog/posts")]
pub async fn list_published_posts() -> Result<Vec<BlogPostSummary>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<BlogPostRow> = sqlx::query_as(
        "SELECT * FROM blog_posts WHERE status = 'published' ORDER BY published_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(BlogPostRow::to_summary).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/blog/posts")]
pub async fn list_published_posts() -> Result<Vec<BlogPostSummary>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one published post by slug.
#[cfg(feature = "server")]
#[get("/api/blog/posts/:slug")]
pub async fn get_post(slug: String) -> Result<BlogPost, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<BlogPostRow> =
        sqlx::query_as("SELECT * FROM blog_posts WHERE slug = $1 AND status = 'published'")
            .bind(&slug)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Post not found"));
    };

    Ok(row.to_post())
}

#[cfg(not(feature = "server"))]
#[get("/api/blog/posts/:slug")]
pub async fn get_post(slug: String) -> Result<BlogPost, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every post, drafts included, for the admin console.
#[cfg(feature = "server")]
#[get("/api/blog/admin/posts")]
pub async fn admin_list_posts(token: String) -> Result<Vec<BlogPostSummary>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<BlogPostRow> =
        sqlx::query_as("SELECT * FROM blog_posts ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(BlogPostRow::to_summary).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/blog/admin/posts")]
pub async fn admin_list_posts(token: String) -> Result<Vec<BlogPostSummary>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one post by id for the editor, regardless of status.
#[cfg(feature = "server")]
#[get("/api/blog/admin/posts/:id")]
pub async fn admin_get_post(id: String, token: String) -> Result<BlogPost, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row = fetch_post_row(pool, parse_id(&id)?)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_post())
}

#[cfg(not(feature = "server"))]
#[get("/api/blog/admin/posts/:id")]
pub async fn admin_get_post(id: String, token: String) -> Result<BlogPost, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a post. The slug is derived from the title and deduplicated with a
/// numeric suffix against existing slugs.
#[cfg(feature = "server")]
#[post("/api/blog/posts")]
pub async fn create_post(
    token: String,
    title: String,
    content: String,
    excerpt: Option<String>,
    featured_image: Option<String>,
    publish: bool,
) -> Result<BlogPost, ServerFnError> {
    use crate::db::get_pool;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if content.trim().is_empty() {
        return Err(ServerFnError::new("Content is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let base = crate::slug::slugify(&title);
    let taken: Vec<String> = sqlx::query_scalar("SELECT slug FROM blog_posts WHERE slug LIKE $1")
        .bind(format!("{base}%"))
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let slug = crate::slug::dedupe_slug(&base, &taken);

    let status = if publish { "published" } else { "draft" };

    let row: BlogPostRow = sqlx::query_as(
        "INSERT INTO blog_posts
            (title, slug, content, excerpt, featured_image, status, author_id, published_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, CASE WHEN $6 = 'published' THEN NOW() END)
         RETURNING *",
    )
    .bind(&title)
    .bind(&slug)
    .bind(content.trim())
    .bind(excerpt.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(featured_image.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(status)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(slug = %slug, status, "blog post created");

    Ok(row.to_post())
}

#[cfg(not(feature = "server"))]
#[post("/api/blog/posts")]
pub async fn create_post(
    token: String,
    title: String,
    content: String,
    excerpt: Option<String>,
    featured_image: Option<String>,
    publish: bool,
) -> Result<BlogPost, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a post's editable fields. The slug is left alone.
#[cfg(feature = "server")]
#[post("/api/blog/posts/:id")]
pub async fn update_post(
    id: String,
    token: String,
    title: String,
    content: String,
    excerpt: Option<String>,
    featured_image: Option<String>,
) -> Result<BlogPost, ServerFnError> {
    use crate::db::get_pool;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if content.trim().is_empty() {
        return Err(ServerFnError::new("Content is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let post_id = parse_id(&id)?;
    // Confirm the post exists before updating so a bad id reports "not found"
    // instead of silently updating zero rows.
    fetch_post_row(pool, post_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: BlogPostRow = sqlx::query_as(
        "UPDATE blog_posts SET
            title = $2,
            content = $3,
            excerpt = $4,
            featured_image = $5,
            updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(post_id)
    .bind(&title)
    .bind(content.trim())
    .bind(excerpt.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(featured_image.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_post())
}

#[cfg(not(feature = "server"))]
#[post("/api/blog/posts/:id")]
pub async fn update_post(
    id: String,
    token: String,
    title: String,
    content: String,
    excerpt: Option<String>,
    featured_image: Option<String>,
) -> Result<BlogPost, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Publish or unpublish a post. `published_at` is set on the first publish
/// and kept on later toggles.
#[cfg(feature = "server")]
#[post("/api/blog/posts/:id/publish")]
pub async fn set_post_published(
    id: String,
    token: String,
    publish: bool,
) -> Result<BlogPost, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let post_id = parse_id(&id)?;
    fetch_post_row(pool, post_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let status = if publish { "published" } else { "draft" };

    let row: BlogPostRow = sqlx::query_as(
        "UPDATE blog_posts SET
            status = $2,
            published_at = CASE
                WHEN $2 = 'published' THEN COALESCE(published_at, NOW())
                ELSE published_at
            END,
            updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(post_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_post())
}

#[cfg(not(feature = "server"))]
#[post("/api/blog/posts/:id/publish")]
pub async fn set_post_published(
    id: String,
    token: String,
    publish: bool,
) -> Result<BlogPost, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a post permanently.
#[cfg(feature = "server")]
#[post("/api/blog/posts/:id/delete")]
pub async fn delete_post(id: String, token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::auth::require_admin(pool, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
        .bind(parse_id(&id)?)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Post not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/blog/posts/:id/delete")]
pub async fn delete_post(id: String, token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
