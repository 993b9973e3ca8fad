//! Store operations for the `favorites` table.
//!
//! One SQL statement per operation; the pool is injected by the caller and
//! the store's own defaults assign `id` and `created_at`.

use crate::error::PawmarkError;
use crate::models::Favorite;
use sqlx::PgPool;
use uuid::Uuid;

/// Default cap on rows returned by [`list`].
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// The most recent favorites, newest first, capped at `limit` rows.
pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Favorite>, PawmarkError> {
    tracing::debug!(limit, "listing favorites");
    let favorites = sqlx::query_as::<_, Favorite>(
        r#"SELECT id, type, value, created_at
           FROM favorites
           ORDER BY created_at DESC
           LIMIT $1"#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(favorites)
}

/// Insert exactly one row and return it with its store-assigned id and
/// timestamp. Validation of `kind`/`value` happens at the API boundary.
pub async fn insert(pool: &PgPool, kind: &str, value: &str) -> Result<Favorite, PawmarkError> {
    let favorite = sqlx::query_as::<_, Favorite>(
        r#"INSERT INTO favorites (type, value)
           VALUES ($1, $2)
           RETURNING id, type, value, created_at"#,
    )
    .bind(kind)
    .bind(value)
    .fetch_one(pool)
    .await?;
    Ok(favorite)
}

/// Delete by id. Returns the number of rows affected; 0 when the id was
/// already gone, which callers treat as success.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, PawmarkError> {
    let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
