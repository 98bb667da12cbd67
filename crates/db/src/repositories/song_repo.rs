//! Repository for the `songs` table.

use sqlx::PgPool;
use songinfo_core::types::DbId;

use crate::models::song::{CreateSong, Song, UpdateSong};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    r#"id, "group", title, release_date, text, link, created_at, updated_at, deleted_at"#;

/// Hard cap on page size for list queries.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a caller-supplied limit into `1..=MAX_LIST_LIMIT`.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(1, MAX_LIST_LIMIT)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: i64) -> i64 {
    offset.max(0)
}

/// Provides CRUD operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO songs ("group", title, release_date, text, link)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(&input.group)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.text)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// Find a song by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first live song with exactly this group and title.
    ///
    /// Matching is case-sensitive. When duplicates exist the lowest id wins.
    pub async fn find_by_group_and_title(
        pool: &PgPool,
        group: &str,
        title: &str,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM songs
             WHERE "group" = $1 AND title = $2 AND deleted_at IS NULL
             ORDER BY id
             LIMIT 1"#
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(group)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List live songs in insertion order.
    ///
    /// `limit` of `None` returns every row; otherwise both values are clamped.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Song>, sqlx::Error> {
        let offset = clamp_offset(offset.unwrap_or(0));
        match limit {
            Some(limit) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM songs WHERE deleted_at IS NULL
                     ORDER BY id LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Song>(&query)
                    .bind(clamp_limit(limit))
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM songs WHERE deleted_at IS NULL
                     ORDER BY id OFFSET $1"
                );
                sqlx::query_as::<_, Song>(&query)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update a song. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSong,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            r#"UPDATE songs SET
                "group" = COALESCE($2, "group"),
                title = COALESCE($3, title),
                release_date = COALESCE($4, release_date),
                text = COALESCE($5, text),
                link = COALESCE($6, link),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .bind(&input.group)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.text)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a song by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE songs SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
