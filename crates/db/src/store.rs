//! Store seam used by the resolver and HTTP handlers.
//!
//! [`SongStore`] is the interface injected into the API layer at startup.
//! [`PgSongStore`] is the production implementation, a thin wrapper that
//! forwards to [`SongRepo`] with its owned pool.

use async_trait::async_trait;
use songinfo_core::types::DbId;

use crate::models::song::{CreateSong, Song, UpdateSong};
use crate::repositories::SongRepo;
use crate::DbPool;

/// Persistence operations on song records.
#[async_trait]
pub trait SongStore: Send + Sync {
    async fn find_by_group_and_title(
        &self,
        group: &str,
        title: &str,
    ) -> Result<Option<Song>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, sqlx::Error>;

    async fn list(&self, limit: Option<i64>, offset: Option<i64>)
        -> Result<Vec<Song>, sqlx::Error>;

    async fn create(&self, input: &CreateSong) -> Result<Song, sqlx::Error>;

    async fn update(&self, id: DbId, input: &UpdateSong) -> Result<Option<Song>, sqlx::Error>;

    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Cheap reachability probe for `/health`.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed [`SongStore`].
#[derive(Clone)]
pub struct PgSongStore {
    pool: DbPool,
}

impl PgSongStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongStore for PgSongStore {
    async fn find_by_group_and_title(
        &self,
        group: &str,
        title: &str,
    ) -> Result<Option<Song>, sqlx::Error> {
        SongRepo::find_by_group_and_title(&self.pool, group, title).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        SongRepo::find_by_id(&self.pool, id).await
    }

    async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Song>, sqlx::Error> {
        SongRepo::list(&self.pool, limit, offset).await
    }

    async fn create(&self, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let song = SongRepo::create(&self.pool, input).await?;
        tracing::info!(id = song.id, group = %song.group, song = %song.title, "Created song");
        Ok(song)
    }

    async fn update(&self, id: DbId, input: &UpdateSong) -> Result<Option<Song>, sqlx::Error> {
        SongRepo::update(&self.pool, id, input).await
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        SongRepo::soft_delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
