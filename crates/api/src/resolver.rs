//! Song-info resolution.
//!
//! Turns a `(group, title)` query into a [`SongDetail`], backfilling the
//! store from the metadata provider on a miss. Held in
//! [`AppState`](crate::state::AppState) as an `Arc<SongResolver>`.

use std::sync::Arc;

use songinfo_core::enrichment::EnrichmentSource;
use songinfo_core::error::CoreError;
use songinfo_core::song::{parse_release_date, validate_song_key, SongDetail};
use songinfo_db::models::song::CreateSong;
use songinfo_db::store::SongStore;
use songinfo_provider::SongMetadataProvider;

/// Resolves song details from the store, the provider and the enrichment file.
///
/// Pipeline:
/// 1. Reject an empty group or title.
/// 2. Look the pair up in the store.
/// 3. On a miss, fetch from the provider, parse the release date and persist a new record.
/// 4. Overlay the enrichment file onto the detail (hit and miss alike).
pub struct SongResolver {
    store: Arc<dyn SongStore>,
    provider: Arc<dyn SongMetadataProvider>,
    enrichment: EnrichmentSource,
}

impl SongResolver {
    pub fn new(
        store: Arc<dyn SongStore>,
        provider: Arc<dyn SongMetadataProvider>,
        enrichment: EnrichmentSource,
    ) -> Self {
        Self {
            store,
            provider,
            enrichment,
        }
    }

    /// Resolve the detail for `(group, title)`.
    ///
    /// Creates at most one song record, and only when the store has no match
    /// and the provider answered with a parsable release date.
    pub async fn resolve(&self, group: &str, title: &str) -> Result<SongDetail, CoreError> {
        validate_song_key(group, title)?;

        let existing = self
            .store
            .find_by_group_and_title(group, title)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, group, song = title, "Song lookup failed");
                CoreError::Storage(e.to_string())
            })?;

        let mut detail = match existing {
            Some(song) => {
                tracing::debug!(id = song.id, group, song = title, "Song found in store");
                song.to_detail()
            }
            None => {
                tracing::info!(group, song = title, "Song not in store, fetching from provider");
                self.backfill(group, title).await?
            }
        };

        self.enrichment.overlay(&mut detail, group, title).await;
        Ok(detail)
    }

    /// Fetch from the provider and persist the result.
    async fn backfill(&self, group: &str, title: &str) -> Result<SongDetail, CoreError> {
        let fetched = self.provider.fetch(group, title).await.map_err(|e| {
            tracing::error!(error = %e, group, song = title, "Provider lookup failed");
            CoreError::UpstreamUnavailable(e.to_string())
        })?;

        let release_date = parse_release_date(&fetched.release_date).inspect_err(|e| {
            tracing::error!(error = %e, group, song = title, "Provider sent unparsable release date");
        })?;

        let input = CreateSong {
            group: group.to_string(),
            title: title.to_string(),
            release_date,
            text: fetched.text,
            link: fetched.link,
        };

        let song = self.store.create(&input).await.map_err(|e| {
            tracing::error!(error = %e, group, song = title, "Failed to store fetched song");
            CoreError::Storage(e.to_string())
        })?;

        tracing::info!(id = song.id, group, song = title, "Added fetched song to the store");
        Ok(song.to_detail())
    }
}
