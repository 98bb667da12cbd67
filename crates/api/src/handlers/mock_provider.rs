//! Stand-in metadata provider.
//!
//! Answers `/info` from the enrichment file so the service can run without
//! a real upstream. Only mounted when `MOCK_PROVIDER_PORT` is configured.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use songinfo_core::enrichment::EnrichmentSource;
use songinfo_core::error::CoreError;
use songinfo_core::song::{validate_song_key, SongDetail};

use crate::error::AppResult;
use crate::query::SongKeyParams;

/// GET /info?group=&song= on the mock provider.
///
/// 200 with the enrichment record on an exact match. A mismatch or an
/// unreadable enrichment file is a 404.
pub async fn info(
    State(source): State<Arc<EnrichmentSource>>,
    Query(params): Query<SongKeyParams>,
) -> AppResult<Json<SongDetail>> {
    let group = params.group.unwrap_or_default();
    let song = params.song.unwrap_or_default();
    validate_song_key(&group, &song)?;

    // Any failure to produce the record, including an unreadable file, is a miss.
    let detail = source.lookup(&group, &song).await.map_err(|e| {
        tracing::debug!(error = %e, group = %group, song = %song, "Mock provider lookup missed");
        CoreError::NotFound {
            entity: "Song",
            key: format!("{group} / {song}"),
        }
    })?;
    tracing::info!(group = %group, song = %song, "Mock provider served song detail");
    Ok(Json(detail))
}
