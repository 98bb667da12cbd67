//! Handler for `/info`, the song-info resolution endpoint.

use axum::extract::{Query, State};
use axum::Json;
use songinfo_core::song::SongDetail;

use crate::error::AppResult;
use crate::query::SongKeyParams;
use crate::state::AppState;

/// GET /info?group=&song=
///
/// Returns the stored detail for the pair, fetching and storing it from the
/// metadata provider first when it is missing.
pub async fn get_info(
    State(state): State<AppState>,
    Query(params): Query<SongKeyParams>,
) -> AppResult<Json<SongDetail>> {
    let group = params.group.unwrap_or_default();
    let song = params.song.unwrap_or_default();

    let detail = state.resolver.resolve(&group, &song).await?;
    Ok(Json(detail))
}
