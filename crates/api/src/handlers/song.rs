//! Handlers for the `/songs` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use songinfo_core::types::DbId;
use songinfo_core::verses::paginate;
use songinfo_db::models::song::{Song, UpdateSong};

use crate::error::{song_not_found, AppError, AppResult};
use crate::query::{PaginationParams, VerseParams};
use crate::state::AppState;

/// GET /songs
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<Vec<Song>>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let songs = state.store.list(params.limit, params.offset).await?;
    Ok(Json(songs))
}

/// GET /songs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Song>> {
    let id = song_id(id)?;
    let song = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| song_not_found(id))?;
    Ok(Json(song))
}

/// GET /songs/{id}/verses?page=&limit=
///
/// Returns one page of lyric lines. A page past the end is an empty list.
pub async fn verses(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    params: Result<Query<VerseParams>, QueryRejection>,
) -> AppResult<Json<Vec<String>>> {
    let id = song_id(id)?;
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let song = state.store.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(id, "Verses requested for unknown song");
        song_not_found(id)
    })?;

    Ok(Json(paginate(&song.text, params.page(), params.limit())))
}

/// PUT /songs/{id}
///
/// Fields present in the body overwrite the stored ones.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateSong>, JsonRejection>,
) -> AppResult<Json<Song>> {
    let id = song_id(id)?;
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    validate_update(&input)?;

    let song = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| song_not_found(id))?;

    tracing::info!(id, "Updated song");
    Ok(Json(song))
}

/// DELETE /songs/{id}
///
/// Soft-deletes the song and confirms with `{"id": .., "status": "deleted"}`.
/// An unknown or already-deleted id is a 404, like the other `/songs/{id}`
/// routes, rather than a silent 200.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let id = song_id(id)?;
    let deleted = state.store.soft_delete(id).await?;
    if !deleted {
        return Err(song_not_found(id));
    }

    tracing::info!(id, "Deleted song");
    Ok(Json(serde_json::json!({
        "id": id,
        "status": "deleted",
    })))
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Unwrap the `{id}` segment, turning a non-numeric id into a JSON 400.
fn song_id(id: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(id)
}

/// The natural key may be changed but never blanked.
fn validate_update(input: &UpdateSong) -> AppResult<()> {
    if input.group.as_deref() == Some("") {
        return Err(AppError::BadRequest("'group' must not be empty".into()));
    }
    if input.title.as_deref() == Some("") {
        return Err(AppError::BadRequest("'song' must not be empty".into()));
    }
    Ok(())
}
