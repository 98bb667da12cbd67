pub mod health;
pub mod info;
pub mod mock_provider;
pub mod song;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /info                          resolve song detail (GET ?group=&song=)
///
/// /songs                         list (GET ?limit=&offset=)
/// /songs/{id}                    get, update, soft-delete
/// /songs/{id}/verses             paginated lyric lines (GET ?page=&limit=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(info::router())
        .nest("/songs", song::router())
}
