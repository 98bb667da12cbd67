//! Route definitions for the `/songs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::song;
use crate::state::AppState;

/// Routes mounted at `/songs`.
///
/// ```text
/// GET    /                 -> list
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/verses      -> verses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(song::list))
        .route(
            "/{id}",
            get(song::get_by_id).put(song::update).delete(song::delete),
        )
        .route("/{id}/verses", get(song::verses))
}
