//! Route definitions for `/info`.

use axum::routing::get;
use axum::Router;

use crate::handlers::info;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/info", get(info::get_info))
}
