//! Router for the stand-in metadata provider.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use songinfo_core::enrichment::EnrichmentSource;
use tower_http::trace::TraceLayer;

use crate::handlers::mock_provider;

/// Standalone router (own state, own port) serving `GET /info`.
pub fn router(source: Arc<EnrichmentSource>) -> Router {
    Router::new()
        .route("/info", get(mock_provider::info))
        .layer(TraceLayer::new_for_http())
        .with_state(source)
}
