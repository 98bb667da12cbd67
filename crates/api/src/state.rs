use std::sync::Arc;

use songinfo_db::store::SongStore;

use crate::resolver::SongResolver;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Song persistence, injected at startup.
    pub store: Arc<dyn SongStore>,
    /// Store / provider / enrichment pipeline behind `/info`.
    pub resolver: Arc<SongResolver>,
}
