//! Client for the external song metadata provider.
//!
//! The provider answers `GET /info?group=..&song=..` with a JSON
//! [`SongDetail`](songinfo_core::song::SongDetail). [`MetadataApi`] is the
//! HTTP implementation; [`SongMetadataProvider`] is the seam the resolver
//! depends on so tests can substitute a scripted provider.

pub mod api;

use async_trait::async_trait;
use songinfo_core::song::SongDetail;

pub use api::{MetadataApi, ProviderError};

/// Source of song details for pairs missing from the store.
#[async_trait]
pub trait SongMetadataProvider: Send + Sync {
    /// Fetch the detail for `(group, title)`.
    async fn fetch(&self, group: &str, title: &str) -> Result<SongDetail, ProviderError>;
}

#[async_trait]
impl SongMetadataProvider for MetadataApi {
    async fn fetch(&self, group: &str, title: &str) -> Result<SongDetail, ProviderError> {
        self.fetch_song(group, title).await
    }
}
