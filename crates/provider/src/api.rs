//! REST client for the metadata provider's `/info` endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use songinfo_core::song::SongDetail;

/// HTTP client for a single metadata provider.
pub struct MetadataApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the metadata provider layer.
///
/// The provider signals an unknown song with a non-200 status, so "not
/// found" arrives as [`ProviderError::Status`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a status other than 200 OK.
    #[error("Provider API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body could not be decoded into a song detail.
    #[error("Malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MetadataApi {
    /// Create a client for the provider at `api_url` (e.g. `http://host:8081`)
    /// whose requests give up after `timeout`.
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Look up a song.
    ///
    /// Sends `GET /info` with `group` and `song` as percent-encoded query
    /// parameters and decodes the body into a [`SongDetail`].
    pub async fn fetch_song(&self, group: &str, title: &str) -> Result<SongDetail, ProviderError> {
        let response = self
            .client
            .get(format!("{}/info", self.api_url))
            .query(&[("group", group), ("song", title)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), group, song = title, "Provider returned non-OK status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let detail: SongDetail = serde_json::from_slice(&bytes)?;
        tracing::debug!(group, song = title, "Fetched song detail from provider");
        Ok(detail)
    }
}
