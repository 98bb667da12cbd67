//! Static enrichment source.
//!
//! A JSON file on disk holds a single override record. It is read in full
//! on every access and, when its `(group, song)` matches the request
//! exactly, its release date, text and link replace those of the detail
//! being returned. Failures to read or parse the file never reach the
//! caller of [`EnrichmentSource::overlay`]; they are logged and the detail
//! is left as it was.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::CoreError;
use crate::song::{format_release_date, parse_release_date, SongDetail};

/// The single record stored in the enrichment file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnrichmentOverride {
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl EnrichmentOverride {
    /// Exact, case-sensitive match on the natural key.
    pub fn matches(&self, group: &str, title: &str) -> bool {
        self.group == group && self.song == title
    }

    fn to_detail(&self) -> SongDetail {
        SongDetail {
            release_date: self.release_date.clone(),
            text: self.text.clone(),
            link: self.link.clone(),
        }
    }
}

/// Errors from reading the enrichment file.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Failed to read enrichment file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse enrichment file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed single-record override.
#[derive(Debug, Clone)]
pub struct EnrichmentSource {
    path: PathBuf,
}

impl EnrichmentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the override record. No caching: every call hits disk.
    pub async fn load(&self) -> Result<EnrichmentOverride, EnrichmentError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| EnrichmentError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| EnrichmentError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace all three fields of `detail` when the override matches.
    ///
    /// The override's release date is normalized through the fixed format;
    /// an unparsable date skips the overlay entirely.
    pub async fn overlay(&self, detail: &mut SongDetail, group: &str, title: &str) {
        let record = match self.load().await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Enrichment source unavailable, skipping overlay");
                return;
            }
        };

        if !record.matches(group, title) {
            tracing::debug!(group, song = title, "Enrichment record does not match");
            return;
        }

        let release_date = match parse_release_date(&record.release_date) {
            Ok(date) => format_release_date(date),
            Err(e) => {
                tracing::warn!(error = %e, group, song = title, "Enrichment release date rejected");
                return;
            }
        };

        detail.release_date = release_date;
        detail.text = record.text;
        detail.link = record.link;
        tracing::info!(group, song = title, "Applied enrichment overlay");
    }

    /// Return the override as a detail when it matches `(group, title)`.
    pub async fn lookup(&self, group: &str, title: &str) -> Result<SongDetail, CoreError> {
        let record = self
            .load()
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        if record.matches(group, title) {
            Ok(record.to_detail())
        } else {
            Err(CoreError::NotFound {
                entity: "EnrichmentRecord",
                key: format!("{group} / {title}"),
            })
        }
    }
}
