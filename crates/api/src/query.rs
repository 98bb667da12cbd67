//! Shared query parameter types for API handlers.

use serde::Deserialize;
use songinfo_core::verses::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` /
/// `clamp_offset`. Omitting `limit` lists every row.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// The `(group, song)` natural key (`?group=&song=`).
///
/// Both are optional at the extractor level so a missing parameter reaches
/// the resolver and is reported as an invalid request.
#[derive(Debug, Default, Deserialize)]
pub struct SongKeyParams {
    pub group: Option<String>,
    pub song: Option<String>,
}

/// Verse paging (`?page=&limit=`), 1-based.
#[derive(Debug, Default, Deserialize)]
pub struct VerseParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl VerseParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
