//! Song detail projection and the fixed release-date format.
//!
//! A [`SongDetail`] is what callers of `/info` receive: the release date as
//! a `YYYY-MM-DD` string plus the lyric text and external link. It is built
//! from a stored record, from the metadata provider, or from the static
//! enrichment file, and is never persisted itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// `chrono` format string for release dates on the wire (`2006-07-14`).
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Response-shaped projection of a song record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetail {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl SongDetail {
    /// Build a detail from stored fields, formatting the date for output.
    pub fn from_parts(release_date: NaiveDate, text: &str, link: &str) -> Self {
        Self {
            release_date: format_release_date(release_date),
            text: text.to_string(),
            link: link.to_string(),
        }
    }
}

/// Parse a release date in the fixed `YYYY-MM-DD` format.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT)
        .map_err(|e| CoreError::DataFormat(format!("Invalid release date '{raw}': {e}")))
}

/// Format a release date in the fixed `YYYY-MM-DD` format.
pub fn format_release_date(date: NaiveDate) -> String {
    date.format(RELEASE_DATE_FORMAT).to_string()
}

/// Reject an empty `group` or `song` before any lookup happens.
pub fn validate_song_key(group: &str, title: &str) -> Result<(), CoreError> {
    if group.is_empty() || title.is_empty() {
        return Err(CoreError::InvalidRequest(
            "Both 'group' and 'song' are required".to_string(),
        ));
    }
    Ok(())
}
