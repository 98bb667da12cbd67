//! Song entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use songinfo_core::song::SongDetail;
use songinfo_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A song row from the `songs` table.
///
/// The title is exposed as `song` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    pub id: DbId,
    pub group: String,
    #[serde(rename = "song")]
    pub title: String,
    pub release_date: NaiveDate,
    pub text: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Song {
    /// Project the record into the response shape used by `/info`.
    pub fn to_detail(&self) -> SongDetail {
        SongDetail::from_parts(self.release_date, &self.text, &self.link)
    }
}

/// DTO for creating a new song.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSong {
    pub group: String,
    #[serde(rename = "song")]
    pub title: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}

/// DTO for updating an existing song. Present fields overwrite, absent ones are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSong {
    pub group: Option<String>,
    #[serde(rename = "song")]
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub text: Option<String>,
    pub link: Option<String>,
}
