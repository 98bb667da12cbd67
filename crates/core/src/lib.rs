//! Domain building blocks for the song-info service.
//!
//! Everything here is free of HTTP and database concerns so that the API
//! and storage crates can share one vocabulary for songs, errors and the
//! release-date format.

pub mod enrichment;
pub mod error;
pub mod song;
pub mod types;
pub mod verses;
