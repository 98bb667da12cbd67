#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use songinfo_core::enrichment::EnrichmentSource;
use songinfo_core::song::SongDetail;
use songinfo_core::types::DbId;
use songinfo_db::models::song::{CreateSong, Song, UpdateSong};
use songinfo_db::store::SongStore;
use songinfo_provider::{ProviderError, SongMetadataProvider};
use tower::ServiceExt;

use songinfo_api::config::ServerConfig;
use songinfo_api::resolver::SongResolver;
use songinfo_api::router::build_app_router;
use songinfo_api::state::AppState;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// `SongStore` backed by a vector, with call counters and failure switches.
#[derive(Default)]
pub struct MemoryStore {
    songs: Mutex<Vec<Song>>,
    pub lookup_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub fail_lookup: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_ping: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a row directly, bypassing the counters.
    pub fn seed(&self, group: &str, title: &str, release_date: &str, text: &str) -> Song {
        let mut songs = self.songs.lock().unwrap();
        let song = make_song(
            songs.len() as DbId + 1,
            &CreateSong {
                group: group.to_string(),
                title: title.to_string(),
                release_date: NaiveDate::parse_from_str(release_date, "%Y-%m-%d").unwrap(),
                text: text.to_string(),
                link: format!("http://example.test/{title}"),
            },
        );
        songs.push(song.clone());
        song
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.songs.lock().unwrap().len()
    }

    pub fn get(&self, id: DbId) -> Option<Song> {
        self.songs
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }
}

fn make_song(id: DbId, input: &CreateSong) -> Song {
    let now = Utc::now();
    Song {
        id,
        group: input.group.clone(),
        title: input.title.clone(),
        release_date: input.release_date,
        text: input.text.clone(),
        link: input.link.clone(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[async_trait]
impl SongStore for MemoryStore {
    async fn find_by_group_and_title(
        &self,
        group: &str,
        title: &str,
    ) -> Result<Option<Song>, sqlx::Error> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self
            .songs
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.deleted_at.is_none() && s.group == group && s.title == title)
            .cloned())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        Ok(self.get(id).filter(|s| s.deleted_at.is_none()))
    }

    async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Song>, sqlx::Error> {
        let live = self
            .songs
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .cloned()
            .collect::<Vec<_>>();
        let offset = offset.unwrap_or(0).max(0) as usize;
        let limit = limit.map_or(usize::MAX, |l| l.clamp(1, 500) as usize);
        Ok(live.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, input: &CreateSong) -> Result<Song, sqlx::Error> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut songs = self.songs.lock().unwrap();
        let song = make_song(songs.len() as DbId + 1, input);
        songs.push(song.clone());
        Ok(song)
    }

    async fn update(&self, id: DbId, input: &UpdateSong) -> Result<Option<Song>, sqlx::Error> {
        let mut songs = self.songs.lock().unwrap();
        let Some(song) = songs
            .iter_mut()
            .find(|s| s.id == id && s.deleted_at.is_none())
        else {
            return Ok(None);
        };
        if let Some(group) = &input.group {
            song.group = group.clone();
        }
        if let Some(title) = &input.title {
            song.title = title.clone();
        }
        if let Some(date) = input.release_date {
            song.release_date = date;
        }
        if let Some(text) = &input.text {
            song.text = text.clone();
        }
        if let Some(link) = &input.link {
            song.link = link.clone();
        }
        song.updated_at = Utc::now();
        Ok(Some(song.clone()))
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut songs = self.songs.lock().unwrap();
        match songs
            .iter_mut()
            .find(|s| s.id == id && s.deleted_at.is_none())
        {
            Some(song) => {
                song.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.fail_ping.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scripted provider
// ---------------------------------------------------------------------------

/// What the scripted provider answers with.
pub enum ProviderReply {
    Detail(SongDetail),
    Status(u16),
    Malformed,
}

/// `SongMetadataProvider` that returns a fixed reply and counts calls.
pub struct ScriptedProvider {
    reply: ProviderReply,
    pub calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(reply: ProviderReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    /// Provider answering with the given three fields.
    pub fn detail(release_date: &str, text: &str, link: &str) -> Arc<Self> {
        Self::new(ProviderReply::Detail(SongDetail {
            release_date: release_date.to_string(),
            text: text.to_string(),
            link: link.to_string(),
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SongMetadataProvider for ScriptedProvider {
    async fn fetch(&self, _group: &str, _title: &str) -> Result<SongDetail, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            ProviderReply::Detail(detail) => Ok(detail.clone()),
            ProviderReply::Status(status) => Err(ProviderError::Status {
                status: *status,
                body: "song not found".to_string(),
            }),
            ProviderReply::Malformed => Err(ProviderError::Decode(
                serde_json::from_str::<SongDetail>("{").unwrap_err(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Enrichment fixtures
// ---------------------------------------------------------------------------

/// Path that never exists, so the overlay is always skipped.
pub fn absent_enrichment() -> EnrichmentSource {
    EnrichmentSource::new(PathBuf::from("/nonexistent/songinfo/song_enrichment.json"))
}

/// Write an enrichment file with the given record and return its handle.
pub fn enrichment_file(
    group: &str,
    song: &str,
    release_date: &str,
    text: &str,
    link: &str,
) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::json!({
        "group": group,
        "song": song,
        "release_date": release_date,
        "text": text,
        "link": link,
    });
    std::fs::write(file.path(), json.to_string()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        provider_url: "http://127.0.0.1:0".to_string(),
        provider_timeout_secs: 1,
        enrichment_path: PathBuf::from("/nonexistent/songinfo/song_enrichment.json"),
        mock_provider_port: None,
    }
}

pub fn build_resolver(
    store: Arc<MemoryStore>,
    provider: Arc<ScriptedProvider>,
    enrichment: EnrichmentSource,
) -> SongResolver {
    SongResolver::new(store, provider, enrichment)
}

/// Build the full application router with all middleware layers over the
/// given in-memory store and scripted provider.
pub fn build_test_app(
    store: Arc<MemoryStore>,
    provider: Arc<ScriptedProvider>,
    enrichment: EnrichmentSource,
) -> Router {
    let config = test_config();
    let resolver = Arc::new(build_resolver(Arc::clone(&store), provider, enrichment));
    let state = AppState { store, resolver };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    put_raw(app, uri, body.to_string()).await
}

pub async fn put_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
