//! Tests for the stand-in metadata provider router.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, enrichment_file, get};
use songinfo_api::routes::mock_provider;
use songinfo_core::enrichment::EnrichmentSource;

fn router_for(path: &std::path::Path) -> axum::Router {
    mock_provider::router(Arc::new(EnrichmentSource::new(path)))
}

#[tokio::test]
async fn serves_matching_record() {
    let file = enrichment_file("Muse", "Uprising", "2009-08-03", "lyrics", "http://e");

    let response = get(router_for(file.path()), "/info?group=Muse&song=Uprising").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["release_date"], "2009-08-03");
    assert_eq!(json["text"], "lyrics");
    assert_eq!(json["link"], "http://e");
}

#[tokio::test]
async fn mismatch_is_404() {
    let file = enrichment_file("Muse", "Uprising", "2009-08-03", "lyrics", "http://e");

    let response = get(router_for(file.path()), "/info?group=Muse&song=Starlight").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_params_are_400() {
    let file = enrichment_file("Muse", "Uprising", "2009-08-03", "lyrics", "http://e");

    let response = get(router_for(file.path()), "/info?group=Muse").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreadable_file_is_404() {
    let response = get(
        router_for(std::path::Path::new("/nonexistent/songinfo/song_enrichment.json")),
        "/info?group=Muse&song=Uprising",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_file_is_404() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "not json").unwrap();

    let response = get(router_for(file.path()), "/info?group=Muse&song=Uprising").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
