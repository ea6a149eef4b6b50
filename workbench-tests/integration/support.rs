//! Shared helpers for driving the router

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use workbench_core::config::PaginationConfig;
use workbench_core::{DirectoryFixtures, FixtureSet, FixtureSource, StaticFixtures};
use workbench_web::{AppState, build_router};

/// Sample fixtures shipped at the workspace root.
pub fn sample_fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../mock_data")
}

pub fn app_with(source: Arc<dyn FixtureSource>) -> Router {
    let state = AppState::new(source, PaginationConfig::default());
    build_router(state, &Path::new(env!("CARGO_MANIFEST_DIR")).join("../static"))
}

pub fn app_from_set(set: FixtureSet) -> Router {
    app_with(Arc::new(StaticFixtures::new(set)))
}

pub fn sample_app() -> Router {
    app_with(Arc::new(DirectoryFixtures::new(sample_fixtures_dir())))
}

pub async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Number of rendered data rows in a table page.
pub fn table_rows(body: &str) -> usize {
    body.matches(r#"<tr class="hover:bg-gray-750">"#).count()
}

/// Number of rendered event cards.
pub fn event_cards(body: &str) -> usize {
    body.matches(r#"<article class="event-card"#).count()
}
