//! Serving from a fixture directory on disk

use std::fs;
use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tempfile::TempDir;
use workbench_core::DirectoryFixtures;

use crate::support::{app_with, fetch, table_rows};

fn write_fixture(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[tokio::test]
async fn test_edits_show_up_without_restart() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "users.json", &json!([{"id": 1, "name": "First"}]).to_string());
    let app = app_with(Arc::new(DirectoryFixtures::new(dir.path())));

    let (_, before) = fetch(app.clone(), "/table").await;
    assert_eq!(table_rows(&before), 1);

    write_fixture(
        &dir,
        "users.json",
        &json!([{"id": 1, "name": "First"}, {"id": 2, "name": "Second"}]).to_string(),
    );
    let (_, after) = fetch(app, "/table").await;
    assert_eq!(table_rows(&after), 2);
    assert!(after.contains("Second"));
}

#[tokio::test]
async fn test_broken_fixture_reads_as_empty_object() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "family.json", "{ not json");
    write_fixture(&dir, "users.json", &json!([{"id": 1}]).to_string());
    let app = app_with(Arc::new(DirectoryFixtures::new(dir.path())));

    let (status, body) = fetch(app.clone(), "/nav_panel").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("no navigation entries"));

    let (status, _) = fetch(app, "/table").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_fixture_that_is_not_an_array() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "users.json", "{ not json");
    let app = app_with(Arc::new(DirectoryFixtures::new(dir.path())));

    let (status, body) = fetch(app, "/table").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("expected an array"));
}

#[tokio::test]
async fn test_missing_directory_serves_empty_views() {
    let dir = TempDir::new().unwrap();
    let app = app_with(Arc::new(DirectoryFixtures::new(dir.path().join("absent"))));

    let (status, body) = fetch(app.clone(), "/table").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No records to show"));

    let (status, body) = fetch(app, "/events").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No events match"));
}
