//! Table view pagination against the sample fixtures

use axum::http::StatusCode;
use serde_json::{Value, json};
use workbench_core::FixtureSet;

use crate::support::{app_from_set, fetch, sample_app, table_rows};

fn numbered_users(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| json!({"id": id, "name": format!("User {id}"), "email": format!("user{id}@example.com")}))
            .collect(),
    )
}

#[tokio::test]
async fn test_first_page_of_sample_users() {
    let (status, body) = fetch(sample_app(), "/table").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(table_rows(&body), 25);
    assert!(body.contains("ada.lovelace1@example.com"));
    assert!(body.contains("ada.lovelace25@example.com"));
    assert!(!body.contains("grace.thompson26@example.com"));
    assert!(body.contains("Page 1 of 3"));
    assert!(body.contains(r#"href="?page=2" rel="next""#));
}

#[tokio::test]
async fn test_middle_page_links_both_ways() {
    let (status, body) = fetch(sample_app(), "/table?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(table_rows(&body), 25);
    assert!(body.contains("grace.thompson26@example.com"));
    assert!(body.contains("grace.thompson50@example.com"));
    assert!(body.contains(r#"href="?page=1" rel="prev""#));
    assert!(body.contains(r#"href="?page=3" rel="next""#));
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let (_, body) = fetch(sample_app(), "/table?page=3").await;

    assert_eq!(table_rows(&body), 10);
    assert!(body.contains("alan.mccarthy51@example.com"));
    assert!(body.contains("radia.hamilton60@example.com"));
    assert!(!body.contains(r#"rel="next""#));
}

#[tokio::test]
async fn test_out_of_range_pages_are_clamped() {
    let (_, high) = fetch(sample_app(), "/table?page=99").await;
    assert!(high.contains("Page 3 of 3"));
    assert_eq!(table_rows(&high), 10);

    let (_, low) = fetch(sample_app(), "/table?page=-4").await;
    assert!(low.contains("Page 1 of 3"));
    assert!(low.contains("ada.lovelace1@example.com"));

    let (_, zero) = fetch(sample_app(), "/table?page=0").await;
    assert!(zero.contains("Page 1 of 3"));
}

#[tokio::test]
async fn test_exact_multiple_has_no_trailing_empty_page() {
    let set = FixtureSet::new().with("users", numbered_users(50));
    let (_, body) = fetch(app_from_set(set), "/table?page=2").await;

    assert!(body.contains("Page 2 of 2"));
    assert_eq!(table_rows(&body), 25);
    assert!(!body.contains(r#"rel="next""#));
}

#[tokio::test]
async fn test_single_page_has_no_links() {
    let set = FixtureSet::new().with("users", numbered_users(5));
    let (_, body) = fetch(app_from_set(set), "/table").await;

    assert!(body.contains("Page 1 of 1"));
    assert_eq!(table_rows(&body), 5);
    assert!(!body.contains(r#"rel="prev""#));
    assert!(!body.contains(r#"rel="next""#));
}

#[tokio::test]
async fn test_user_text_is_escaped() {
    let set = FixtureSet::new().with(
        "users",
        json!([{"id": 1, "name": "<b>Mallory</b>", "email": "m@example.com"}]),
    );
    let (_, body) = fetch(app_from_set(set), "/table").await;

    assert!(body.contains("&lt;b&gt;Mallory&lt;/b&gt;"));
    assert!(!body.contains("<b>Mallory</b>"));
}

#[tokio::test]
async fn test_repeated_page_key_uses_first_value() {
    let (status, body) = fetch(sample_app(), "/table?page=2&page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Page 2 of 3"));
    assert!(body.contains("grace.thompson26@example.com"));
}

#[tokio::test]
async fn test_repeated_keys_on_tabbed_views() {
    let uri = "/admin?tab=announcements&tab=users&page=2&page=1";
    let (status, body) = fetch(sample_app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">Announcements</a>"#));
    assert!(body.contains("Page 2 of 2"));

    let (status, body) = fetch(sample_app(), "/events?tag=music&tag=food").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Jazz in the Park"));
    assert!(!body.contains("Spring Potluck"));
}
