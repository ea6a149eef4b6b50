//! Navigation panel, admin and events views

use axum::http::StatusCode;
use serde_json::{Value, json};
use workbench_core::FixtureSet;

use crate::support::{app_from_set, event_cards, fetch, sample_app, table_rows};

fn tagged_events(count: usize, tag: &str) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| json!({"id": id, "title": format!("Event {id}"), "tags": [tag]}))
            .collect(),
    )
}

#[tokio::test]
async fn test_nav_panel_defaults_to_first_item() {
    let (status, body) = fetch(sample_app(), "/nav_panel").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">Overview</a>"#));
    assert!(body.contains("Household dashboard and recent activity."));
    assert!(body.contains(r#"href="?slug=calendar""#));
}

#[tokio::test]
async fn test_nav_panel_selects_slug() {
    let (_, body) = fetch(sample_app(), "/nav_panel?slug=chores").await;

    assert!(body.contains(r#"aria-current="page">Chores</a>"#));
    assert!(body.contains("Weekly rotation."));
    assert!(body.contains("Everyone"));
    assert_eq!(body.matches(r#"aria-current="page""#).count(), 1);
}

#[tokio::test]
async fn test_nav_panel_unknown_slug_falls_back() {
    let (status, body) = fetch(sample_app(), "/nav_panel?slug=garage").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">Overview</a>"#));
}

#[tokio::test]
async fn test_nav_panel_without_navigation() {
    let set = FixtureSet::new().with("family", json!({"name": "Nobody"}));
    let (status, body) = fetch(app_from_set(set), "/nav_panel").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("no navigation entries"));
}

#[tokio::test]
async fn test_admin_defaults_to_users() {
    let (status, body) = fetch(sample_app(), "/admin").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">Users</a>"#));
    assert_eq!(table_rows(&body), 25);
    assert!(body.contains(r#"title="Approve""#));
    assert!(body.contains(r#"href="?tab=users&amp;page=2" rel="next""#));
}

#[tokio::test]
async fn test_admin_announcements_tab_keeps_tab_in_links() {
    let (_, body) = fetch(sample_app(), "/admin?tab=announcements&page=2").await;

    assert!(body.contains(r#"aria-current="page">Announcements</a>"#));
    assert_eq!(table_rows(&body), 5);
    assert!(body.contains("Posted By"));
    assert!(body.contains(r#"title="Modify""#));
    assert!(!body.contains(r#"title="Approve""#));
    assert!(body.contains(r#"href="?tab=announcements&amp;page=1" rel="prev""#));
    assert!(body.contains("Page 2 of 2"));
}

#[tokio::test]
async fn test_admin_unknown_tab_falls_back_to_users() {
    let (status, body) = fetch(sample_app(), "/admin?tab=billing").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">Users</a>"#));
    assert!(body.contains("ada.lovelace1@example.com"));
}

#[tokio::test]
async fn test_events_browse_pages_by_four() {
    let (status, body) = fetch(sample_app(), "/events").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(event_cards(&body), 4);
    assert!(body.contains("Spring Potluck"));
    assert!(!body.contains("Farmers Market"));
    assert!(body.contains("Page 1 of 3"));
    assert!(body.contains(r#"href="?tab=browse&amp;page=2" rel="next""#));

    let (_, last) = fetch(sample_app(), "/events?page=3").await;
    assert_eq!(event_cards(&last), 2);
    assert!(last.contains("Coding Workshop"));
}

#[tokio::test]
async fn test_events_tag_filter() {
    let (_, body) = fetch(sample_app(), "/events?tab=browse&tag=music").await;

    assert_eq!(event_cards(&body), 3);
    assert!(body.contains("Jazz in the Park"));
    assert!(body.contains("Open Mic"));
    assert!(body.contains("Summer Concert"));
    assert!(!body.contains("Spring Potluck"));
    assert!(body.contains("Page 1 of 1"));
}

#[tokio::test]
async fn test_events_links_keep_tag() {
    let set = FixtureSet::new().with("events", tagged_events(6, "music"));
    let (_, body) = fetch(app_from_set(set), "/events?tag=music").await;

    assert_eq!(event_cards(&body), 4);
    assert!(body.contains(r#"href="?tab=browse&amp;tag=music&amp;page=2" rel="next""#));

    let set = FixtureSet::new().with("events", tagged_events(6, "music"));
    let (_, second) = fetch(app_from_set(set), "/events?tag=music&page=2").await;
    assert_eq!(event_cards(&second), 2);
    assert!(second.contains(r#"href="?tab=browse&amp;tag=music&amp;page=1" rel="prev""#));
}

#[tokio::test]
async fn test_events_unknown_tag_shows_empty_grid() {
    let (status, body) = fetch(sample_app(), "/events?tag=sports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(event_cards(&body), 0);
    assert!(body.contains("No events match"));
    assert!(body.contains("Page 1 of 1"));
}

#[tokio::test]
async fn test_events_new_tab_renders_request_form() {
    let (status, body) = fetch(sample_app(), "/events?tab=new").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">Add Event</a>"#));
    assert!(body.contains("workbench-form"));
    assert!(body.contains("Submit request"));
    assert_eq!(event_cards(&body), 0);
}

#[tokio::test]
async fn test_form_widget_uses_request_form_fixture() {
    let (status, body) = fetch(sample_app(), "/form").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Event Request"));
    assert!(body.contains("Event title"));
    assert!(body.contains("Submit request"));
}
