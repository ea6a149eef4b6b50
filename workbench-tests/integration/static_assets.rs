//! Static asset serving

use axum::http::StatusCode;

use crate::support::{fetch, sample_app};

#[tokio::test]
async fn test_modal_script_is_served() {
    let (status, body) = fetch(sample_app(), "/static/js/ui.js").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-modal-target"));
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let (status, _) = fetch(sample_app(), "/static/js/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
