//! HTTP server for the widget pages
//!
//! Every request gets a fresh fixture snapshot from the [`FixtureSource`] held
//! in [`AppState`]; nothing is cached between requests.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use workbench_core::config::PaginationConfig;
use workbench_core::{DirectoryFixtures, FixtureSource, WorkbenchConfig};

use crate::error::WebError;
use crate::pages::{
    admin_page, events_page, form_page, index_page, modal_page, nav_panel_page, panel_page,
    table_page,
};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Fixture data-access collaborator
    pub fixtures: Arc<dyn FixtureSource>,
    /// Page sizes per view kind
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Creates state over any fixture source.
    pub fn new(fixtures: Arc<dyn FixtureSource>, pagination: PaginationConfig) -> Self {
        Self {
            fixtures,
            pagination,
        }
    }
}

/// Builds the application router.
///
/// Static assets are served from `static_dir` under `/static`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Widget pages
        .route("/", get(index_page))
        .route("/panel", get(panel_page))
        .route("/form", get(form_page))
        .route("/modal", get(modal_page))
        .route("/table", get(table_page))
        .route("/nav_panel", get(nav_panel_page))
        .route("/admin", get(admin_page))
        .route("/events", get(events_page))
        // Liveness check
        .route("/health", get(health))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound {
        path: uri.path().to_string(),
    }
}

/// Runs the server until Ctrl-C.
///
/// # Errors
/// - `std::io::Error` - Listener could not be bound or the server failed
pub async fn run_server(config: WorkbenchConfig) -> std::io::Result<()> {
    let fixtures = Arc::new(DirectoryFixtures::new(&config.fixtures.fixtures_dir));
    let state = AppState::new(fixtures, config.pagination);
    let app = build_router(state, &config.fixtures.static_dir);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        "Workbench running on http://{} (fixtures: {}, static: {})",
        listener.local_addr()?,
        config.fixtures.fixtures_dir.display(),
        config.fixtures.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Workbench stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
