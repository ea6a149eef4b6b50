//! Error responses for page handlers

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use workbench_core::WorkbenchError;

use crate::components::html::escape;
use crate::pages::render_document;

/// Failures surfaced to the browser as an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Fixture loading or decoding failed
    #[error(transparent)]
    Fixtures(#[from] WorkbenchError),

    /// No route matched the request path
    #[error("No page at {path}")]
    NotFound {
        /// Request path that had no handler
        path: String,
    },
}

impl WebError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Fixtures(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            WebError::Fixtures(e) => {
                tracing::error!("Fixture failure while rendering page: {e}");
                format!("{}: {e}", e.user_message())
            }
            WebError::NotFound { path } => {
                tracing::debug!("No route for {path}");
                self.to_string()
            }
        };

        let content = format!(
            r#"<div class="text-center py-12">
                <div class="text-6xl font-bold text-gray-600 mb-4">{}</div>
                <p class="text-gray-300 mb-8">{}</p>
                <a href="/" class="text-workbench-400 hover:text-workbench-300">Back to the workbench</a>
            </div>"#,
            status.as_u16(),
            escape(&detail)
        );

        (status, Html(render_document("Error", "", &content))).into_response()
    }
}
