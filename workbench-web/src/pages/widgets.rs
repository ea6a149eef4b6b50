//! Standalone widget pages - panel, form and modal

use axum::extract::State;
use axum::response::Html;

use crate::components::{forms, layout};
use crate::components::html::escape;
use crate::error::WebError;
use crate::pages::render_page;
use crate::server::AppState;

/// Renders a plain panel
pub async fn panel_page() -> Html<String> {
    let body = r#"<p class="text-gray-300 mb-4">Panels group related content behind a heading and optional actions.</p>
        <p class="text-gray-400 text-sm">Resize the window to check padding and wrapping.</p>"#;

    let content = format!(
        r#"{}

        {}

        {}"#,
        layout::page_header("Panel", Some("Card container with header actions"), None),
        layout::card(
            Some("Panel Title"),
            body,
            Some(&layout::button("Action", "secondary", None))
        ),
        layout::card(None, r#"<p class="text-gray-300">Panel without a header.</p>"#, None)
    );

    render_page("Panel", "panel", &content)
}

/// Renders the request form fixture
///
/// # Errors
/// - `WebError::Fixtures` - Fixtures could not be loaded or the form fixture is malformed
pub async fn form_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let fixtures = state.fixtures.load().await?;
    let spec = fixtures.request_form()?;

    let title = spec.title.as_deref().map(escape);
    let content = format!(
        r#"{}

        <div class="max-w-2xl">
            {}
        </div>"#,
        layout::page_header("Form", Some("Fields rendered from forms.json"), None),
        layout::card(title.as_deref(), &forms::fixture_form(&spec), None)
    );

    Ok(render_page("Form", "form", &content))
}

/// Renders a modal and its trigger
pub async fn modal_page() -> Html<String> {
    let content = format!(
        r#"{}

        {}"#,
        layout::page_header("Modal", Some("Native dialog opened via data-modal-target"), None),
        layout::card(
            Some("Confirmation"),
            &forms::modal(
                "confirm-modal",
                "Open Modal",
                "Confirm action",
                "This dialog closes without changing anything."
            ),
            None
        )
    );

    render_page("Modal", "modal", &content)
}
