//! Nav panel page - slug-selected navigation tabs

use axum::extract::State;
use axum::response::Html;
use workbench_core::NavItem;
use workbench_core::records::value_text;
use workbench_core::tabs::{nav_tabs, resolve_slug};

use crate::components::html::escape;
use crate::components::layout;
use crate::error::WebError;
use crate::pages::render_page;
use crate::query::ViewQuery;
use crate::server::AppState;

/// Renders the navigation panel for the selected slug
///
/// An unknown or missing slug selects the first navigation item.
///
/// # Errors
/// - `WebError::Fixtures` - Fixtures could not be loaded or navigation entries are malformed
pub async fn nav_panel_page(
    State(state): State<AppState>,
    query: ViewQuery,
) -> Result<Html<String>, WebError> {
    let fixtures = state.fixtures.load().await?;
    let items = fixtures.navigation()?;

    let active = resolve_slug(&items, query.slug());
    if let (Some(requested), Some(item)) = (query.slug(), active)
        && item.slug != requested
    {
        tracing::debug!("Unknown slug {requested}, showing {}", item.slug);
    }

    let tabs = nav_tabs(&items, active.map(|item| item.slug.as_str()));
    let panel = match active {
        Some(item) => layout::card(Some(&escape(&item.label)), &item_details(item), None),
        None => layout::empty_state("The family fixture has no navigation entries"),
    };

    let content = format!(
        r#"{}

        {}

        {}"#,
        layout::page_header("Nav Panel", Some("Tabs driven by the slug parameter"), None),
        layout::tab_strip(&tabs),
        panel
    );

    Ok(render_page("Nav Panel", "nav_panel", &content))
}

/// Renders the non-navigation fields of an item as a definition list.
fn item_details(item: &NavItem) -> String {
    if item.extra.is_empty() {
        return layout::empty_state("No details for this section");
    }

    let rows: String = item
        .extra
        .iter()
        .map(|(key, value)| {
            format!(
                r#"<div class="py-2 border-t border-gray-700 first:border-t-0">
                    <dt class="text-xs uppercase tracking-wide text-gray-500">{}</dt>
                    <dd class="text-gray-200">{}</dd>
                </div>"#,
                escape(key),
                escape(&value_text(value))
            )
        })
        .collect();

    format!(r#"<dl class="nav-details">{rows}</dl>"#)
}
