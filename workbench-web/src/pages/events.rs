//! Events page - tag-filtered card grid and submission form

use axum::extract::State;
use axum::response::Html;
use workbench_core::records::{all_tags, filter_by_tag};
use workbench_core::{EventsTab, LinkQuery, paginate};

use crate::components::{card_grid, fixture_form, layout, pagination_controls, tag_filter};
use crate::error::WebError;
use crate::pages::render_page;
use crate::query::ViewQuery;
use crate::server::AppState;

/// Renders the events browser or the new event form
///
/// The browse tab filters by `tag` and pages through matching events; page
/// links keep the active tag. Unknown `tab` values fall back to browse.
///
/// # Errors
/// - `WebError::Fixtures` - Fixtures could not be loaded or are malformed
pub async fn events_page(
    State(state): State<AppState>,
    query: ViewQuery,
) -> Result<Html<String>, WebError> {
    let fixtures = state.fixtures.load().await?;
    let tab = EventsTab::parse(query.tab());

    let body = match tab {
        EventsTab::Browse => {
            let events = fixtures.events()?;
            let tag = query.tag();
            let filtered = filter_by_tag(events, tag);

            let page = paginate(&filtered, query.page_number(), state.pagination.grid_page_size);
            let pagination = page.info.with_links(
                &LinkQuery::new()
                    .with("tab", tab.slug())
                    .with_optional("tag", tag),
            );
            tracing::debug!(
                "Events page {}/{}, tag={:?}, {} of {} events match",
                pagination.page,
                pagination.pages,
                tag,
                filtered.len(),
                events.len()
            );

            format!(
                "{}{}{}",
                tag_filter(&all_tags(events), tag),
                card_grid(page.items),
                pagination_controls(&pagination)
            )
        }
        EventsTab::New => {
            let spec = fixtures.request_form()?;
            layout::card(Some("New Event"), &fixture_form(&spec), None)
        }
    };

    let content = format!(
        r#"{}

        {}

        {}"#,
        layout::page_header("Events", Some("Browse upcoming events or propose one"), None),
        layout::tab_strip(&tab.tabs()),
        body
    );

    Ok(render_page("Events", "events", &content))
}
