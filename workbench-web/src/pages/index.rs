//! Index page - entry point listing every widget page

use axum::response::Html;

use crate::components::layout;
use crate::pages::render_page;

const WIDGETS: [(&str, &str, &str); 7] = [
    ("/panel", "Panel", "Plain content panel"),
    ("/form", "Form", "Inputs rendered from the request form fixture"),
    ("/modal", "Modal", "Dialog opened from a trigger button"),
    ("/table", "Table", "Paginated user table"),
    ("/nav_panel", "Nav Panel", "Slug-driven navigation tabs"),
    ("/admin", "Admin", "Tabbed tables with row actions"),
    ("/events", "Events", "Tag-filtered card grid and submission form"),
];

/// Renders the workbench index
pub async fn index_page() -> Html<String> {
    let tiles: String = WIDGETS
        .iter()
        .map(|(href, title, blurb)| {
            format!(
                r#"<a href="{href}" class="group bg-gray-800 border border-gray-700 rounded-lg p-6 hover:border-workbench-500 transition-colors">
                <h3 class="text-white font-semibold mb-2">{title}</h3>
                <p class="text-gray-400 text-sm">{blurb}</p>
            </a>"#
            )
        })
        .collect();

    let content = format!(
        r#"{}

        {}"#,
        layout::page_header(
            "UI Workbench",
            Some("Widgets rendered from static JSON fixtures"),
            None
        ),
        layout::grid("grid-cols-1 md:grid-cols-3", &tiles)
    );

    render_page("Index", "index", &content)
}
