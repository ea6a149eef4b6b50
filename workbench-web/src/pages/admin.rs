//! Admin page - tabbed tables with per-row actions

use axum::extract::State;
use axum::response::Html;
use workbench_core::{AdminTab, LinkQuery, paginate};

use crate::components::{Column, RowAction, data_table, layout, pagination_controls};
use crate::error::WebError;
use crate::pages::render_page;
use crate::query::ViewQuery;
use crate::server::AppState;

const USER_COLUMNS: &[Column] = &[
    Column::narrow("id", "ID"),
    Column::new("name", "Name"),
    Column::new("email", "Email"),
    Column::narrow("role", "Role"),
];

const USER_ACTIONS: &[RowAction] = &[
    RowAction {
        label: "Approve",
        icon: "&#10003;",
        destructive: false,
    },
    RowAction {
        label: "Details",
        icon: "&#8505;",
        destructive: false,
    },
    RowAction {
        label: "Delete",
        icon: "&#10005;",
        destructive: true,
    },
];

const ANNOUNCEMENT_COLUMNS: &[Column] = &[
    Column::narrow("id", "ID"),
    Column::new("title", "Title"),
    Column::new("username", "Posted By"),
];

const ANNOUNCEMENT_ACTIONS: &[RowAction] = &[
    RowAction {
        label: "Modify",
        icon: "&#9998;",
        destructive: false,
    },
    RowAction {
        label: "Delete",
        icon: "&#10005;",
        destructive: true,
    },
];

/// Columns and row actions shown for a tab.
fn tab_layout(tab: AdminTab) -> (&'static [Column], &'static [RowAction]) {
    match tab {
        AdminTab::Users => (USER_COLUMNS, USER_ACTIONS),
        AdminTab::Announcements => (ANNOUNCEMENT_COLUMNS, ANNOUNCEMENT_ACTIONS),
    }
}

/// Renders the admin tables
///
/// Unknown `tab` values fall back to the users tab.
///
/// # Errors
/// - `WebError::Fixtures` - Fixtures could not be loaded or the tab's fixture is not an array
pub async fn admin_page(
    State(state): State<AppState>,
    query: ViewQuery,
) -> Result<Html<String>, WebError> {
    let fixtures = state.fixtures.load().await?;
    let tab = AdminTab::parse(query.tab());

    let rows = match tab {
        AdminTab::Users => fixtures.users()?,
        AdminTab::Announcements => fixtures.announcements()?,
    };
    let (columns, actions) = tab_layout(tab);

    let page = paginate(rows, query.page_number(), state.pagination.table_page_size);
    let pagination = page
        .info
        .with_links(&LinkQuery::new().with("tab", tab.slug()));

    let content = format!(
        r#"{}

        {}

        {}"#,
        layout::page_header("Admin", Some("Manage users and announcements"), None),
        layout::tab_strip(&tab.tabs()),
        layout::card(
            Some(tab.label()),
            &format!(
                "{}{}",
                data_table(columns, page.items, actions),
                pagination_controls(&pagination)
            ),
            None
        )
    );

    Ok(render_page("Admin", "admin", &content))
}
