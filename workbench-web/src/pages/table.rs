//! Table page - paginated user list

use axum::extract::State;
use axum::response::Html;
use workbench_core::{LinkQuery, paginate};

use crate::components::{Column, data_table, layout, pagination_controls};
use crate::error::WebError;
use crate::pages::render_page;
use crate::query::ViewQuery;
use crate::server::AppState;

/// Columns of the user table.
pub const USER_COLUMNS: [Column; 5] = [
    Column::narrow("id", "ID"),
    Column::new("name", "Name"),
    Column::new("email", "Email"),
    Column::narrow("role", "Role"),
    Column::narrow("status", "Status"),
];

/// Renders the paginated user table
///
/// # Errors
/// - `WebError::Fixtures` - Fixtures could not be loaded or `users` is not an array
pub async fn table_page(
    State(state): State<AppState>,
    query: ViewQuery,
) -> Result<Html<String>, WebError> {
    let fixtures = state.fixtures.load().await?;
    let users = fixtures.users()?;

    let page = paginate(users, query.page_number(), state.pagination.table_page_size);
    let pagination = page.info.with_links(&LinkQuery::new());
    tracing::debug!(
        "Table page {}/{} with {} rows",
        pagination.page,
        pagination.pages,
        page.items.len()
    );

    let content = format!(
        r#"{}

        {}"#,
        layout::page_header("Table", Some(&format!("{} users", users.len())), None),
        layout::card(
            None,
            &format!(
                "{}{}",
                data_table(&USER_COLUMNS, page.items, &[]),
                pagination_controls(&pagination)
            ),
            None
        )
    );

    Ok(render_page("Table", "table", &content))
}
