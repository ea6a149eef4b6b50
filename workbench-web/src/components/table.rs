//! Data table and pagination controls

use serde_json::Value;
use workbench_core::Pagination;
use workbench_core::records::field_text;

use super::html::escape;
use super::layout::empty_state;

/// Table column bound to a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Record field to display
    pub key: &'static str,
    /// Header text
    pub label: &'static str,
    /// Extra CSS class for header and cells
    pub class: Option<&'static str>,
}

impl Column {
    /// Regular column.
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            class: None,
        }
    }

    /// Column rendered with the `col-narrow` class.
    pub const fn narrow(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            class: Some("col-narrow"),
        }
    }
}

/// Per-row action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    /// Button title
    pub label: &'static str,
    /// Icon markup, an HTML entity
    pub icon: &'static str,
    /// Whether the action is destructive
    pub destructive: bool,
}

/// Renders records as a table. Cell text is escaped.
pub fn data_table(columns: &[Column], rows: &[Value], actions: &[RowAction]) -> String {
    if rows.is_empty() {
        return empty_state("No records to show");
    }

    let header: String = columns
        .iter()
        .map(|column| {
            format!(
                r#"<th class="px-4 py-3 text-left text-workbench-400 font-semibold {}">{}</th>"#,
                column.class.unwrap_or(""),
                column.label
            )
        })
        .collect();
    let action_header = if actions.is_empty() {
        ""
    } else {
        r#"<th class="px-4 py-3 text-right text-workbench-400 font-semibold col-actions">Actions</th>"#
    };

    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = columns
                .iter()
                .map(|column| {
                    format!(
                        r#"<td class="px-4 py-3 border-t border-gray-700 {}">{}</td>"#,
                        column.class.unwrap_or(""),
                        escape(&field_text(row, column.key))
                    )
                })
                .collect();
            let action_cell = if actions.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<td class="px-4 py-3 border-t border-gray-700 text-right col-actions">{}</td>"#,
                    row_actions(actions)
                )
            };
            format!(r#"<tr class="hover:bg-gray-750">{cells}{action_cell}</tr>"#)
        })
        .collect();

    format!(
        r#"<div class="overflow-x-auto">
            <table class="data-table w-full bg-gray-800 border border-gray-700 rounded-lg overflow-hidden">
                <thead class="bg-gray-900"><tr>{header}{action_header}</tr></thead>
                <tbody>{body}</tbody>
            </table>
        </div>"#
    )
}

fn row_actions(actions: &[RowAction]) -> String {
    actions
        .iter()
        .map(|action| {
            let class = if action.destructive {
                "destructive text-red-400 hover:text-red-300"
            } else {
                "text-gray-300 hover:text-white"
            };
            format!(
                r#"<button type="button" class="row-action px-2 {class}" title="{label}" aria-label="{label}">{icon}</button>"#,
                label = action.label,
                icon = action.icon
            )
        })
        .collect()
}

/// Renders prev/next links and the page indicator.
pub fn pagination_controls(pagination: &Pagination) -> String {
    let link = |href: Option<&String>, text: &str, rel: &str| match href {
        Some(href) => format!(
            r#"<a href="{}" rel="{rel}" class="px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 text-white">{text}</a>"#,
            escape(href)
        ),
        None => format!(
            r#"<span class="px-3 py-1 rounded bg-gray-800 text-gray-500 cursor-not-allowed" aria-disabled="true">{text}</span>"#
        ),
    };

    format!(
        r#"<nav class="pagination flex items-center justify-between mt-6 text-sm" aria-label="Pagination">
            {}
            <span class="page-indicator text-gray-400">Page {} of {}</span>
            {}
        </nav>"#,
        link(pagination.prev_href.as_ref(), "&larr; Previous", "prev"),
        pagination.page,
        pagination.pages.max(1),
        link(pagination.next_href.as_ref(), "Next &rarr;", "next")
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const COLUMNS: [Column; 2] = [Column::narrow("id", "ID"), Column::new("name", "Name")];

    #[test]
    fn test_table_renders_escaped_cells() {
        let rows = [json!({"id": 1, "name": "<script>"}), json!({"id": 2})];
        let html = data_table(&COLUMNS, &rows, &[]);

        assert_eq!(html.matches("<tr class=").count(), 2);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("col-actions"));
    }

    #[test]
    fn test_table_with_actions() {
        let rows = [json!({"id": 1, "name": "Ada"})];
        let actions = [RowAction {
            label: "Delete",
            icon: "&#10005;",
            destructive: true,
        }];
        let html = data_table(&COLUMNS, &rows, &actions);

        assert!(html.contains(r#"title="Delete""#));
        assert!(html.contains("destructive"));
        assert!(html.contains("&#10005;"));
    }

    #[test]
    fn test_empty_table() {
        assert!(data_table(&COLUMNS, &[], &[]).contains("No records to show"));
    }

    #[test]
    fn test_pagination_controls() {
        let pagination = Pagination {
            page: 2,
            pages: 3,
            has_prev: true,
            has_next: true,
            prev_href: Some("?tab=users&page=1".to_string()),
            next_href: Some("?tab=users&page=3".to_string()),
        };
        let html = pagination_controls(&pagination);

        assert!(html.contains(r#"href="?tab=users&amp;page=1" rel="prev""#));
        assert!(html.contains(r#"href="?tab=users&amp;page=3" rel="next""#));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn test_pagination_controls_disabled_edges() {
        let pagination = Pagination {
            page: 1,
            pages: 0,
            has_prev: false,
            has_next: false,
            prev_href: None,
            next_href: None,
        };
        let html = pagination_controls(&pagination);

        assert!(!html.contains("href="));
        assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 2);
        assert!(html.contains("Page 1 of 1"));
    }
}
