//! Full page handlers using the component system
//!
//! Each page loads a fresh fixture snapshot, composes components and wraps
//! the result in the shared base layout.

pub mod admin;
pub mod events;
pub mod index;
pub mod nav_panel;
pub mod table;
pub mod widgets;

use axum::response::Html;

use crate::components::layout;

// Re-export page handlers
pub use admin::admin_page;
pub use events::events_page;
pub use index::index_page;
pub use nav_panel::nav_panel_page;
pub use table::table_page;
pub use widgets::{form_page, modal_page, panel_page};

/// Renders a complete HTML document around `content`.
pub fn render_document(title: &str, active_nav: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Workbench</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'workbench': {{
                                    50: '#eff6ff',
                                    300: '#93c5fd',
                                    400: '#60b2ff',
                                    500: '#4a9eff',
                                    600: '#3a8edf',
                                    900: '#0a0a0a'
                                }},
                                'gray': {{
                                    750: '#2d3748'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <script src="/static/js/ui.js" defer></script>
            <style>
                .col-narrow {{ width: 1%; white-space: nowrap; }}
                .col-actions {{ width: 1%; white-space: nowrap; }}
                dialog::backdrop {{ background: rgba(0, 0, 0, 0.6); }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {}

            <main class="max-w-7xl mx-auto px-4 py-8">
                {}
            </main>
        </body>
        </html>"#,
        title,
        layout::nav_bar(active_nav),
        content
    )
}

/// Helper function to render a page with the base template
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    Html(render_document(title, active_nav, content))
}
