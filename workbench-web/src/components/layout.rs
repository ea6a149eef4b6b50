//! Layout components - headers, cards, navigation, tab strips

use workbench_core::Tab;

use super::html::escape;

/// Top-level pages listed in the navigation bar as `(href, label, key)`.
pub const NAV_PAGES: [(&str, &str, &str); 8] = [
    ("/", "Index", "index"),
    ("/panel", "Panel", "panel"),
    ("/form", "Form", "form"),
    ("/modal", "Modal", "modal"),
    ("/table", "Table", "table"),
    ("/nav_panel", "Nav Panel", "nav_panel"),
    ("/admin", "Admin", "admin"),
    ("/events", "Events", "events"),
];

/// Renders a page header with title and optional subtitle.
///
/// Arguments are trusted markup; escape fixture text before passing it in.
pub fn page_header(title: &str, subtitle: Option<&str>, actions: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    let actions_html = actions
        .map(|a| format!(r#"<div class="flex items-center space-x-4">{a}</div>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-start justify-between mb-8">
            <div>
                <h1 class="text-3xl font-bold text-white">{title}</h1>
                {subtitle_html}
            </div>
            {actions_html}
        </div>"#
    )
}

/// Renders a card container with optional header and actions.
pub fn card(title: Option<&str>, content: &str, actions: Option<&str>) -> String {
    let header_html = title
        .map(|t| {
            let actions_html = actions
                .map(|a| format!(r#"<div class="flex items-center space-x-2">{a}</div>"#))
                .unwrap_or_default();

            format!(
                r#"<div class="flex items-center justify-between mb-6">
                <h3 class="text-lg font-semibold text-white">{t}</h3>
                {actions_html}
            </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar, highlighting `active_page`.
pub fn nav_bar(active_page: &str) -> String {
    let links: String = NAV_PAGES
        .iter()
        .map(|(href, label, key)| {
            let active_class = if *key == active_page {
                "nav-active text-workbench-500 bg-workbench-500 bg-opacity-10"
            } else {
                "text-gray-300 hover:text-workbench-500 hover:bg-gray-700"
            };
            format!(
                r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
            )
        })
        .collect();

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center h-16 space-x-8">
                    <div class="text-2xl font-bold text-workbench-500">Workbench</div>
                    <div class="hidden md:flex space-x-4">
                        {links}
                    </div>
                </div>
            </div>
        </nav>"#
    )
}

/// Renders a tab strip. Labels and hrefs are escaped.
pub fn tab_strip(tabs: &[Tab]) -> String {
    let items: String = tabs
        .iter()
        .map(|tab| {
            let (class, current) = if tab.active {
                (
                    "border-workbench-500 text-workbench-400",
                    r#" aria-current="page""#,
                )
            } else {
                (
                    "border-transparent text-gray-400 hover:text-gray-200 hover:border-gray-500",
                    "",
                )
            };
            format!(
                r#"<a href="{}" class="tab px-4 py-2 border-b-2 text-sm font-medium {class}"{current}>{}</a>"#,
                escape(&tab.href),
                escape(&tab.label)
            )
        })
        .collect();

    format!(r#"<div class="tabs flex space-x-2 border-b border-gray-700 mb-6">{items}</div>"#)
}

/// Renders a grid container for responsive layouts.
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<div class="grid {columns} gap-6">{content}</div>"#)
}

/// Renders a button with Tailwind styling.
///
/// Variants: primary, secondary, danger, ghost.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-workbench-500 hover:bg-workbench-600 text-white focus:ring-workbench-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        "danger" => "bg-red-600 hover:bg-red-700 text-white focus:ring-red-500",
        "ghost" => "text-gray-300 hover:text-white hover:bg-gray-700 focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Centered placeholder for views with nothing to show.
pub fn empty_state(message: &str) -> String {
    format!(r#"<div class="text-center py-8 text-gray-400">{message}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_marks_active_page() {
        let html = nav_bar("table");
        assert!(html.contains(r#"href="/table" class="px-3 py-2 rounded-md text-sm font-medium transition-colors nav-active"#));
        assert_eq!(html.matches("nav-active").count(), 1);
    }

    #[test]
    fn test_tab_strip_escapes_labels() {
        let tabs = vec![
            Tab::new("Users", "?tab=users".to_string(), true),
            Tab::new("<b>News</b>", "?tab=news&x=1".to_string(), false),
        ];
        let html = tab_strip(&tabs);

        assert!(html.contains(r#"aria-current="page">Users</a>"#));
        assert!(html.contains("&lt;b&gt;News&lt;/b&gt;"));
        assert!(html.contains("?tab=news&amp;x=1"));
    }
}
