//! Card grid and tag filter components for event listings

use serde_json::Value;
use workbench_core::records::{event_tags, field_text};

use super::html::escape;
use super::layout::{empty_state, grid};

/// Renders one event card. Fixture text is escaped.
pub fn event_card(event: &Value) -> String {
    let title = field_text(event, "title");
    let title = if title.is_empty() {
        field_text(event, "name")
    } else {
        title
    };
    let date = field_text(event, "date");
    let location = field_text(event, "location");
    let description = field_text(event, "description");

    let meta: Vec<String> = [date, location]
        .into_iter()
        .filter(|text| !text.is_empty())
        .map(|text| escape(&text))
        .collect();
    let meta_html = if meta.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-xs text-gray-500 mb-2">{}</p>"#,
            meta.join(" &middot; ")
        )
    };

    let tags_html: String = event_tags(event)
        .into_iter()
        .map(|tag| {
            format!(
                r#"<span class="tag inline-block px-2 py-0.5 mr-1 rounded bg-gray-700 text-xs text-gray-300">{}</span>"#,
                escape(tag)
            )
        })
        .collect();

    format!(
        r#"<article class="event-card bg-gray-800 border border-gray-700 rounded-lg p-5">
            <h4 class="text-white font-semibold mb-1">{}</h4>
            {meta_html}
            <p class="text-gray-400 text-sm mb-3">{}</p>
            <div>{tags_html}</div>
        </article>"#,
        escape(&title),
        escape(&description)
    )
}

/// Renders events as a responsive card grid.
pub fn card_grid(events: &[&Value]) -> String {
    if events.is_empty() {
        return empty_state("No events match this filter");
    }
    let cards: String = events.iter().map(|event| event_card(event)).collect();
    grid("grid-cols-1 md:grid-cols-2", &cards)
}

/// Renders tag filter chips linking to `?tab=browse&tag=<tag>`.
///
/// An "All" chip clears the filter; the chip for `active` is highlighted.
pub fn tag_filter(tags: &[String], active: Option<&str>) -> String {
    let chip = |href: String, label: &str, selected: bool| {
        let class = if selected {
            "bg-workbench-500 text-white"
        } else {
            "bg-gray-700 text-gray-300 hover:bg-gray-600"
        };
        format!(
            r#"<a href="{}" class="tag-chip px-3 py-1 rounded-full text-sm {class}">{}</a>"#,
            escape(&href),
            escape(label)
        )
    };

    let mut chips = vec![chip("?tab=browse".to_string(), "All", active.is_none())];
    chips.extend(tags.iter().map(|tag| {
        chip(
            format!("?tab=browse&tag={}", urlencoding::encode(tag)),
            tag,
            active == Some(tag.as_str()),
        )
    }));

    format!(
        r#"<div class="tag-filter flex flex-wrap gap-2 mb-6">{}</div>"#,
        chips.join("")
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_event_card_contents() {
        let event = json!({
            "title": "Jazz & Blues",
            "date": "2026-05-01",
            "location": "Park",
            "description": "Evening set",
            "tags": ["music", "outdoor"]
        });
        let html = event_card(&event);

        assert!(html.contains("Jazz &amp; Blues"));
        assert!(html.contains("2026-05-01 &middot; Park"));
        assert_eq!(html.matches(r#"class="tag "#).count(), 2);
    }

    #[test]
    fn test_event_card_falls_back_to_name() {
        let html = event_card(&json!({"name": "Potluck"}));
        assert!(html.contains("Potluck"));
    }

    #[test]
    fn test_tag_filter_highlights_active() {
        let tags = vec!["food".to_string(), "live music".to_string()];
        let html = tag_filter(&tags, Some("live music"));

        assert!(html.contains(r#"href="?tab=browse&amp;tag=live%20music" class="tag-chip px-3 py-1 rounded-full text-sm bg-workbench-500"#));
        assert!(html.contains(r#"href="?tab=browse" class="tag-chip px-3 py-1 rounded-full text-sm bg-gray-700"#));
    }

    #[test]
    fn test_empty_grid() {
        assert!(card_grid(&[]).contains("No events match"));
    }
}
