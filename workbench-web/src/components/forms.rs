//! Form and modal components

use workbench_core::{FormField, FormSpec};

use super::html::escape;
use super::layout::{button, empty_state};

const FIELD_CLASSES: &str = "w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-workbench-500 focus:border-transparent";

/// Renders a form described by a fixture.
///
/// The form posts nowhere; it exists to inspect field styling.
pub fn fixture_form(spec: &FormSpec) -> String {
    if spec.fields.is_empty() {
        return empty_state("The form fixture has no fields");
    }

    let description_html = spec
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="text-gray-400 text-sm mb-4">{}</p>"#, escape(d)))
        .unwrap_or_default();

    let fields: String = spec.fields.iter().map(form_field).collect();
    let submit = button(
        &escape(spec.submit_label.as_deref().unwrap_or("Submit")),
        "primary",
        Some(r#"type="submit""#),
    );

    format!(
        r#"<form class="workbench-form space-y-4" onsubmit="return false;">
            {description_html}
            {fields}
            <div class="pt-2">{submit}</div>
        </form>"#
    )
}

fn form_field(field: &FormField) -> String {
    let name = escape(&field.name);
    let label = escape(field.label.as_deref().unwrap_or(&field.name));
    let placeholder = escape(field.placeholder.as_deref().unwrap_or(""));
    let required = if field.required { " required" } else { "" };
    let marker = if field.required {
        r#" <span class="text-red-400">*</span>"#
    } else {
        ""
    };

    let control = match field.kind.as_str() {
        "textarea" => format!(
            r#"<textarea id="{name}" name="{name}" rows="4" placeholder="{placeholder}" class="{FIELD_CLASSES}"{required}></textarea>"#
        ),
        "select" => {
            let options: String = field
                .options
                .iter()
                .map(|option| {
                    let option = escape(option);
                    format!(r#"<option value="{option}">{option}</option>"#)
                })
                .collect();
            format!(
                r#"<select id="{name}" name="{name}" class="{FIELD_CLASSES}"{required}>{options}</select>"#
            )
        }
        "checkbox" => {
            return format!(
                r#"<label class="flex items-center space-x-2 text-gray-300">
                    <input type="checkbox" id="{name}" name="{name}"{required} />
                    <span>{label}{marker}</span>
                </label>"#
            );
        }
        kind => format!(
            r#"<input type="{}" id="{name}" name="{name}" placeholder="{placeholder}" class="{FIELD_CLASSES}"{required} />"#,
            escape(kind)
        ),
    };

    format!(
        r#"<div class="form-field">
            <label for="{name}" class="block text-sm font-medium text-gray-300 mb-1">{label}{marker}</label>
            {control}
        </div>"#
    )
}

/// Renders a `<dialog>` plus the button that opens it.
///
/// `static/js/ui.js` wires any element with `data-modal-target` to
/// `showModal()` on the dialog with that id.
pub fn modal(id: &str, trigger_label: &str, title: &str, body: &str) -> String {
    let trigger = button(
        trigger_label,
        "primary",
        Some(&format!(r#"type="button" data-modal-target="{id}""#)),
    );

    format!(
        r#"{trigger}
        <dialog id="{id}" class="modal bg-gray-800 text-white border border-gray-700 rounded-lg p-0 backdrop:bg-black backdrop:bg-opacity-60">
            <form method="dialog" class="p-6 w-96">
                <h3 class="text-lg font-semibold mb-4">{title}</h3>
                <div class="text-gray-300 mb-6">{body}</div>
                <div class="flex justify-end space-x-2">
                    {}
                    {}
                </div>
            </form>
        </dialog>"#,
        button("Cancel", "ghost", Some(r#"value="cancel""#)),
        button("Confirm", "primary", Some(r#"value="confirm""#))
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn spec() -> FormSpec {
        serde_json::from_value(json!({
            "title": "Request",
            "fields": [
                {"name": "email", "label": "Email", "type": "email", "required": true},
                {"name": "kind", "type": "select", "options": ["Bug", "Feature"]},
                {"name": "details", "type": "textarea", "placeholder": "Tell us <more>"},
                {"name": "subscribe", "label": "Subscribe", "type": "checkbox"}
            ],
            "submit_label": "Send"
        }))
        .unwrap()
    }

    #[test]
    fn test_fixture_form_fields() {
        let html = fixture_form(&spec());

        assert!(html.contains(r#"<input type="email" id="email" name="email""#));
        assert!(html.contains(r#"<option value="Bug">Bug</option>"#));
        assert!(html.contains("<textarea"));
        assert!(html.contains("Tell us &lt;more&gt;"));
        assert!(html.contains(r#"type="checkbox" id="subscribe""#));
        assert!(html.contains(">Send</button>"));
        assert_eq!(html.matches(" required").count(), 1);
    }

    #[test]
    fn test_empty_form() {
        assert!(fixture_form(&FormSpec::default()).contains("no fields"));
    }

    #[test]
    fn test_modal_trigger_targets_dialog() {
        let html = modal("confirm-delete", "Open", "Delete?", "Really?");
        assert!(html.contains(r#"data-modal-target="confirm-delete""#));
        assert!(html.contains(r#"<dialog id="confirm-delete""#));
    }
}
