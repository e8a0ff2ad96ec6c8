// Text input for money and quantities, displayed with locale grouping.
#![allow(non_snake_case)]
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use shared::{FieldMode, FieldState, NumberFormat, NumericField};

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(0);

// Text to render for the external value. A draft only counts while it was
// made under the format currently configured.
fn shown_text(field: &NumericField, format: NumberFormat, external: Option<f64>) -> String {
    if *field.format() == format {
        field.display(external)
    } else {
        format.format_value(external)
    }
}

// True when the form holds a value this field did not report, so the draft has to go.
fn needs_sync(field: &NumericField, external: Option<f64>) -> bool {
    matches!(field.mode(), FieldMode::Editing { .. })
        && field.state(external) == FieldState::Idle
}

// The DOM already holds what the user typed. When the cleaned text equals the
// previous render no attribute patch is sent, so rejected characters would
// linger; this script writes the cleaned text back.
fn restore_script(field_id: usize, text: &str) -> Option<String> {
    let literal = serde_json::to_string(text).ok()?;
    Some(format!(
        "const el = document.querySelector('[data-numeric-field=\"{field_id}\"]'); if (el && el.value !== {literal}) {{ el.value = {literal}; }}"
    ))
}

/// Controlled numeric input.
///
/// The parent owns `value`; every edit reports the parsed number through
/// `onchange` and the parent is expected to feed it back in. While the value
/// coming back is the one this field reported, the text as typed is kept (so
/// `"1.000,"` is not reformatted to `"1.000"` mid-keystroke). Any other value
/// is rendered fresh from the number.
#[component]
pub fn NumericTextField(
    value: ReadOnlySignal<Option<f64>>,
    onchange: EventHandler<Option<f64>>,
    #[props(default = "0".to_string(), into)] placeholder: String,
    #[props(default)] format: NumberFormat,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut field = use_signal(|| NumericField::new(format));
    let field_id = use_hook(|| NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed));

    // An external update ends the edit in progress.
    use_effect(move || {
        let external = value();
        if needs_sync(&field.peek(), external) {
            field.write().sync(external);
        }
    });

    let text = shown_text(&field.read(), format, value());

    rsx! {
        input {
            ..attributes,
            "data-numeric-field": "{field_id}",
            r#type: "text",
            inputmode: "decimal",
            autocomplete: "off",
            value: "{text}",
            placeholder: "{placeholder}",
            oninput: move |evt: FormEvent| {
                let raw = evt.value();
                let (next, shown) = {
                    let mut field = field.write();
                    field.set_format(format);
                    let next = field.edit(&raw);
                    (next, field.display(next))
                };
                tracing::debug!("Numeric field edit {:?} -> {:?}", raw, next);
                if shown != raw {
                    if let Some(script) = restore_script(field_id, &shown) {
                        let _ = eval(&script);
                    }
                }
                onchange.call(next);
            },
        }
    }
}
