//! Labelled input used by the wizard steps.

use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        label {
            "{label}"
            input {
                r#type: "{kind}",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !hint.is_empty() {
                small { class: "field-hint", "{hint}" }
            }
        }
    }
}
