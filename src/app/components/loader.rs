//! Busy indicator shown while queries or the session are loading.

use dioxus::prelude::*;

#[component]
pub fn Loader(
    #[props(default = "Loading...".to_string())]
    label: String,
) -> Element {
    rsx! {
        div { class: "card p-6", aria_busy: "true", "{label}" }
    }
}
