//! Catch-all page for unknown routes.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Page not found".to_string(),
            nav_active: String::new(),

            section { class: "card p-6",
                h1 { class: "text-2xl font-bold mb-4", "404" }
                p { class: "mb-6", "Nothing lives at " code { "{path}" } "." }
                a { class: "btn btn-primary", href: "/", "Back to home" }
            }
        }
    }
}
