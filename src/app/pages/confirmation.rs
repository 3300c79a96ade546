//! Shown after the wizard submits a new event.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn Confirmation() -> Element {
    rsx! {
        Layout {
            title: "Event created".to_string(),
            nav_active: "create".to_string(),

            section { class: "card p-6",
                h1 { class: "text-2xl font-bold mb-4", "Your event is live" }
                p { class: "mb-6", "Ticket sales open as soon as the listing is approved." }
                div { class: "controls",
                    a { class: "btn btn-primary", href: "/events", "Browse events" }
                    a { class: "btn btn-ghost", href: "/events/new", "Create another" }
                }
            }
        }
    }
}
