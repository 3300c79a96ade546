//! Event listing page component.
//!
//! Lists events through the event query contract with an optional category filter.

use dioxus::prelude::*;

use crate::app::components::{EventCard, Layout, Loader};
use crate::app::query::{use_events, CATEGORIES};

/// Event listing page component.
#[component]
pub fn Events() -> Element {
    let mut category = use_signal(|| None::<String>);
    let events = use_events(category);

    let selected = category().unwrap_or_default();

    let content = if events.is_loading {
        rsx! {
            Loader { label: "Loading events...".to_string() }
        }
    } else {
        let list = events.data.unwrap_or_default();
        if list.is_empty() {
            rsx! {
                div { class: "card p-6", "No events found." }
            }
        } else {
            rsx! {
                div { class: "event-grid",
                    for event in list {
                        EventCard { key: "{event.id}", event: event.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Events".to_string(),
            nav_active: "events".to_string(),

            h1 { class: "text-2xl font-bold mb-6", "Events" }

            label { class: "mb-4",
                "Category"
                select {
                    value: "{selected}",
                    onchange: move |evt| {
                        let value = evt.value();
                        category.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", "All categories" }
                    for (id, label) in CATEGORIES.iter().copied() {
                        option { key: "{id}", value: id, selected: selected == id, "{label}" }
                    }
                }
            }

            section { id: "events",
                {content}
            }
        }
    }
}
