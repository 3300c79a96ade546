//! Landing page component.

use dioxus::prelude::*;

use crate::app::components::{EventCard, Layout, Loader};
use crate::app::query::use_events;

/// Number of upcoming events previewed on the landing page
const PREVIEW_COUNT: usize = 3;

/// Landing page component.
#[component]
pub fn Home() -> Element {
    let all_categories = use_signal(|| None::<String>);
    let events = use_events(all_categories);

    let preview = if events.is_loading {
        rsx! {
            Loader {}
        }
    } else {
        let upcoming: Vec<_> = events
            .data
            .unwrap_or_default()
            .into_iter()
            .take(PREVIEW_COUNT)
            .collect();
        rsx! {
            div { class: "event-grid",
                for event in upcoming {
                    EventCard { key: "{event.id}", event: event.clone() }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            section { class: "mb-8",
                h1 { class: "text-3xl font-bold mb-2", "Find your next event" }
                p { class: "text-muted mb-4", "Concerts, matches, shows and more." }
                div { class: "controls",
                    a { class: "btn btn-primary", href: "/events", "Browse events" }
                    a { class: "btn btn-ghost", href: "/events/new", "Host an event" }
                }
            }

            section { id: "upcoming",
                h2 { class: "text-xl font-semibold mb-4", "Upcoming" }
                {preview}
            }
        }
    }
}
