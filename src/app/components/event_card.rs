//! Card summarising one event in a listing.

use dioxus::prelude::*;

use crate::app::query::{category_label, format_event_date, EventRecord};

#[component]
pub fn EventCard(event: EventRecord) -> Element {
    let place = match (&event.venue, &event.city) {
        (Some(venue), Some(city)) => format!("{venue}, {city}"),
        (Some(one), None) | (None, Some(one)) => one.clone(),
        (None, None) => String::new(),
    };
    let date = event.date.as_deref().map(format_event_date);
    let category = event
        .category
        .as_deref()
        .map(|c| category_label(c).to_string());

    rsx! {
        article { class: "card p-4",
            if let Some(image) = &event.image {
                img { src: "{image}", alt: "{event.name}", class: "mb-3" }
            }
            header { class: "flex items-center gap-2 mb-2",
                span { class: "font-semibold text-lg", "{event.name}" }
                if let Some(category) = category {
                    span { class: "badge badge-secondary", "{category}" }
                }
            }
            if let Some(date) = date {
                p { class: "text-sm", "{date}" }
            }
            if !place.is_empty() {
                p { class: "text-sm text-gray-400", "{place}" }
            }
        }
    }
}
