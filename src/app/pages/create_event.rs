//! Event creation wizard.
//!
//! Seven steps over a single [`FormData`] signal. "Next" stays disabled until
//! the current step passes [`validate_step`]; submission re-checks every step
//! and jumps back to the first one that fails.

use dioxus::prelude::*;
use event_wizard::{
    first_invalid_step, validate_coordinates, validate_step, validate_times, FormData,
    WizardStep,
};
use tracing::{info, warn};

use crate::app::components::{Layout, TextField};
use crate::app::query::CATEGORIES;
use crate::app::Route;

/// Ticket types an organizer can offer
const TICKET_TYPES: [&str; 3] = ["VIP", "Standard", "Early Bird"];

/// Apply an edit to the shared form snapshot.
fn edit(mut form: Signal<FormData>, apply: impl FnOnce(&mut FormData)) {
    apply(&mut *form.write());
}

/// Text to show in an input bound to an optional field.
fn shown(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Empty input clears the field.
fn entered(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Event creation page. Sign-in is enforced by the route table.
#[component]
pub fn CreateEvent() -> Element {
    rsx! {
        Layout {
            title: "Create event".to_string(),
            nav_active: "create".to_string(),

            h1 { class: "text-2xl font-bold mb-6", "Create an event" }

            Wizard {}
        }
    }
}

#[component]
fn Wizard() -> Element {
    let form = use_signal(FormData::default);
    let mut step = use_signal(|| WizardStep::Details);
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| None::<String>);
    let nav = navigator();

    let current = step();
    let can_advance = validate_step(current.number(), &form.read());
    let busy = submitting();
    let progress: Vec<(i64, String, &'static str)> = WizardStep::ALL
        .into_iter()
        .map(|s| {
            let class = if s == current {
                "active"
            } else if s < current {
                "done"
            } else {
                ""
            };
            (s.number(), format!("{}. {}", s.number(), s.title()), class)
        })
        .collect();
    let heading = current.title();

    let submit = move |_: MouseEvent| {
        let snapshot = form();
        if let Some(failed) = first_invalid_step(&snapshot) {
            warn!(%failed, "submission blocked by incomplete step");
            step.set(failed);
            return;
        }

        submitting.set(true);
        submit_error.set(None);
        spawn(async move {
            match crate::app::api::post_json("/api/events", &snapshot).await {
                Ok(()) => {
                    info!("event submitted");
                    let _ = nav.push(Route::Confirmation {});
                }
                Err(e) => {
                    warn!("Failed to submit event: {}", e);
                    submit_error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let body = match current {
        WizardStep::Details => rsx! { DetailsStep { form: form } },
        WizardStep::Category => rsx! { CategoryStep { form: form } },
        WizardStep::Location => rsx! { LocationStep { form: form } },
        WizardStep::Schedule => rsx! { ScheduleStep { form: form } },
        WizardStep::TicketTypes => rsx! { TicketTypesStep { form: form } },
        WizardStep::TicketPricing => rsx! { PricingStep { form: form } },
        WizardStep::Media => rsx! { MediaStep { form: form } },
    };

    rsx! {
        ol { class: "wizard-steps mb-6",
            for (number, label, class) in progress {
                li { key: "{number}", class: class, "{label}" }
            }
        }

        section { class: "card p-6",
            h2 { class: "text-xl font-semibold mb-4", "{heading}" }
            {body}

            if let Some(error) = submit_error() {
                p { class: "field-hint", "{error}" }
            }

            div { class: "controls",
                button {
                    class: "btn btn-ghost",
                    disabled: current.prev().is_none(),
                    onclick: move |_| {
                        if let Some(prev) = current.prev() {
                            step.set(prev);
                        }
                    },
                    "Back"
                }
                if current.is_last() {
                    button {
                        class: "btn btn-primary",
                        disabled: !can_advance || busy,
                        aria_busy: "{busy}",
                        onclick: submit,
                        "Create event"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        disabled: !can_advance,
                        onclick: move |_| {
                            if let Some(next) = current.next() {
                                step.set(next);
                            }
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn DetailsStep(form: Signal<FormData>) -> Element {
    let name = shown(&form.read().name);
    let description = shown(&form.read().description);

    rsx! {
        TextField {
            label: "Event name".to_string(),
            value: name,
            on_input: move |v: String| edit(form, |f| f.name = entered(v)),
        }
        label {
            "Description"
            textarea {
                rows: "5",
                value: "{description}",
                oninput: move |evt| edit(form, |f| f.description = entered(evt.value())),
            }
        }
    }
}

#[component]
fn CategoryStep(form: Signal<FormData>) -> Element {
    let selected = shown(&form.read().category);

    rsx! {
        fieldset {
            for (id, label) in CATEGORIES.iter().copied() {
                label { key: "{id}",
                    input {
                        r#type: "radio",
                        name: "category",
                        checked: selected == id,
                        onchange: move |_| edit(form, |f| f.category = Some(id.to_string())),
                    }
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn LocationStep(form: Signal<FormData>) -> Element {
    let location = form.read().location.clone().unwrap_or_default();
    let coordinates = shown(&location.coordinates);
    let coordinates_hint = (!coordinates.is_empty()
        && !validate_coordinates(Some(&coordinates)))
    .then(|| "Use \"latitude,longitude\", e.g. 48.8566,2.3522".to_string())
    .unwrap_or_default();

    rsx! {
        TextField {
            label: "Country".to_string(),
            value: shown(&location.country),
            on_input: move |v: String| edit(form, |f| f.location_mut().country = entered(v)),
        }
        TextField {
            label: "City".to_string(),
            value: shown(&location.city),
            on_input: move |v: String| edit(form, |f| f.location_mut().city = entered(v)),
        }
        TextField {
            label: "Venue".to_string(),
            value: shown(&location.venue),
            on_input: move |v: String| edit(form, |f| f.location_mut().venue = entered(v)),
        }
        TextField {
            label: "Address".to_string(),
            value: shown(&location.address),
            on_input: move |v: String| edit(form, |f| f.location_mut().address = entered(v)),
        }
        TextField {
            label: "Coordinates".to_string(),
            value: coordinates,
            placeholder: "48.8566,2.3522".to_string(),
            hint: coordinates_hint,
            on_input: move |v: String| edit(form, |f| f.location_mut().coordinates = entered(v)),
        }
    }
}

#[component]
fn ScheduleStep(form: Signal<FormData>) -> Element {
    let datetime = form.read().datetime.clone().unwrap_or_default();
    let order_hint = (datetime.end_time.is_some()
        && !validate_times(datetime.start_time.as_deref(), datetime.end_time.as_deref()))
    .then(|| "End time must be after the start time".to_string())
    .unwrap_or_default();

    rsx! {
        TextField {
            label: "Date".to_string(),
            kind: "date".to_string(),
            value: shown(&datetime.date),
            on_input: move |v: String| edit(form, |f| f.datetime_mut().date = entered(v)),
        }
        TextField {
            label: "Start time".to_string(),
            kind: "time".to_string(),
            value: shown(&datetime.start_time),
            on_input: move |v: String| edit(form, |f| f.datetime_mut().start_time = entered(v)),
        }
        TextField {
            label: "End time (optional)".to_string(),
            kind: "time".to_string(),
            value: shown(&datetime.end_time),
            hint: order_hint,
            on_input: move |v: String| edit(form, |f| f.datetime_mut().end_time = entered(v)),
        }
    }
}

#[component]
fn TicketTypesStep(form: Signal<FormData>) -> Element {
    let selected = form.read().selected_ticket_types.clone();

    rsx! {
        fieldset {
            for ticket_type in TICKET_TYPES {
                label { key: "{ticket_type}",
                    input {
                        r#type: "checkbox",
                        checked: selected.iter().any(|t| t == ticket_type),
                        onchange: move |_| edit(form, |f| f.toggle_ticket_type(ticket_type)),
                    }
                    "{ticket_type}"
                }
            }
        }
    }
}

#[component]
fn PricingStep(form: Signal<FormData>) -> Element {
    let data = form.read();
    let rows: Vec<(String, String, String)> = data
        .selected_ticket_types
        .iter()
        .map(|t| {
            let ticket = data.ticket(t).copied().unwrap_or_default();
            (
                t.clone(),
                ticket.price.map(|p| p.to_string()).unwrap_or_default(),
                ticket.quantity.map(|q| q.to_string()).unwrap_or_default(),
            )
        })
        .collect();

    rsx! {
        for (ticket_type, price, quantity) in rows {
            PriceRow {
                key: "{ticket_type}",
                form: form,
                ticket_type: ticket_type.clone(),
                price: price,
                quantity: quantity,
            }
        }
    }
}

/// Parse a number input; blank or malformed text leaves the field unset.
fn typed_number<T: std::str::FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

/// Inputs keep the organizer's raw text; only the parsed value goes into the form.
#[component]
fn PriceRow(
    form: Signal<FormData>,
    ticket_type: String,
    price: String,
    quantity: String,
) -> Element {
    let mut price_text = use_signal(|| price.clone());
    let mut quantity_text = use_signal(|| quantity.clone());
    let price_type = ticket_type.clone();
    let quantity_type = ticket_type.clone();

    rsx! {
        fieldset { class: "grid",
            legend { "{ticket_type}" }
            TextField {
                label: "Price".to_string(),
                kind: "number".to_string(),
                value: price_text(),
                on_input: move |v: String| {
                    edit(form, |f| f.ticket_mut(&price_type).price = typed_number(&v));
                    price_text.set(v);
                },
            }
            TextField {
                label: "Quantity".to_string(),
                kind: "number".to_string(),
                value: quantity_text(),
                on_input: move |v: String| {
                    edit(form, |f| f.ticket_mut(&quantity_type).quantity = typed_number(&v));
                    quantity_text.set(v);
                },
            }
        }
    }
}

#[component]
fn MediaStep(form: Signal<FormData>) -> Element {
    let image = form
        .read()
        .media
        .as_ref()
        .and_then(|m| m.image.clone())
        .unwrap_or_default();

    rsx! {
        TextField {
            label: "Cover image URL".to_string(),
            kind: "url".to_string(),
            value: image.clone(),
            placeholder: "https://".to_string(),
            on_input: move |v: String| edit(form, |f| f.media_mut().image = entered(v)),
        }
        if !image.is_empty() {
            img { src: "{image}", alt: "Cover preview", class: "mt-4" }
        }
    }
}
