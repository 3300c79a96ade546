//! Typed snapshot of the event-creation wizard.
//!
//! The wizard controller owns and mutates this structure; validators only
//! ever borrow it. Every nested group is optional so a partially filled
//! snapshot deserializes cleanly and a missing group simply fails its step.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Accumulated wizard input across all seven steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    /// Event name (step 1)
    pub name: Option<String>,

    /// Free-form description (step 1)
    pub description: Option<String>,

    /// Category identifier (step 2)
    pub category: Option<String>,

    /// Venue and address (step 3)
    pub location: Option<Location>,

    /// Date and time range (step 4)
    pub datetime: Option<EventDateTime>,

    /// Ticket type identifiers chosen for sale (steps 5 and 6)
    #[serde(deserialize_with = "null_as_default")]
    pub selected_ticket_types: Vec<String>,

    /// Price and quantity per ticket type identifier (step 6)
    #[serde(deserialize_with = "tickets_without_nulls")]
    pub tickets: BTreeMap<String, TicketSettings>,

    /// Uploaded media references (step 7)
    pub media: Option<Media>,
}

/// Where the event takes place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub country: Option<String>,
    pub city: Option<String>,
    pub venue: Option<String>,
    pub address: Option<String>,
    /// `"lat,lng"` string as typed by the organizer
    pub coordinates: Option<String>,
}

/// When the event takes place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDateTime {
    /// Calendar date (e.g. "2026-03-14")
    pub date: Option<String>,
    /// Start time, 24-hour "HH:MM"
    pub start_time: Option<String>,
    /// Optional end time, 24-hour "HH:MM"
    pub end_time: Option<String>,
}

/// Sale settings for one ticket type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TicketSettings {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Media {
    /// Reference or URL to the uploaded cover image
    pub image: Option<String>,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` ticket entry is dropped, so the type reads as having no settings.
fn tickets_without_nulls<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, TicketSettings>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<TicketSettings>>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(ticket_type, settings)| settings.map(|s| (ticket_type, s)))
        .collect())
}

/// Returns the field's text when it is set and non-empty.
///
/// Whitespace-only text counts as present; only the step 1 fields trim.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl TicketSettings {
    /// A positive number of tickets is on sale.
    pub fn quantity_set(&self) -> bool {
        self.quantity.is_some_and(|q| q > 0)
    }
}

impl FormData {
    /// Ticket settings for a selected type, if any were entered.
    pub fn ticket(&self, ticket_type: &str) -> Option<&TicketSettings> {
        self.tickets.get(ticket_type)
    }

    /// Toggle a ticket type in the selection, keeping selection order.
    pub fn toggle_ticket_type(&mut self, ticket_type: &str) {
        if let Some(pos) = self
            .selected_ticket_types
            .iter()
            .position(|t| t == ticket_type)
        {
            self.selected_ticket_types.remove(pos);
        } else {
            self.selected_ticket_types.push(ticket_type.to_string());
        }
    }

    /// Mutable access to the location group, creating it on first use.
    pub fn location_mut(&mut self) -> &mut Location {
        self.location.get_or_insert_with(Location::default)
    }

    /// Mutable access to the date/time group, creating it on first use.
    pub fn datetime_mut(&mut self) -> &mut EventDateTime {
        self.datetime.get_or_insert_with(EventDateTime::default)
    }

    /// Mutable access to the media group, creating it on first use.
    pub fn media_mut(&mut self) -> &mut Media {
        self.media.get_or_insert_with(Media::default)
    }

    /// Mutable access to a ticket type's settings, creating them on first use.
    pub fn ticket_mut(&mut self, ticket_type: &str) -> &mut TicketSettings {
        self.tickets.entry(ticket_type.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_snapshot() {
        let json = serde_json::json!({
            "name": "Concert",
            "description": "Live music",
            "category": "music",
            "location": {
                "country": "France",
                "city": "Paris",
                "venue": "Olympia",
                "address": "28 Bd des Capucines",
                "coordinates": "48.8566,2.3522"
            },
            "datetime": { "date": "2026-03-14", "startTime": "20:00", "endTime": "23:00" },
            "selectedTicketTypes": ["VIP"],
            "tickets": { "VIP": { "price": 50.0, "quantity": 10 } },
            "media": { "image": "https://cdn.example.com/cover.jpg" }
        });

        let form: FormData = serde_json::from_value(json).unwrap();
        assert_eq!(form.name.as_deref(), Some("Concert"));
        let dt = form.datetime.as_ref().unwrap();
        assert_eq!(dt.start_time.as_deref(), Some("20:00"));
        assert_eq!(dt.end_time.as_deref(), Some("23:00"));
        assert_eq!(form.selected_ticket_types, vec!["VIP".to_string()]);
        assert_eq!(form.ticket("VIP").unwrap().quantity, Some(10));
    }

    #[test]
    fn test_missing_groups_deserialize_to_none() {
        let form: FormData = serde_json::from_str(r#"{"name":"Only a name"}"#).unwrap();
        assert!(form.location.is_none());
        assert!(form.datetime.is_none());
        assert!(form.media.is_none());
        assert!(form.selected_ticket_types.is_empty());
        assert!(form.tickets.is_empty());
    }

    #[test]
    fn test_null_collections_read_as_empty() {
        let form: FormData =
            serde_json::from_str(r#"{"selectedTicketTypes":null,"tickets":null,"location":null}"#)
                .unwrap();
        assert!(form.selected_ticket_types.is_empty());
        assert!(form.tickets.is_empty());
        assert!(form.location.is_none());
    }

    #[test]
    fn test_null_ticket_entry_is_dropped() {
        let form: FormData = serde_json::from_str(
            r#"{"selectedTicketTypes":["VIP","Standard"],"tickets":{"VIP":null,"Standard":{"price":5,"quantity":null}}}"#,
        )
        .unwrap();
        assert!(form.ticket("VIP").is_none());
        let standard = form.ticket("Standard").unwrap();
        assert_eq!(standard.price, Some(5.0));
        assert!(!standard.quantity_set());
    }

    #[test]
    fn test_quantity_set_requires_positive() {
        let mut ticket = TicketSettings::default();
        assert!(!ticket.quantity_set());
        ticket.quantity = Some(0);
        assert!(!ticket.quantity_set());
        ticket.quantity = Some(1);
        assert!(ticket.quantity_set());
    }

    #[test]
    fn test_toggle_ticket_type() {
        let mut form = FormData::default();
        form.toggle_ticket_type("VIP");
        form.toggle_ticket_type("Standard");
        assert_eq!(form.selected_ticket_types, vec!["VIP", "Standard"]);

        form.toggle_ticket_type("VIP");
        assert_eq!(form.selected_ticket_types, vec!["Standard"]);
    }

    #[test]
    fn test_group_accessors_create_on_first_use() {
        let mut form = FormData::default();
        form.location_mut().city = Some("Lyon".to_string());
        form.ticket_mut("VIP").price = Some(25.0);

        assert_eq!(form.location.unwrap().city.as_deref(), Some("Lyon"));
        assert_eq!(form.tickets["VIP"].price, Some(25.0));
    }

    #[test]
    fn test_present_treats_empty_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("  ".to_string())), Some("  "));
        assert_eq!(present(&Some("x".to_string())), Some("x"));
    }
}
