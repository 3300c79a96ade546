//! Event query contract.
//!
//! The data layer is external; pages only see `{ data, is_loading }` for a
//! list of [`EventRecord`]s.

use chrono::NaiveDate;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Event categories offered by the wizard and the listing filter (id, label)
pub const CATEGORIES: &[(&str, &str)] = &[
    ("music", "Music"),
    ("sports", "Sports"),
    ("arts", "Arts & Theatre"),
    ("conference", "Conference"),
    ("festival", "Festival"),
    ("family", "Family"),
];

pub fn category_label(id: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}

/// One event as returned by the events endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    /// Calendar date, "YYYY-MM-DD"
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Snapshot of an async query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
}

impl<T> QueryState<T> {
    /// Convert a resource value: `None` while running, `Some(None)` on failure.
    pub fn from_resource(value: Option<Option<T>>) -> Self {
        match value {
            None => Self {
                data: None,
                is_loading: true,
            },
            Some(data) => Self {
                data,
                is_loading: false,
            },
        }
    }
}

/// Events endpoint, optionally filtered by category
pub fn events_url(category: Option<&str>) -> String {
    match category {
        Some(category) if !category.is_empty() => {
            format!("/api/events?category={}", urlencoding::encode(category))
        }
        _ => "/api/events".to_string(),
    }
}

/// Load events, re-fetching whenever `category` changes.
pub fn use_events(category: Signal<Option<String>>) -> QueryState<Vec<EventRecord>> {
    let events = use_resource(move || {
        let url = events_url(category.read().as_deref());
        async move {
            crate::app::api::fetch_json::<Vec<EventRecord>>(&url)
                .await
                .map_err(|e| tracing::warn!("Failed to load events: {}", e))
                .ok()
        }
    });

    let state = QueryState::from_resource(events.read().clone());
    state
}

/// "2026-03-14" -> "Sat, 14 Mar 2026"; anything unparseable is shown as-is.
pub fn format_event_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a, %d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_state_from_resource() {
        let loading = QueryState::<Vec<EventRecord>>::from_resource(None);
        assert!(loading.is_loading);
        assert!(loading.data.is_none());

        let failed = QueryState::<Vec<EventRecord>>::from_resource(Some(None));
        assert!(!failed.is_loading);
        assert!(failed.data.is_none());

        let loaded = QueryState::from_resource(Some(Some(vec![1, 2])));
        assert_eq!(loaded.data, Some(vec![1, 2]));
    }

    #[test]
    fn test_events_url() {
        assert_eq!(events_url(None), "/api/events");
        assert_eq!(events_url(Some("")), "/api/events");
        assert_eq!(events_url(Some("music")), "/api/events?category=music");
        assert_eq!(
            events_url(Some("arts & theatre")),
            "/api/events?category=arts%20%26%20theatre"
        );
    }

    #[test]
    fn test_format_event_date() {
        assert_eq!(format_event_date("2026-03-14"), "Sat, 14 Mar 2026");
        assert_eq!(format_event_date("next friday"), "next friday");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("arts"), "Arts & Theatre");
        assert_eq!(category_label("unlisted"), "unlisted");
    }

    #[test]
    fn test_event_record_optional_fields() {
        let record: EventRecord =
            serde_json::from_str(r#"{"id":"e1","name":"Jazz Night","date":"2026-03-14"}"#).unwrap();
        assert_eq!(record.city, None);
        assert_eq!(record.date.as_deref(), Some("2026-03-14"));
    }
}
