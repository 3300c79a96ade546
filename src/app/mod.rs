//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod pages;
pub mod query;

use auth::AuthProvider;
use pages::{Confirmation, CreateEvent, Events, Home, NotFound};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/events")]
    Events {},
    #[route("/events/new")]
    CreateEvent {},
    #[route("/events/created")]
    Confirmation {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Whether the route requires a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::CreateEvent {})
    }
}
