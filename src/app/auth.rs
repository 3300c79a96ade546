//! Auth store contract and route protection.
//!
//! Session management lives outside this crate. The UI only relies on the
//! store's shape: the current user, whether the session is still loading, and
//! a way to ask for the sign-in modal.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::app::components::Loader;
use crate::app::Route;

/// Signed-in user as reported by the session endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Reactive auth state shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct AuthStore {
    pub user: Signal<Option<User>>,
    pub loading: Signal<bool>,
    pub modal_open: Signal<bool>,
}

impl AuthStore {
    fn new() -> Self {
        Self {
            user: Signal::new(None),
            loading: Signal::new(true),
            modal_open: Signal::new(false),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn open_modal(&mut self) {
        self.modal_open.set(true);
    }

    pub fn close_modal(&mut self) {
        self.modal_open.set(false);
    }
}

/// Access the auth store provided by [`AuthProvider`].
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>()
}

/// Provides [`AuthStore`] to the tree and loads the current session once.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth = use_context_provider(AuthStore::new);

    let session = use_resource(|| async {
        crate::app::api::fetch_json::<User>("/api/session")
            .await
            .ok()
    });

    // Settle the store once the session request finishes (signed in or not)
    use_effect(move || {
        if let Some(user) = session.read().as_ref() {
            tracing::debug!(signed_in = user.is_some(), "session resolved");
            auth.user.set(user.clone());
            auth.loading.set(false);
        }
    });

    rsx! {
        {children}
    }
}

/// What a route should render given the auth state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session still loading; show a loader
    Pending,
    /// Render the page
    Granted,
    /// Ask the visitor to sign in
    SignInRequired,
}

pub fn route_access(protected: bool, loading: bool, signed_in: bool) -> RouteAccess {
    match (protected, loading, signed_in) {
        (false, _, _) => RouteAccess::Granted,
        (true, true, _) => RouteAccess::Pending,
        (true, false, true) => RouteAccess::Granted,
        (true, false, false) => RouteAccess::SignInRequired,
    }
}

/// Access decision for a concrete route.
pub fn access_for(route: &Route, loading: bool, signed_in: bool) -> RouteAccess {
    route_access(route.is_protected(), loading, signed_in)
}

/// Renders `children` unless the current route needs a sign-in it lacks.
#[component]
pub fn Protected(children: Element) -> Element {
    let mut auth = use_auth();
    let route = use_route::<Route>();
    let access = access_for(&route, *auth.loading.read(), auth.is_signed_in());

    match access {
        RouteAccess::Pending => rsx! {
            Loader { label: "Checking your session...".to_string() }
        },
        RouteAccess::Granted => rsx! {
            {children}
        },
        RouteAccess::SignInRequired => rsx! {
            div { class: "card p-6",
                p { class: "mb-4", "You need to be signed in to view this page." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| auth.open_modal(),
                    "Sign in"
                }
            }
        },
    }
}

/// Minimal sign-in prompt shown while the store's modal flag is set.
///
/// The sign-in flow itself is served by the auth provider at `/login`.
#[component]
pub fn SignInModal() -> Element {
    let mut auth = use_auth();

    if !*auth.modal_open.read() {
        return rsx! {};
    }

    rsx! {
        dialog { open: true,
            article {
                h3 { "Sign in" }
                p { "Sign in to create and manage your events." }
                footer { class: "flex gap-2",
                    a { class: "btn btn-primary", href: "/login", "Continue to sign in" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| auth.close_modal(),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprotected_routes_always_render() {
        for (loading, signed_in) in [(true, true), (true, false), (false, true), (false, false)] {
            assert_eq!(route_access(false, loading, signed_in), RouteAccess::Granted);
        }
    }

    #[test]
    fn test_protected_route_waits_for_session() {
        assert_eq!(route_access(true, true, false), RouteAccess::Pending);
        assert_eq!(route_access(true, true, true), RouteAccess::Pending);
    }

    #[test]
    fn test_protected_route_after_session_resolves() {
        assert_eq!(route_access(true, false, true), RouteAccess::Granted);
        assert_eq!(route_access(true, false, false), RouteAccess::SignInRequired);
    }

    #[test]
    fn test_access_follows_route_table() {
        let create = Route::CreateEvent {};
        assert_eq!(access_for(&create, true, false), RouteAccess::Pending);
        assert_eq!(access_for(&create, false, false), RouteAccess::SignInRequired);
        assert_eq!(access_for(&create, false, true), RouteAccess::Granted);

        for route in [
            Route::Home {},
            Route::Events {},
            Route::Confirmation {},
            Route::NotFound { segments: vec![] },
        ] {
            assert_eq!(access_for(&route, true, false), RouteAccess::Granted);
            assert_eq!(access_for(&route, false, false), RouteAccess::Granted);
        }
    }

    #[test]
    fn test_user_email_optional() {
        let user: User = serde_json::from_str(r#"{"id":"u1","name":"Ada"}"#).unwrap();
        assert_eq!(user.email, None);
        assert_eq!(user.name, "Ada");
    }
}
