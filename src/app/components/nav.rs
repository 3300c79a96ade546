//! Navigation component using Tailwind CSS.

use dioxus::prelude::*;

use crate::app::auth::use_auth;

/// Primary navigation entries: (page ID, href, label)
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("home", "/", "Home"),
    ("events", "/events", "Events"),
    ("create", "/events/new", "Create event"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "events")
    pub active: String,
}

/// Navigation bar using Tailwind CSS with mobile toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);
    let mut auth = use_auth();

    let nav_link_class = |page: &str| {
        if props.active == page {
            "block px-3 py-2 rounded-md text-sm font-medium text-white bg-gray-900"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-white hover:bg-gray-700"
        }
    };

    let mobile_menu_class = if menu_open() {
        "block lg:hidden"
    } else {
        "hidden lg:hidden"
    };

    let user_name = auth.user.read().as_ref().map(|u| u.name.clone());
    let session_content = match user_name {
        Some(name) => rsx! {
            span { class: "text-sm text-gray-300", "{name}" }
        },
        None if *auth.loading.read() => rsx! {},
        None => rsx! {
            button {
                class: "btn btn-primary btn-sm",
                r#type: "button",
                onclick: move |_| auth.open_modal(),
                "Sign in"
            }
        },
    };

    rsx! {
        nav { class: "bg-gray-800",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    // Logo / Brand
                    div { class: "flex items-center",
                        a { class: "text-white font-bold text-xl", href: "/", "TicketEnd" }
                    }

                    // Desktop navigation
                    div { class: "hidden lg:flex items-center space-x-4",
                        for (id, href, label) in NAV_ITEMS.iter().copied() {
                            a { key: "{id}", class: nav_link_class(id), href: href, "{label}" }
                        }
                    }

                    // Session
                    div { class: "flex items-center gap-2",
                        {session_content}

                        // Mobile menu button
                        button {
                            class: "lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 focus:outline-none",
                            r#type: "button",
                            onclick: move |_| menu_open.toggle(),
                            span { class: "sr-only", "Toggle menu" }
                            if menu_open() {
                                // X icon
                                svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                                }
                            } else {
                                // Hamburger icon
                                svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                                }
                            }
                        }
                    }
                }
            }

            // Mobile menu
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                div { class: "px-2 pt-2 pb-3 space-y-1",
                    for (id, href, label) in NAV_ITEMS.iter().copied() {
                        a {
                            key: "{id}",
                            class: nav_link_class(id),
                            href: href,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
