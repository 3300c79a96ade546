//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::auth::{Protected, SignInModal};

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.event-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.wizard-steps { display: flex; gap: 0.5rem; list-style: none; padding: 0; flex-wrap: wrap; }
.wizard-steps li { color: var(--pico-muted-color); }
.wizard-steps li.active { color: var(--pico-primary); font-weight: 600; }
.wizard-steps li.done { color: var(--pico-ins-color); }
.field-hint { color: var(--pico-del-color); }
.controls { display: flex; gap: 0.5rem; margin-top: 1rem; }
.controls button { margin: 0; padding: 0.5rem 1rem; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - TicketEnd", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        // Body content
        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            Protected {
                {props.children}
            }
        }
        SignInModal {}
        footer { class: "container",
            small { "TicketEnd v{version}" }
        }
    }
}
