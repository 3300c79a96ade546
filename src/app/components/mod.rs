//! Shared UI components for the Dioxus fullstack web UI.

pub mod event_card;
pub mod field;
pub mod layout;
pub mod loader;
pub mod nav;

pub use event_card::EventCard;
pub use field::TextField;
pub use layout::Layout;
pub use loader::Loader;
pub use nav::Nav;
