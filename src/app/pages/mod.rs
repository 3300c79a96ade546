//! Dioxus fullstack page components.
//!
//! These pages use Dioxus signals and resources; data comes through the
//! event query contract and the auth store.

mod confirmation;
mod create_event;
mod events;
mod home;
mod not_found;

pub use confirmation::Confirmation;
pub use create_event::CreateEvent;
pub use events::Events;
pub use home::Home;
pub use not_found::NotFound;
