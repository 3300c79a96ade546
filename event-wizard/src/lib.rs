//! Form model and step validation for the event-creation wizard.
//!
//! This crate is shared between the server (which can re-check a submitted
//! snapshot) and the WASM client (which decides whether "Next" is enabled).
//! Every check is a pure predicate over a borrowed [`FormData`].
//!
//! # Modules
//! - [`form`] - Typed form snapshot (`FormData` and its nested groups)
//! - [`coordinates`] - `"lat,lng"` string validation
//! - [`times`] - `HH:MM` start/end ordering
//! - [`steps`] - Per-step gatekeeping (`validate_step`, `check_step`)
//! - [`policy`] - Tunable rules for the open product questions

pub mod coordinates;
pub mod form;
pub mod policy;
pub mod steps;
pub mod times;

// Re-export commonly used types at crate root
pub use coordinates::{parse_coordinates, validate_coordinates, Coordinates};
pub use form::{EventDateTime, FormData, Location, Media, TicketSettings};
pub use policy::{CoordinatePolicy, StepValidator, TicketPricePolicy, ValidationPolicy};
pub use steps::{
    check_step, first_invalid_step, validate_step, StepIssue, UnknownStep, WizardStep,
};
pub use times::{minutes_since_midnight, validate_times};
