//! Per-step gatekeeping for the seven-step event-creation wizard.
//!
//! [`validate_step`] is the boolean gate the UI consults after every edit to
//! decide whether "Next" is enabled. [`check_step`] returns the first reason a
//! step fails, which callers may log or surface; the boolean outcome is the
//! same either way.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::coordinates::parse_coordinates;
use crate::form::{present, FormData};
use crate::policy::ValidationPolicy;
use crate::times::validate_times;

/// The wizard's steps, numbered 1 through 7.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Details = 1,
    Category = 2,
    Location = 3,
    Schedule = 4,
    TicketTypes = 5,
    TicketPricing = 6,
    Media = 7,
}

impl WizardStep {
    pub const COUNT: usize = 7;

    pub const ALL: [WizardStep; Self::COUNT] = [
        Self::Details,
        Self::Category,
        Self::Location,
        Self::Schedule,
        Self::TicketTypes,
        Self::TicketPricing,
        Self::Media,
    ];

    /// 1-based step number
    pub fn number(self) -> i64 {
        self as i64
    }

    /// Heading shown above the step's fields
    pub fn title(self) -> &'static str {
        match self {
            Self::Details => "Event details",
            Self::Category => "Category",
            Self::Location => "Location",
            Self::Schedule => "Date & time",
            Self::TicketTypes => "Ticket types",
            Self::TicketPricing => "Pricing",
            Self::Media => "Media",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::try_from(self.number() + 1).ok()
    }

    pub fn prev(self) -> Option<Self> {
        Self::try_from(self.number() - 1).ok()
    }

    pub fn is_last(self) -> bool {
        self == Self::Media
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Raised for indices outside 1..=7.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no wizard step numbered {0}")]
pub struct UnknownStep(pub i64);

impl TryFrom<i64> for WizardStep {
    type Error = UnknownStep;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Details),
            2 => Ok(Self::Category),
            3 => Ok(Self::Location),
            4 => Ok(Self::Schedule),
            5 => Ok(Self::TicketTypes),
            6 => Ok(Self::TicketPricing),
            7 => Ok(Self::Media),
            other => Err(UnknownStep(other)),
        }
    }
}

/// Why a step did not pass.
///
/// Absent and malformed values are not distinguished except where a field has
/// its own format check (coordinates, time range).
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepIssue {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("coordinates must be \"lat,lng\" within range")]
    InvalidCoordinates,

    #[error("end time must be after start time")]
    InvalidTimeRange,

    #[error("select at least one ticket type")]
    NoTicketTypes,

    #[error("{ticket_type} ticket needs a {field}")]
    IncompleteTicket {
        ticket_type: String,
        field: &'static str,
    },
}

fn missing(field: &'static str) -> StepIssue {
    StepIssue::MissingField { field }
}

fn require<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, StepIssue> {
    present(value).ok_or_else(|| missing(field))
}

fn require_trimmed(value: &Option<String>, field: &'static str) -> Result<(), StepIssue> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(missing(field)),
    }
}

fn check(step: WizardStep, form: &FormData, policy: &ValidationPolicy) -> Result<(), StepIssue> {
    match step {
        WizardStep::Details => {
            require_trimmed(&form.name, "name")?;
            require_trimmed(&form.description, "description")
        }
        WizardStep::Category => require(&form.category, "category").map(drop),
        WizardStep::Location => {
            let location = form.location.as_ref().ok_or_else(|| missing("location"))?;
            require(&location.country, "country")?;
            require(&location.city, "city")?;
            require(&location.venue, "venue")?;
            require(&location.address, "address")?;
            let coordinates = require(&location.coordinates, "coordinates")?;
            parse_coordinates(coordinates, policy.coordinates)
                .map(drop)
                .ok_or(StepIssue::InvalidCoordinates)
        }
        WizardStep::Schedule => {
            let datetime = form.datetime.as_ref().ok_or_else(|| missing("datetime"))?;
            require(&datetime.date, "date")?;
            let start = require(&datetime.start_time, "startTime")?;
            match present(&datetime.end_time) {
                Some(end) if !validate_times(Some(start), Some(end)) => {
                    Err(StepIssue::InvalidTimeRange)
                }
                _ => Ok(()),
            }
        }
        WizardStep::TicketTypes => {
            if form.selected_ticket_types.is_empty() {
                Err(StepIssue::NoTicketTypes)
            } else {
                Ok(())
            }
        }
        WizardStep::TicketPricing => {
            for ticket_type in &form.selected_ticket_types {
                let incomplete = |field| StepIssue::IncompleteTicket {
                    ticket_type: ticket_type.clone(),
                    field,
                };
                let ticket = form.ticket(ticket_type).ok_or_else(|| incomplete("price"))?;
                if !policy.ticket_price_set(ticket) {
                    return Err(incomplete("price"));
                }
                if !ticket.quantity_set() {
                    return Err(incomplete("quantity"));
                }
            }
            Ok(())
        }
        WizardStep::Media => {
            let media = form.media.as_ref().ok_or_else(|| missing("media"))?;
            require(&media.image, "image").map(drop)
        }
    }
}

/// Check one step against a policy, returning the first issue found.
pub fn check_step(
    step: WizardStep,
    form: &FormData,
    policy: &ValidationPolicy,
) -> Result<(), StepIssue> {
    let result = check(step, form, policy);
    if let Err(issue) = &result {
        debug!(step = step.number(), %issue, "wizard step incomplete");
    }
    result
}

/// Whether the given step's fields are present and well-formed.
///
/// Dispatches on the raw step index. Anything outside 1..=7 places no
/// constraint and returns `true`.
pub fn validate_step(step: i64, form: &FormData) -> bool {
    match WizardStep::try_from(step) {
        Ok(step) => check_step(step, form, &ValidationPolicy::default()).is_ok(),
        Err(_) => true,
    }
}

/// Lowest step that fails under the default policy.
pub fn first_invalid_step(form: &FormData) -> Option<WizardStep> {
    let policy = ValidationPolicy::default();
    WizardStep::ALL
        .into_iter()
        .find(|step| check_step(*step, form, &policy).is_err())
}
