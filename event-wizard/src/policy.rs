//! Tunable validation rules.
//!
//! Two behaviours are open product questions: the longitude pattern's
//! exclusion of exactly 180, and whether a zero ticket price (a free ticket)
//! is acceptable. The defaults reproduce the observed behaviour; the
//! alternatives are opt-in through configuration.

use serde::{Deserialize, Serialize};

use crate::coordinates::{parse_coordinates, Coordinates};
use crate::form::{FormData, TicketSettings};
use crate::steps::{check_step, StepIssue, WizardStep};

/// How coordinate strings are checked.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// Format patterns first, then the numeric range check. Rejects exactly 180.
    #[default]
    Pattern,
    /// Numeric range check only. Accepts the full closed ranges.
    NumericRange,
}

/// Which ticket prices count as set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketPricePolicy {
    /// Price must be greater than zero.
    #[default]
    RequirePositive,
    /// Zero is accepted (free tickets); negatives are still rejected.
    AllowFree,
}

impl TicketPricePolicy {
    pub fn accepts(self, price: f64) -> bool {
        match self {
            Self::RequirePositive => price > 0.0 && price.is_finite(),
            Self::AllowFree => price >= 0.0 && price.is_finite(),
        }
    }
}

/// The full set of rules applied by [`StepValidator`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationPolicy {
    pub coordinates: CoordinatePolicy,
    pub ticket_price: TicketPricePolicy,
}

impl ValidationPolicy {
    pub(crate) fn ticket_price_set(&self, ticket: &TicketSettings) -> bool {
        ticket.price.is_some_and(|p| self.ticket_price.accepts(p))
    }
}

/// Step validation bound to a specific policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepValidator {
    policy: ValidationPolicy,
}

impl StepValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Boolean gate for a raw step index. Indices outside 1..=7 always pass.
    pub fn validate_step(&self, step: i64, form: &FormData) -> bool {
        match WizardStep::try_from(step) {
            Ok(step) => self.check_step(step, form).is_ok(),
            Err(_) => true,
        }
    }

    pub fn check_step(&self, step: WizardStep, form: &FormData) -> Result<(), StepIssue> {
        check_step(step, form, &self.policy)
    }

    pub fn validate_coordinates(&self, input: Option<&str>) -> bool {
        self.parse_coordinates(input).is_some()
    }

    pub fn parse_coordinates(&self, input: Option<&str>) -> Option<Coordinates> {
        input.and_then(|s| parse_coordinates(s, self.policy.coordinates))
    }

    /// Lowest step that does not pass, if any.
    pub fn first_invalid_step(&self, form: &FormData) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .find(|step| self.check_step(*step, form).is_err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_policies() {
        assert!(TicketPricePolicy::RequirePositive.accepts(0.01));
        assert!(!TicketPricePolicy::RequirePositive.accepts(0.0));
        assert!(!TicketPricePolicy::RequirePositive.accepts(-5.0));
        assert!(!TicketPricePolicy::RequirePositive.accepts(f64::NAN));

        assert!(TicketPricePolicy::AllowFree.accepts(0.0));
        assert!(TicketPricePolicy::AllowFree.accepts(12.5));
        assert!(!TicketPricePolicy::AllowFree.accepts(-0.5));
        assert!(!TicketPricePolicy::AllowFree.accepts(f64::INFINITY));
    }

    #[test]
    fn test_ticket_price_follows_policy() {
        let free = TicketSettings {
            price: Some(0.0),
            quantity: Some(3),
        };
        assert!(!ValidationPolicy::default().ticket_price_set(&free));

        let lenient = ValidationPolicy {
            ticket_price: TicketPricePolicy::AllowFree,
            ..Default::default()
        };
        assert!(lenient.ticket_price_set(&free));
        assert!(!lenient.ticket_price_set(&TicketSettings::default()));
    }

    #[test]
    fn test_policy_deserializes_snake_case() {
        let policy: ValidationPolicy = serde_json::from_str(
            r#"{"coordinates":"numeric_range","ticket_price":"allow_free"}"#,
        )
        .unwrap();
        assert_eq!(policy.coordinates, CoordinatePolicy::NumericRange);
        assert_eq!(policy.ticket_price, TicketPricePolicy::AllowFree);

        let empty: ValidationPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ValidationPolicy::default());
    }

    #[test]
    fn test_validator_uses_its_policy() {
        let strict = StepValidator::default();
        let lenient = StepValidator::new(ValidationPolicy {
            coordinates: CoordinatePolicy::NumericRange,
            ticket_price: TicketPricePolicy::AllowFree,
        });

        assert!(!strict.validate_coordinates(Some("0,180")));
        assert!(lenient.validate_coordinates(Some("0,180")));
        assert!(!lenient.validate_coordinates(None));
    }

    #[test]
    fn test_validator_unknown_steps_pass() {
        let validator = StepValidator::default();
        let form = FormData::default();
        for step in [-1, 0, 8, 100, i64::MIN, i64::MAX] {
            assert!(validator.validate_step(step, &form));
        }
        assert!(!validator.validate_step(1, &form));
    }
}
