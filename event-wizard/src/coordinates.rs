//! Validation of `"lat,lng"` coordinate strings.
//!
//! The default [`CoordinatePolicy::Pattern`] checks each part against a
//! format pattern before the numeric range check. The longitude pattern
//! stops at 179.x, so exactly `180` is rejected while exactly `90` is an
//! accepted latitude.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::policy::CoordinatePolicy;

/// Latitude: optional sign, 0-89 (one or two digits) or exactly 90, optional fraction.
const LATITUDE_PATTERN: &str = r"^-?([0-8]?[0-9]|90)(\.[0-9]+)?$";

/// Longitude: optional sign, 0-99 or 100-179, optional fraction.
const LONGITUDE_PATTERN: &str = r"^-?(1[0-7][0-9]|[0-9]{1,2})(\.[0-9]+)?$";

fn latitude_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LATITUDE_PATTERN).expect("latitude pattern is valid"))
}

fn longitude_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LONGITUDE_PATTERN).expect("longitude pattern is valid"))
}

/// A parsed geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Whether both components lie in the closed ranges [-90, 90] and [-180, 180].
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parse a `"lat,lng"` string under the given policy.
///
/// Splits on the first comma and trims both parts. Returns `None` for empty
/// input, an empty part, a format mismatch, or an out-of-range value.
pub fn parse_coordinates(input: &str, policy: CoordinatePolicy) -> Option<Coordinates> {
    if input.is_empty() {
        return None;
    }

    let (lat, lng) = input.split_once(',')?;
    let (lat, lng) = (lat.trim(), lng.trim());
    if lat.is_empty() || lng.is_empty() {
        return None;
    }

    if policy == CoordinatePolicy::Pattern
        && !(latitude_regex().is_match(lat) && longitude_regex().is_match(lng))
    {
        return None;
    }

    let coords = Coordinates {
        lat: lat.parse().ok()?,
        lng: lng.parse().ok()?,
    };

    // NaN fails both range checks
    coords.in_range().then_some(coords)
}

/// Validate a `"lat,lng"` string with the default pattern policy.
///
/// Absent or empty input is invalid.
pub fn validate_coordinates(input: Option<&str>) -> bool {
    input
        .and_then(|s| parse_coordinates(s, CoordinatePolicy::default()))
        .is_some()
}
