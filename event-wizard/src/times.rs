//! Start/end time ordering for the schedule step.

/// Minutes since midnight for an `"HH:MM"` string.
///
/// Only the first two `:`-separated fields are read, so a trailing `:SS` is
/// ignored. Hour and minute values are not range-checked.
pub fn minutes_since_midnight(time: &str) -> Option<u32> {
    let mut parts = time.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Whether `end` is strictly after `start` on the same day.
///
/// A missing start is invalid; a missing end places no constraint. Equal
/// times, an earlier end, and ranges crossing midnight all fail.
pub fn validate_times(start: Option<&str>, end: Option<&str>) -> bool {
    let Some(start) = start.filter(|s| !s.is_empty()) else {
        return false;
    };
    let Some(end) = end.filter(|s| !s.is_empty()) else {
        return true;
    };

    match (minutes_since_midnight(start), minutes_since_midnight(end)) {
        (Some(start), Some(end)) => start < end,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight("00:00"), Some(0));
        assert_eq!(minutes_since_midnight("10:30"), Some(630));
        assert_eq!(minutes_since_midnight("23:59"), Some(1439));
        assert_eq!(minutes_since_midnight("9:05"), Some(545));
        assert_eq!(minutes_since_midnight("10:30:45"), Some(630));
        assert_eq!(minutes_since_midnight("10"), None);
        assert_eq!(minutes_since_midnight("ab:cd"), None);
        assert_eq!(minutes_since_midnight(""), None);
    }

    #[test]
    fn test_ordering() {
        assert!(validate_times(Some("10:00"), Some("11:00")));
        assert!(validate_times(Some("10:00"), Some("10:01")));
        assert!(!validate_times(Some("10:00"), Some("10:00")));
        assert!(!validate_times(Some("10:00"), Some("09:00")));
    }

    #[test]
    fn test_optional_end() {
        assert!(validate_times(Some("10:00"), None));
        assert!(validate_times(Some("10:00"), Some("")));
    }

    #[test]
    fn test_missing_start() {
        assert!(!validate_times(None, Some("10:00")));
        assert!(!validate_times(Some(""), Some("10:00")));
        assert!(!validate_times(None, None));
    }

    #[test]
    fn test_overnight_range_fails() {
        assert!(!validate_times(Some("23:00"), Some("01:00")));
    }

    #[test]
    fn test_unparseable_times_fail() {
        assert!(!validate_times(Some("noon"), Some("13:00")));
        assert!(!validate_times(Some("12:00"), Some("late")));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let first = validate_times(Some("08:15"), Some("17:45"));
        for _ in 0..10 {
            assert_eq!(validate_times(Some("08:15"), Some("17:45")), first);
        }
    }
}
