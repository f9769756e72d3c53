//! Wall-clock variables.

use chrono::{DateTime, Datelike, Local, Timelike};

use crate::snippet::Variable;

use super::VariableResolver;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const DAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Source of the current instant. Injected so tests can pin a value.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Answers the eleven date/time variables, reading the clock fresh on every
/// call. Two-digit fields are zero-padded; epoch seconds are not.
pub struct TimeResolver {
    clock: Box<dyn Clock>,
}

impl TimeResolver {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableResolver for TimeResolver {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        let now = self.clock.now();
        match variable.name {
            "CURRENT_YEAR" => Some(now.year().to_string()),
            "CURRENT_YEAR_SHORT" => Some(format!("{:02}", now.year() % 100)),
            "CURRENT_MONTH" => Some(format!("{:02}", now.month())),
            "CURRENT_DATE" => Some(format!("{:02}", now.day())),
            "CURRENT_HOUR" => Some(format!("{:02}", now.hour())),
            "CURRENT_MINUTE" => Some(format!("{:02}", now.minute())),
            "CURRENT_SECOND" => Some(format!("{:02}", now.second())),
            "CURRENT_DAY_NAME" => {
                Some(DAY_NAMES[now.weekday().num_days_from_sunday() as usize].to_string())
            }
            "CURRENT_DAY_NAME_SHORT" => {
                Some(DAY_NAMES_SHORT[now.weekday().num_days_from_sunday() as usize].to_string())
            }
            "CURRENT_MONTH_NAME" => Some(MONTH_NAMES[now.month0() as usize].to_string()),
            "CURRENT_MONTH_NAME_SHORT" => {
                Some(MONTH_NAMES_SHORT[now.month0() as usize].to_string())
            }
            "CURRENT_SECONDS_UNIX" => Some(now.timestamp().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    // Saturday, March 7th 2026, 09:05:04 local time
    fn resolver() -> TimeResolver {
        let instant = Local
            .with_ymd_and_hms(2026, 3, 7, 9, 5, 4)
            .single()
            .expect("fixture instant should be unambiguous");
        TimeResolver::with_clock(FixedClock(instant))
    }

    fn resolve(name: &str) -> Option<String> {
        resolver().resolve(&Variable::new(name))
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(resolve("CURRENT_MONTH"), Some("03".to_string()));
        assert_eq!(resolve("CURRENT_DATE"), Some("07".to_string()));
        assert_eq!(resolve("CURRENT_HOUR"), Some("09".to_string()));
        assert_eq!(resolve("CURRENT_MINUTE"), Some("05".to_string()));
        assert_eq!(resolve("CURRENT_SECOND"), Some("04".to_string()));
    }

    #[test]
    fn test_years() {
        assert_eq!(resolve("CURRENT_YEAR"), Some("2026".to_string()));
        assert_eq!(resolve("CURRENT_YEAR_SHORT"), Some("26".to_string()));
    }

    #[test]
    fn test_names() {
        assert_eq!(resolve("CURRENT_DAY_NAME"), Some("Saturday".to_string()));
        assert_eq!(resolve("CURRENT_DAY_NAME_SHORT"), Some("Sat".to_string()));
        assert_eq!(resolve("CURRENT_MONTH_NAME"), Some("March".to_string()));
        assert_eq!(
            resolve("CURRENT_MONTH_NAME_SHORT"),
            Some("Mar".to_string())
        );
    }

    #[test]
    fn test_epoch_seconds_unpadded() {
        let value = resolve("CURRENT_SECONDS_UNIX").expect("should resolve");
        assert!(!value.starts_with('0'));
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_other_names_unresolved() {
        assert_eq!(resolve("RANDOM"), None);
    }
}
