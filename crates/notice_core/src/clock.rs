//! Wall-clock source and the persisted timestamp format.

use chrono::{Local, NaiveDateTime};

/// Persisted/boundary timestamp layout, 24-hour clock.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of "now" for created/changed stamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local server time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Formats `value` as `yyyy-MM-dd HH:mm:ss`.
pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date_time, Clock, SystemClock, DATE_TIME_FORMAT};
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn afternoon_hours_use_24_hour_clock() {
        let value = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(13, 5, 7)
            .unwrap();
        assert_eq!(format_date_time(value), "2024-03-09 13:05:07");
    }

    #[test]
    fn system_clock_output_parses_back() {
        let formatted = format_date_time(SystemClock.now());
        assert_eq!(formatted.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&formatted, DATE_TIME_FORMAT).is_ok());
    }
}
