use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::utils::constants::{DATE_FORMATS, MINUTES_PER_DAY, TIME_FORMATS, WEEKEND_DAYS};

/// Calendar features extracted from an order date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub day_of_week: &'static str,
    pub is_weekend: bool,
}

pub fn calendar_parts(date: NaiveDate) -> CalendarParts {
    let day_of_week = weekday_name(date.weekday());
    CalendarParts {
        day: date.day(),
        month: date.month(),
        year: date.year(),
        day_of_week,
        is_weekend: WEEKEND_DAYS.contains(&day_of_week),
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a date string with day-before-month interpretation, tolerating
/// `-` or `/` separators.
pub fn parse_date_day_first(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parse a time-of-day string in any of the accepted mixed formats.
pub fn parse_time_mixed(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

/// Minutes from `ordered` to `picked` on a circular 24-hour clock. A pickup
/// recorded before the order crossed midnight, so negative deltas wrap
/// forward by one day.
pub fn minutes_between(ordered: NaiveTime, picked: NaiveTime) -> f64 {
    let minutes = picked.signed_duration_since(ordered).num_seconds() as f64 / 60.0;
    if minutes < 0.0 {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_day_first() {
        let date = parse_date_day_first("19-03-2022").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 3, 19).unwrap());

        let date = parse_date_day_first("02/01/2022").unwrap();
        // Day-first: 2 January, not 1 February
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());

        assert!(parse_date_day_first("2022-03-19").is_none());
        assert!(parse_date_day_first("not a date").is_none());
    }

    #[test]
    fn test_parse_time_mixed() {
        assert_eq!(
            parse_time_mixed("23:50:00").unwrap(),
            NaiveTime::from_hms_opt(23, 50, 0).unwrap()
        );
        assert_eq!(
            parse_time_mixed("9:15").unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap()
        );
        assert_eq!(
            parse_time_mixed("11:30 PM").unwrap(),
            NaiveTime::from_hms_opt(23, 30, 0).unwrap()
        );
        assert!(parse_time_mixed("25:00").is_none());
    }

    #[test]
    fn test_calendar_parts() {
        // 19 March 2022 was a Saturday
        let parts = calendar_parts(NaiveDate::from_ymd_opt(2022, 3, 19).unwrap());
        assert_eq!(parts.day, 19);
        assert_eq!(parts.month, 3);
        assert_eq!(parts.year, 2022);
        assert_eq!(parts.day_of_week, "Saturday");
        assert!(parts.is_weekend);

        let parts = calendar_parts(NaiveDate::from_ymd_opt(2022, 3, 16).unwrap());
        assert_eq!(parts.day_of_week, "Wednesday");
        assert!(!parts.is_weekend);
    }

    #[test]
    fn test_minutes_between_same_day() {
        let ordered = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let picked = NaiveTime::from_hms_opt(10, 15, 0).unwrap();
        assert_eq!(minutes_between(ordered, picked), 15.0);
    }

    #[test]
    fn test_minutes_between_wraps_midnight() {
        let ordered = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
        let picked = NaiveTime::from_hms_opt(0, 10, 0).unwrap();
        assert_eq!(minutes_between(ordered, picked), 20.0);
    }

    #[test]
    fn test_minutes_between_is_never_negative() {
        let ordered = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        for hour in 0..24 {
            let picked = NaiveTime::from_hms_opt(hour, 30, 0).unwrap();
            assert!(minutes_between(ordered, picked) >= 0.0);
        }
    }

    #[test]
    fn test_minutes_between_seconds_precision() {
        let ordered = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let picked = NaiveTime::from_hms_opt(10, 0, 30).unwrap();
        assert_eq!(minutes_between(ordered, picked), 0.5);
    }
}
