//! Calendar-date helpers shared by the filter and availability logic.
//!
//! All date handling in this crate works on the calendar-date component
//! only, in canonical ISO `YYYY-MM-DD` form. Report dates arrive from the
//! backend with a time component attached; the time of day is always
//! discarded before comparing.

use chrono::{NaiveDate, Weekday};

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD`, optionally followed by a `T`- or space-separated
/// time component which is ignored. Returns `None` for anything else.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, ISO_DATE).ok()
}

/// Inclusive date-range check for report filtering. Either bound may be
/// open. An unparseable date never falls inside any range.
pub fn in_date_range(date: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let Some(date) = parse_calendar_date(date) else {
        return false;
    };
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

/// Full weekday name, matching the schedule table's column names.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Resolves a full or three-letter weekday name, ignoring case.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
