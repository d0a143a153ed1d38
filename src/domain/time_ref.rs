//! Date references accepted by `--date`

use crate::domain::entry::parse_date;
use crate::error::{DaytrackError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date expression resolved against a base date (normally today)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence strictly before the base date
    LastWeekday(Weekday),
    /// Occurrence strictly after the base date
    NextWeekday(Weekday),
    /// `dd.mm.yyyy`
    Exact(NaiveDate),
}

impl TimeReference {
    /// Parse a date reference
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || DaytrackError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return weekday_from_name(rest.trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return weekday_from_name(rest.trim())
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = weekday_from_name(&normalized) {
            return Ok(TimeReference::Weekday(day));
        }

        parse_date(&normalized)
            .map(TimeReference::Exact)
            .ok_or_else(invalid)
    }

    /// Resolve to a calendar date
    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base,
            TimeReference::Yesterday => base - Duration::days(1),
            TimeReference::Tomorrow => base + Duration::days(1),
            TimeReference::Weekday(day) => base - Duration::days(days_back(base, *day, 0)),
            TimeReference::LastWeekday(day) => base - Duration::days(days_back(base, *day, 7)),
            TimeReference::NextWeekday(day) => {
                base + Duration::days(days_forward(base, *day))
            }
            TimeReference::Exact(date) => *date,
        }
    }
}

/// Days from the previous `target` to `base`; `same_day` is used when they match
fn days_back(base: NaiveDate, target: Weekday, same_day: i64) -> i64 {
    let diff = (base.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    if diff == 0 {
        same_day
    } else {
        diff as i64
    }
}

fn days_forward(base: NaiveDate, target: Weekday) -> i64 {
    let diff = (target.num_days_from_monday() + 7 - base.weekday().num_days_from_monday()) % 7;
    if diff == 0 {
        7
    } else {
        diff as i64
    }
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
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
