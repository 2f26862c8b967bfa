//! Entry date references ("yesterday", "last monday", "2025-01-17", ...)

use crate::error::{JournalError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

/// A user-supplied date for an entry, resolved relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// Today shifted by a number of days (yesterday = -1, tomorrow = 1)
    Relative(i64),
    /// Occurrence of a weekday relative to today
    Weekday(Weekday, WeekdayOffset),
    /// Specific calendar date
    Specific(NaiveDate),
}

/// Which occurrence of a weekday a reference means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayOffset {
    /// Today or the most recent past occurrence
    Current,
    /// Strictly before today
    Last,
    /// Strictly after today
    Next,
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || JournalError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Relative(0)),
            "yesterday" => return Ok(DateReference::Relative(-1)),
            "tomorrow" => return Ok(DateReference::Relative(1)),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            let day = parse_weekday(rest.trim()).ok_or_else(invalid)?;
            return Ok(DateReference::Weekday(day, WeekdayOffset::Last));
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            let day = parse_weekday(rest.trim()).ok_or_else(invalid)?;
            return Ok(DateReference::Weekday(day, WeekdayOffset::Next));
        }
        if let Some(day) = parse_weekday(&normalized) {
            return Ok(DateReference::Weekday(day, WeekdayOffset::Current));
        }

        NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
            .map(DateReference::Specific)
            .map_err(|_| invalid())
    }

    /// Resolve this reference to a calendar day
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            DateReference::Relative(days) => today + Duration::days(days),
            DateReference::Weekday(target, offset) => find_weekday(today, target, offset),
            DateReference::Specific(date) => date,
        }
    }

    /// Turn the reference into an entry timestamp.
    ///
    /// "today" keeps the current time of day; any other day starts at local
    /// midnight in the timezone of `now`.
    pub fn to_entry_date<Tz: TimeZone>(&self, now: DateTime<Tz>) -> DateTime<Utc> {
        if *self == DateReference::Relative(0) {
            return now.with_timezone(&Utc);
        }

        let day = self.resolve(now.date_naive());
        let midnight = day.and_time(NaiveTime::MIN);
        match now.timezone().from_local_datetime(&midnight).earliest() {
            Some(local) => local.with_timezone(&Utc),
            // midnight skipped by a DST jump
            None => midnight.and_utc(),
        }
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let day = match name {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

fn find_weekday(today: NaiveDate, target: Weekday, offset: WeekdayOffset) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let target = target.num_days_from_monday() as i64;
    let back = (current - target).rem_euclid(7);
    let forward = (target - current).rem_euclid(7);

    match offset {
        WeekdayOffset::Current => today - Duration::days(back),
        WeekdayOffset::Last => today - Duration::days(if back == 0 { 7 } else { back }),
        WeekdayOffset::Next => today + Duration::days(if forward == 0 { 7 } else { forward }),
    }
}
