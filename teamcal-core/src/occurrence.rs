//! Deciding which events occur on a given day.
//!
//! - One-time events occur on their anchor `date` only.
//! - Weekly events occur on every date whose weekday is in `daysOfWeek`, in
//!   both directions from the anchor. The anchor date itself is not consulted.
//! - Monthly events occur on every date sharing the anchor's day-of-month,
//!   in both directions. Months without that day are skipped.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::{TeamcalError, TeamcalResult};
use crate::event::{DayOfWeek, Event, RecurrenceRule};

/// Whether `event` occurs on `date`.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    match event.rule() {
        RecurrenceRule::Once(anchor) => anchor == date,
        RecurrenceRule::Weekly(days) => days.contains(&DayOfWeek::of(date)),
        RecurrenceRule::Monthly { day } => date.day() == day,
    }
}

/// All events occurring on `date`, in input order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| occurs_on(e, date)).collect()
}

/// Events occurring on `date` that start within `hour` (0-23).
pub fn events_in_hour(events: &[Event], date: NaiveDate, hour: u32) -> Vec<&Event> {
    events_on(events, date)
        .into_iter()
        .filter(|e| e.start_hour() == hour)
        .collect()
}

/// Parse a caller-supplied date.
///
/// Accepts `YYYY-MM-DD` or a full `YYYY-MM-DDTHH:MM[:SS]` date-time, in which
/// case only the calendar date is kept.
pub fn parse_date(s: &str) -> TeamcalResult<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| TeamcalError::InvalidDate(s.to_string()))
}
