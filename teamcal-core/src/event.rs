//! Calendar events.
//!
//! The JSON shape of [`Event`] is also the shape of the `.json` export, so
//! field names and the omission of absent optional fields are part of the
//! export contract.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::color::ColorTag;

/// A calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Anchor date. For recurring events this is where the series was defined.
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurrence>,
    /// Only meaningful for weekly recurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<DayOfWeek>>,
    /// Id of an [`EventCategory`](crate::category::EventCategory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Weekly,
    Monthly,
}

/// The recurrence semantics that apply to one event.
///
/// Exactly one variant applies per event, selected by `recurring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceRule<'a> {
    Once(NaiveDate),
    Weekly(&'a [DayOfWeek]),
    Monthly { day: u32 },
}

/// Weekday names as they appear in `daysOfWeek` ("monday", "tuesday", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Sunday-first, matching the calendar grid's column order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }

    /// Three-letter column header ("Sun", "Mon", ...)
    pub fn short_label(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sun",
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.as_str() == s || d.short_label().eq_ignore_ascii_case(&s))
            .ok_or_else(|| format!("Unknown weekday '{}'", s))
    }
}

/// Generate a fresh id for an event, member or category.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Event {
    pub fn rule(&self) -> RecurrenceRule<'_> {
        match self.recurring {
            None => RecurrenceRule::Once(self.date),
            Some(Recurrence::Weekly) => {
                RecurrenceRule::Weekly(self.days_of_week.as_deref().unwrap_or_default())
            }
            Some(Recurrence::Monthly) => RecurrenceRule::Monthly {
                day: self.date.day(),
            },
        }
    }

    /// Hour-of-day (0-23) of the start time; used to place the event in an hourly slot.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Reschedule onto another date, keeping the time-of-day of start and end.
    pub fn moved_to(&self, date: NaiveDate) -> Event {
        Event {
            date,
            start_time: date.and_time(self.start_time.time()),
            end_time: date.and_time(self.end_time.time()),
            ..self.clone()
        }
    }

    /// "10:00 - 11:30"
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
