//! Building events from form input.
//!
//! A form collects a date plus start/end times of day. The draft turns that
//! into an [`Event`] whose `startTime`/`endTime` sit on the chosen date, and
//! enforces the field rules the event invariants depend on.

use chrono::{NaiveDate, NaiveTime};

use crate::color::ColorTag;
use crate::error::{TeamcalError, TeamcalResult};
use crate::event::{DayOfWeek, Event, Recurrence, new_id};

#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    /// Set when editing an existing event; a new id is generated otherwise.
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    /// "HH:MM"
    pub start: String,
    /// "HH:MM"
    pub end: String,
    pub color: Option<ColorTag>,
    pub recurring: Option<Recurrence>,
    pub days_of_week: Vec<DayOfWeek>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub attendees: Vec<String>,
}

impl EventDraft {
    /// Pre-fill a draft from an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone(),
            date: Some(event.date),
            start: event.start_time.format("%H:%M").to_string(),
            end: event.end_time.format("%H:%M").to_string(),
            color: event.color,
            recurring: event.recurring,
            days_of_week: event.days_of_week.clone().unwrap_or_default(),
            category: event.category.clone(),
            location: event.location.clone(),
            attendees: event.attendees.clone().unwrap_or_default(),
        }
    }

    pub fn into_event(self) -> TeamcalResult<Event> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(TeamcalError::InvalidEvent("title is required".into()));
        }

        let date = self
            .date
            .ok_or_else(|| TeamcalError::InvalidEvent("date is required".into()))?;
        let start = parse_time(&self.start)?;
        let end = parse_time(&self.end)?;

        if end <= start {
            return Err(TeamcalError::InvalidEvent(format!(
                "end time {} must be after start time {}",
                self.end.trim(),
                self.start.trim()
            )));
        }

        let days_of_week = match self.recurring {
            Some(Recurrence::Weekly) if self.days_of_week.is_empty() => {
                return Err(TeamcalError::InvalidEvent(
                    "weekly events need at least one day of the week".into(),
                ));
            }
            Some(Recurrence::Weekly) => Some(self.days_of_week),
            _ => None,
        };

        Ok(Event {
            id: self.id.unwrap_or_else(new_id),
            title,
            description: non_empty(self.description),
            date,
            start_time: date.and_time(start),
            end_time: date.and_time(end),
            color: self.color,
            recurring: self.recurring,
            days_of_week,
            category: non_empty(self.category),
            location: non_empty(self.location),
            attendees: (!self.attendees.is_empty()).then_some(self.attendees),
        })
    }
}

/// Parse a form time of day ("HH:MM" or "HH:MM:SS").
pub fn parse_time(s: &str) -> TeamcalResult<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| TeamcalError::InvalidTime(s.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
