//! iCalendar export.
//!
//! Output is line-compatible with the dashboard's browser exporter rather
//! than a full RFC 5545 writer: `\n` line endings, no DTSTAMP, no escaping
//! of text values, and timestamps that present naive wall-clock times with
//! a `Z` suffix.

use chrono::NaiveDateTime;

use crate::event::Event;

const PRODID: &str = "-//CALENDAR//EN";

/// Generate a VCALENDAR with one VEVENT per event.
pub fn generate_ics(events: &[&Event]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
    ];

    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", event.id));
        lines.push(format!("DTSTART:{}", stamp(event.start_time)));
        lines.push(format!("DTEND:{}", stamp(event.end_time)));
        lines.push(format!("SUMMARY:{}", event.title));
        // Blank text counts as absent
        if let Some(desc) = event.description.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("DESCRIPTION:{}", desc));
        }
        if let Some(loc) = event.location.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("LOCATION:{}", loc));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}

/// `2025-06-13T10:00:00` becomes `2025061310000000Z`: separators and the `T`
/// dropped, then `00Z` appended. No timezone conversion happens.
fn stamp(time: NaiveDateTime) -> String {
    format!("{}00Z", time.format("%Y%m%d%H%M%S"))
}
