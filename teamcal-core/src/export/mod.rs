//! Calendar export to iCalendar, CSV and JSON text.
//!
//! The serializers are pure text producers. Writing the result somewhere
//! (a download, a file) is up to the caller, which names the output with
//! [`ExportFormat::file_name`].

mod csv;
mod ics;
mod json;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TeamcalError, TeamcalResult};
use crate::event::Event;

pub use csv::generate_csv;
pub use ics::generate_ics;
pub use json::{generate_json, parse_events};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Ics,
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Ics, ExportFormat::Csv, ExportFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "ics",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// "calendar.ics", "calendar.csv", "calendar.json"
    pub fn file_name(&self) -> String {
        format!("calendar.{}", self.extension())
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "text/calendar",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Menu label, e.g. "iCalendar (.ics)"
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "iCalendar (.ics)",
            ExportFormat::Csv => "CSV (.csv)",
            ExportFormat::Json => "JSON (.json)",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = TeamcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ics" => Ok(ExportFormat::Ics),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(TeamcalError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A serialized calendar ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl Export {
    pub fn new<'a>(events: impl IntoIterator<Item = &'a Event>, format: ExportFormat) -> TeamcalResult<Self> {
        let events: Vec<&Event> = events.into_iter().collect();
        Ok(Export {
            format,
            file_name: format.file_name(),
            mime_type: format.mime_type(),
            content: serialize(&events, format)?,
        })
    }
}

/// Serialize events in the given format.
pub fn serialize(events: &[&Event], format: ExportFormat) -> TeamcalResult<String> {
    match format {
        ExportFormat::Ics => Ok(generate_ics(events)),
        ExportFormat::Csv => Ok(generate_csv(events)),
        ExportFormat::Json => generate_json(events),
    }
}

/// Serialize events for a format tag such as "ics".
///
/// Unknown tags fail with [`TeamcalError::UnsupportedFormat`].
pub fn serialize_as(events: &[&Event], format: &str) -> TeamcalResult<String> {
    serialize(events, format.parse()?)
}
