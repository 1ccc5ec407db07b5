//! CSV export.

use crate::event::Event;

const HEADER: &str = "Title,Description,Start Time,End Time,Category,Location";

/// One header line, then one line per event with every field quoted.
///
/// Absent fields are empty quoted strings. Embedded quotes are doubled.
/// Rows are separated by `\n` with no newline after the last row.
pub fn generate_csv(events: &[&Event]) -> String {
    let rows: Vec<String> = events
        .iter()
        .map(|event| {
            let start = format_time(event.start_time);
            let end = format_time(event.end_time);
            let fields = [
                event.title.as_str(),
                event.description.as_deref().unwrap_or(""),
                start.as_str(),
                end.as_str(),
                event.category.as_deref().unwrap_or(""),
                event.location.as_deref().unwrap_or(""),
            ];
            fields.map(quote).join(",")
        })
        .collect();

    format!("{}\n{}", HEADER, rows.join("\n"))
}

fn format_time(time: chrono::NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
