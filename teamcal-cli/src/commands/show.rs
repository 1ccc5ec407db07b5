use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::category::EventCategory;
use teamcal_core::color::resolve_color;
use teamcal_core::event::{Event, Recurrence};

use crate::render::paint;

pub fn run(event: &Event, categories: &[EventCategory]) -> Result<()> {
    println!("{}", render(event, categories));
    Ok(())
}

/// Everything known about one event.
pub fn render(event: &Event, categories: &[EventCategory]) -> String {
    let category = event
        .category
        .as_deref()
        .and_then(|id| categories.iter().find(|c| c.id == id));

    let mut heading = paint(resolve_color(event, categories), &event.title)
        .bold()
        .to_string();
    if let Some(category) = category {
        heading.push_str(&format!(" {}", format!("[{}]", category.name).dimmed()));
    }

    let mut lines = vec![
        heading,
        format!(
            "  {} - {}",
            event.start_time.format("%-I:%M %p"),
            event.end_time.format("%-I:%M %p")
        ),
        format!("  {}", schedule(event)),
    ];

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("  @ {}", location));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("  {}", description.dimmed()));
    }

    let attendees = event.attendees.as_deref().unwrap_or_default();
    if !attendees.is_empty() {
        lines.push(format!("  Attendees ({})", attendees.len()));
        for attendee in attendees {
            lines.push(format!("    {}", attendee));
        }
    }

    lines.push(format!("  {}", format!("#{}", event.id).dimmed()));
    lines.join("\n")
}

/// "Weekly on Mon, Wed", "Monthly on the 13th" or the calendar date.
fn schedule(event: &Event) -> String {
    match event.recurring {
        Some(Recurrence::Weekly) => {
            let days: Vec<&str> = event
                .days_of_week
                .iter()
                .flatten()
                .map(|d| d.short_label())
                .collect();
            format!("Weekly on {}", days.join(", "))
        }
        Some(Recurrence::Monthly) => format!("Monthly on the {}", ordinal(event.date.format("%-d").to_string())),
        None => event.date.format("%B %-d, %Y").to_string(),
    }
}

fn ordinal(day: String) -> String {
    let suffix = match day.as_str() {
        "11" | "12" | "13" => "th",
        d if d.ends_with('1') => "st",
        d if d.ends_with('2') => "nd",
        d if d.ends_with('3') => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}
