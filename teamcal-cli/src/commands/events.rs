use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::category::EventCategory;
use teamcal_core::event::Event;

use crate::render::render_event;

pub fn run(events: &[&Event], categories: &[EventCategory]) -> Result<()> {
    println!("{}", render(events, categories));
    Ok(())
}

/// Events grouped under their anchor date, ids shown for `edit`/`delete`.
pub fn render(events: &[&Event], categories: &[EventCategory]) -> String {
    if events.is_empty() {
        return "No events found".dimmed().to_string();
    }

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.date, e.start_time));

    let mut lines = Vec::new();
    let mut current_date = None;

    for event in sorted {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(event.date.format("%a %b %-d, %Y").bold().to_string());
            current_date = Some(event.date);
        }
        lines.push(format!(
            "  {} {}",
            render_event(event, categories),
            format!("#{}", event.id).dimmed()
        ));
    }

    lines.join("\n")
}
