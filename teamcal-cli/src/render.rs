//! Terminal styling shared by the commands.
//!
//! [`paint`] colors text in a tag's palette and [`fit`] pads or cuts labels
//! to a grid cell. The [`Render`] impls give each record a one-line summary.

use owo_colors::OwoColorize;
use teamcal_core::category::EventCategory;
use teamcal_core::color::{ColorTag, resolve_color};
use teamcal_core::document::Document;
use teamcal_core::event::{Event, Recurrence};
use teamcal_core::member::Member;
use teamcal_core::store::{Notice, NoticeKind};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Paint text in a palette color. `None` is the neutral primary style.
pub fn paint(tag: Option<ColorTag>, text: &str) -> String {
    match tag {
        Some(ColorTag::Blue) => text.blue().to_string(),
        Some(ColorTag::Green) => text.green().to_string(),
        Some(ColorTag::Red) => text.red().to_string(),
        Some(ColorTag::Purple) => text.magenta().to_string(),
        Some(ColorTag::Yellow) => text.yellow().to_string(),
        None => text.bold().to_string(),
    }
}

/// Cut `text` to at most `width` characters, marking the cut with "…".
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Pad to exactly `width` characters (truncating if needed).
pub fn fit(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width), width = width)
}

impl Render for Notice {
    fn render(&self) -> String {
        match self.kind {
            NoticeKind::Info => format!("{} {}", "✓".green(), self.description),
            NoticeKind::Destructive => format!("{} {}", "✗".red(), self.description),
        }
    }
}

impl Render for EventCategory {
    fn render(&self) -> String {
        let swatch = paint(Some(self.color), "●");
        match &self.description {
            Some(desc) => format!("{} {} {}", swatch, self.name, desc.dimmed()),
            None => format!("{} {}", swatch, self.name),
        }
    }
}

impl Render for Member {
    fn render(&self) -> String {
        format!(
            "{} {} {} {} {}",
            format!("[{}]", self.initials()).bold(),
            self.name,
            self.email.dimmed(),
            self.phone.dimmed(),
            format!("({}, joined {})", self.role, self.joined_date).dimmed()
        )
    }
}

impl Render for Document {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            format!("{:<5}", self.kind).cyan(),
            self.name,
            format!("{} · {}", self.size, self.owner).dimmed(),
            self.modified_date.format("%b %-d, %Y").dimmed()
        )
    }
}

/// One-line event summary colored by category (falling back to the event's color).
pub fn render_event(event: &Event, categories: &[EventCategory]) -> String {
    let color = resolve_color(event, categories);
    let mut line = format!(
        "{} {}",
        event.time_range_label().dimmed(),
        paint(color, &event.title)
    );

    if let Some(recurrence) = describe_recurrence(event) {
        line.push_str(&format!(" {}", recurrence.dimmed()));
    }
    if let Some(ref location) = event.location {
        line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
    }
    if let Some(category) = event
        .category
        .as_deref()
        .and_then(|id| categories.iter().find(|c| c.id == id))
    {
        line.push_str(&format!(" {}", format!("[{}]", category.name).dimmed()));
    }
    line
}

fn describe_recurrence(event: &Event) -> Option<String> {
    match event.recurring? {
        Recurrence::Weekly => {
            let days: Vec<&str> = event
                .days_of_week
                .iter()
                .flatten()
                .map(|d| d.short_label())
                .collect();
            Some(format!("(weekly: {})", days.join(", ")))
        }
        Recurrence::Monthly => Some(format!("(monthly on day {})", event.date.format("%-d"))),
    }
}
