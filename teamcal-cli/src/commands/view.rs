use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use teamcal_core::category::EventCategory;
use teamcal_core::color::resolve_color;
use teamcal_core::event::{DayOfWeek, Event};
use teamcal_core::view::{CalendarView, hour_label, hour_slots, month_cells, week_days};
use teamcal_core::{events_in_hour, events_on};

use crate::render::{fit, paint, render_event};

/// Width of one day column in month and week layouts.
const CELL_WIDTH: usize = 14;
/// Event lines shown per month cell before "+N more".
const EVENTS_PER_CELL: usize = 3;

pub fn run(
    view: CalendarView,
    date: NaiveDate,
    today: NaiveDate,
    events: &[&Event],
    categories: &[EventCategory],
) -> Result<()> {
    // The layouts work on owned slices so occurrence lookups can borrow them
    let events: Vec<Event> = events.iter().map(|e| (*e).clone()).collect();
    println!("{}", render(view, date, today, &events, categories));
    Ok(())
}

pub fn render(
    view: CalendarView,
    date: NaiveDate,
    today: NaiveDate,
    events: &[Event],
    categories: &[EventCategory],
) -> String {
    let body = match view {
        CalendarView::Month => render_month(date, today, events, categories),
        CalendarView::Week => render_week(date, today, events, categories),
        CalendarView::Day => render_day(date, events, categories),
    };
    format!("{}\n\n{}", view.title(date).bold(), body)
}

fn header_row() -> String {
    DayOfWeek::ALL
        .iter()
        .map(|d| fit(d.short_label(), CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_month(
    date: NaiveDate,
    today: NaiveDate,
    events: &[Event],
    categories: &[EventCategory],
) -> String {
    let mut lines = vec![header_row().bold().to_string()];

    for week in month_cells(events, date, today) {
        let day_numbers: Vec<String> = week
            .iter()
            .map(|cell| {
                let label = fit(&cell.date.format("%-d").to_string(), CELL_WIDTH);
                if cell.is_today {
                    label.reversed().to_string()
                } else if !cell.in_month {
                    label.dimmed().to_string()
                } else {
                    label
                }
            })
            .collect();
        lines.push(day_numbers.join(" "));

        for slot in 0..=EVENTS_PER_CELL {
            let row: Vec<String> = week
                .iter()
                .map(|cell| match cell.events.get(slot) {
                    Some(event) if slot < EVENTS_PER_CELL => {
                        paint(resolve_color(event, categories), &fit(&event.title, CELL_WIDTH))
                    }
                    _ if slot == EVENTS_PER_CELL && cell.events.len() > EVENTS_PER_CELL => {
                        let more = format!("+{} more", cell.events.len() - EVENTS_PER_CELL);
                        fit(&more, CELL_WIDTH).dimmed().to_string()
                    }
                    _ => fit("", CELL_WIDTH),
                })
                .collect();

            // Skip rows with nothing in them
            if week.iter().any(|cell| cell.events.len() > slot) {
                lines.push(row.join(" "));
            }
        }
    }

    lines.join("\n")
}

pub fn render_week(
    date: NaiveDate,
    today: NaiveDate,
    events: &[Event],
    categories: &[EventCategory],
) -> String {
    let days = week_days(date);
    let hour_width = 9;

    let header: Vec<String> = days
        .iter()
        .map(|d| {
            let label = fit(&d.format("%a %-d").to_string(), CELL_WIDTH);
            if *d == today {
                label.reversed().to_string()
            } else {
                label
            }
        })
        .collect();
    let mut lines = vec![format!("{} {}", fit("", hour_width), header.join(" "))];

    for (hour, row) in hour_slots(events, &days).into_iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| match slot.as_slice() {
                [] => fit("", CELL_WIDTH),
                [event] => paint(resolve_color(event, categories), &fit(&event.title, CELL_WIDTH)),
                [event, rest @ ..] => {
                    let title = format!("{} +{}", event.title, rest.len());
                    paint(resolve_color(event, categories), &fit(&title, CELL_WIDTH))
                }
            })
            .collect();

        lines.push(format!(
            "{} {}",
            fit(&hour_label(hour as u32), hour_width).dimmed(),
            cells.join(" ")
        ));
    }

    lines.join("\n")
}

pub fn render_day(date: NaiveDate, events: &[Event], categories: &[EventCategory]) -> String {
    if events_on(events, date).is_empty() {
        return "No events scheduled".dimmed().to_string();
    }

    let mut lines = Vec::new();
    for hour in 0..24 {
        let label = fit(&hour_label(hour), 9);
        let in_hour = events_in_hour(events, date, hour);

        if in_hour.is_empty() {
            lines.push(label.dimmed().to_string());
        } else {
            for (i, event) in in_hour.iter().enumerate() {
                let gutter = if i == 0 { label.clone() } else { fit("", 9) };
                lines.push(format!("{} {}", gutter, render_event(event, categories)));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcal_core::seed::{default_categories, sample_events};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_shows_every_day_and_events() {
        let events = sample_events();
        let out = render_month(date(2025, 6, 1), date(2025, 6, 13), &events, &default_categories());

        assert!(out.contains("Sun"));
        assert!(out.contains("30"));
        assert!(out.contains("Team Meeting"));
        assert!(out.contains("Yoga Class"));
    }

    #[test]
    fn busy_month_cells_collapse_into_more() {
        // June 13 has Team Meeting, Project Review and Karate
        let mut events = sample_events();
        let out = render_month(date(2025, 6, 1), date(2025, 6, 1), &events, &default_categories());
        assert!(out.contains("Little Tigers"));
        assert!(!out.contains(" more"));

        let mut standup = events[0].clone();
        standup.id = "standup".to_string();
        standup.title = "Standup".to_string();
        events.push(standup);

        let out = render_month(date(2025, 6, 1), date(2025, 6, 1), &events, &default_categories());
        assert!(out.contains("+1 more"));
    }

    #[test]
    fn week_places_events_in_hour_rows() {
        let events = sample_events();
        let out = render_week(date(2025, 6, 13), date(2025, 6, 13), &events, &default_categories());

        let ten_am = out.lines().find(|l| l.contains("10:00 AM")).unwrap();
        assert!(ten_am.contains("Team Meeting"));
        let eight_am = out.lines().find(|l| l.contains("8:00 AM")).unwrap();
        assert!(eight_am.contains("Yoga Class"));
        assert_eq!(out.lines().count(), 25);
    }

    #[test]
    fn empty_day_says_so() {
        let out = render_day(date(2025, 6, 14), &sample_events(), &default_categories());
        assert!(out.contains("No events scheduled"));
    }

    #[test]
    fn day_lists_events_with_times() {
        let out = render_day(date(2025, 6, 13), &sample_events(), &default_categories());
        assert!(out.contains("10:00 - 11:30"));
        assert!(out.contains("Project Review"));
        assert!(out.contains("(weekly: Mon, Wed, Fri)"));
    }
}
