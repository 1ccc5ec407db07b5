use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use teamcal_core::stats::DashboardStats;
use teamcal_core::store::AppState;

use crate::render::render_event;

pub fn run(state: &AppState, today: NaiveDate) -> Result<()> {
    println!("{}", render(state, today));
    Ok(())
}

pub fn render(state: &AppState, today: NaiveDate) -> String {
    let stats = DashboardStats::compute(state, today);

    let mut lines = vec![
        format!("{}", "Dashboard".bold()),
        String::new(),
        format!("  {:<16}{}", "Total events", stats.total_events),
        format!("  {:<16}{}", "Team members", stats.members),
        format!("  {:<16}{}", "Documents", stats.documents),
        format!("  {:<16}{}", "This month", stats.this_month),
        String::new(),
        format!("{}", today.format("Today, %A %B %-d").bold()),
    ];

    let (shown, more) = stats.today_preview();
    if shown.is_empty() {
        lines.push(format!("  {}", "No events today".dimmed()));
    }
    for event in shown {
        lines.push(format!("  {}", render_event(event, state.categories())));
    }
    if more > 0 {
        lines.push(format!("  {}", format!("+{} more", more).dimmed()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcal_core::seed::sample_events;

    #[test]
    fn shows_counts_and_todays_events() {
        let state = AppState::seeded().with_events(sample_events());
        let out = render(&state, NaiveDate::from_ymd_opt(2025, 6, 13).unwrap());

        assert!(out.contains("Total events    5"));
        assert!(out.contains("Team members    3"));
        assert!(out.contains("Team Meeting"));
        assert!(out.contains("Little Tigers Karate"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn quiet_day() {
        let state = AppState::seeded().with_events(sample_events());
        let out = render(&state, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        assert!(out.contains("No events today"));
    }

    #[test]
    fn busy_day_is_cut_to_a_preview() {
        let mut events = sample_events();
        let mut extra = events[0].clone();
        extra.id = "extra".to_string();
        extra.title = "Standup".to_string();
        events.push(extra);

        let state = AppState::seeded().with_events(events);
        let out = render(&state, NaiveDate::from_ymd_opt(2025, 6, 13).unwrap());
        assert!(out.contains("+1 more"));
    }
}
