//! Dashboard summary numbers.

use chrono::NaiveDate;

use crate::event::Event;
use crate::occurrence::events_on;
use crate::store::AppState;
use crate::view::is_same_month;

/// How many of today's events the dashboard lists before "+N more".
pub const TODAY_PREVIEW: usize = 3;

#[derive(Debug)]
pub struct DashboardStats<'a> {
    pub total_events: usize,
    pub members: usize,
    pub documents: usize,
    /// Events whose anchor date falls in the current month
    pub this_month: usize,
    /// Events occurring today, recurrences included
    pub today: Vec<&'a Event>,
}

impl<'a> DashboardStats<'a> {
    pub fn compute(state: &'a AppState, today: NaiveDate) -> Self {
        DashboardStats {
            total_events: state.events().len(),
            members: state.members().len(),
            documents: state.documents().len(),
            this_month: state
                .events()
                .iter()
                .filter(|e| is_same_month(e.date, today))
                .count(),
            today: events_on(state.events(), today),
        }
    }

    /// The first few of today's events, and how many were left out.
    pub fn today_preview(&self) -> (&[&'a Event], usize) {
        let shown = self.today.len().min(TODAY_PREVIEW);
        (&self.today[..shown], self.today.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{karate, team_meeting};

    #[test]
    fn counts_collections_and_month() {
        let mut old = team_meeting();
        old.id = "old".to_string();
        old.date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();

        let state = AppState::seeded().with_events(vec![team_meeting(), karate(), old]);
        let stats = DashboardStats::compute(&state, NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());

        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.members, 3);
        assert_eq!(stats.documents, 3);
        assert_eq!(stats.this_month, 2);
    }

    #[test]
    fn today_includes_recurring_occurrences() {
        let state = AppState::seeded().with_events(vec![team_meeting(), karate()]);

        // Wednesday: only the weekly series
        let stats = DashboardStats::compute(&state, NaiveDate::from_ymd_opt(2025, 6, 18).unwrap());
        let titles: Vec<_> = stats.today.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Little Tigers Karate"]);
    }

    #[test]
    fn preview_caps_at_three() {
        let events: Vec<Event> = (0..5)
            .map(|i| {
                let mut e = team_meeting();
                e.id = i.to_string();
                e
            })
            .collect();
        let state = AppState::seeded().with_events(events);
        let stats = DashboardStats::compute(&state, NaiveDate::from_ymd_opt(2025, 6, 13).unwrap());

        let (shown, more) = stats.today_preview();
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 2);
    }
}
