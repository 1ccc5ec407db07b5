//! Event categories.

use serde::{Deserialize, Serialize};

use crate::color::ColorTag;
use crate::event::Event;

/// A user-defined tag grouping events for filtering and default color.
///
/// Events refer to categories by id only; see [`crate::store`] for how
/// deleting a category clears those references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: String,
    pub name: String,
    pub color: ColorTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventCategory {
    pub fn new(id: &str, name: &str, color: ColorTag, description: Option<&str>) -> Self {
        EventCategory {
            id: id.to_string(),
            name: name.to_string(),
            color,
            description: description.map(str::to_string),
        }
    }
}

/// Keep the events whose category is among `selected`.
///
/// An empty selection means "no filter" and keeps everything. Events
/// without a category never match a non-empty selection.
pub fn filter_by_categories<'a>(events: &'a [Event], selected: &[String]) -> Vec<&'a Event> {
    if selected.is_empty() {
        return events.iter().collect();
    }

    events
        .iter()
        .filter(|event| {
            event
                .category
                .as_ref()
                .is_some_and(|category| selected.contains(category))
        })
        .collect()
}

/// Flip one category id in a selection, returning the new selection.
pub fn toggle_selection(selected: &[String], category_id: &str) -> Vec<String> {
    if selected.iter().any(|id| id == category_id) {
        selected
            .iter()
            .filter(|id| *id != category_id)
            .cloned()
            .collect()
    } else {
        let mut next = selected.to_vec();
        next.push(category_id.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{karate, team_meeting};

    fn categorized() -> Vec<Event> {
        let mut work = team_meeting();
        work.category = Some("work".to_string());
        let mut social = karate();
        social.category = Some("social".to_string());
        let mut plain = team_meeting();
        plain.id = "3".to_string();
        vec![work, social, plain]
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let events = categorized();
        assert_eq!(filter_by_categories(&events, &[]).len(), 3);
    }

    #[test]
    fn selection_keeps_matching_categories_only() {
        let events = categorized();
        let filtered = filter_by_categories(&events, &["social".to_string()]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Little Tigers Karate");
    }

    #[test]
    fn uncategorized_events_never_match_a_selection() {
        let events = categorized();
        let filtered = filter_by_categories(&events, &["work".to_string(), "social".to_string()]);

        let ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let selected = toggle_selection(&[], "work");
        assert_eq!(selected, vec!["work".to_string()]);

        let selected = toggle_selection(&selected, "social");
        assert_eq!(selected, vec!["work".to_string(), "social".to_string()]);

        let selected = toggle_selection(&selected, "work");
        assert_eq!(selected, vec!["social".to_string()]);
    }
}
