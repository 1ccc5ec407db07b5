//! Session state and the pure transitions over it.

use chrono::NaiveDate;

use crate::category::{EventCategory, filter_by_categories, toggle_selection};
use crate::document::Document;
use crate::error::{TeamcalError, TeamcalResult};
use crate::event::Event;
use crate::export::{Export, ExportFormat};
use crate::member::Member;
use crate::seed;
use crate::view::CalendarView;

use super::command::Command;
use super::notice::Notice;

/// Everything a session knows. Transitions never mutate a state in place;
/// [`AppState::apply`] returns the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    events: Vec<Event>,
    members: Vec<Member>,
    documents: Vec<Document>,
    categories: Vec<EventCategory>,
    current_view: CalendarView,
    selected_categories: Vec<String>,
}

/// Result of applying a command.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub notice: Option<Notice>,
}

impl AppState {
    /// A fresh session: default categories, members and documents, no events.
    pub fn seeded() -> Self {
        AppState {
            members: seed::default_members(),
            documents: seed::default_documents(),
            categories: seed::default_categories(),
            ..Default::default()
        }
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_view(mut self, view: CalendarView) -> Self {
        self.current_view = view;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn categories(&self) -> &[EventCategory] {
        &self.categories
    }

    pub fn current_view(&self) -> CalendarView {
        self.current_view
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&EventCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Events passing the active category filter.
    pub fn filtered_events(&self) -> Vec<&Event> {
        filter_by_categories(&self.events, &self.selected_categories)
    }

    /// Export the events passing the active category filter.
    pub fn export(&self, format: ExportFormat) -> TeamcalResult<Export> {
        Export::new(self.filtered_events(), format)
    }

    pub fn apply(&self, command: Command) -> TeamcalResult<Transition> {
        let mut next = self.clone();
        let notice = match command {
            Command::AddEvent(event) => {
                if next.event(&event.id).is_some() {
                    return Err(TeamcalError::DuplicateId(event.id));
                }
                let notice = Notice::info(
                    "Event created",
                    format!("\"{}\" has been added to your calendar.", event.title),
                );
                next.events.push(event);
                Some(notice)
            }
            Command::UpdateEvent(event) => {
                let slot = next
                    .events
                    .iter_mut()
                    .find(|e| e.id == event.id)
                    .ok_or_else(|| TeamcalError::EventNotFound(event.id.clone()))?;
                let notice = Notice::info(
                    "Event updated",
                    format!("\"{}\" has been updated.", event.title),
                );
                *slot = event;
                Some(notice)
            }
            Command::DeleteEvent(id) => {
                let removed = remove_by(&mut next.events, |e| e.id == id)
                    .ok_or(TeamcalError::EventNotFound(id))?;
                Some(Notice::destructive(
                    "Event deleted",
                    format!("\"{}\" has been removed from your calendar.", removed.title),
                ))
            }
            Command::MoveEvent { id, date } => {
                let moved = move_event(&mut next.events, &id, date)?;
                Some(Notice::info(
                    "Event updated",
                    format!("\"{}\" has been moved to {}.", moved.title, date.format("%b %-d, %Y")),
                ))
            }
            Command::AddMember(member) => {
                if next.members.iter().any(|m| m.id == member.id) {
                    return Err(TeamcalError::DuplicateId(member.id));
                }
                let notice = Notice::info(
                    "Member added",
                    format!("{} has been added to the team.", member.name),
                );
                next.members.push(member);
                Some(notice)
            }
            Command::UpdateMember(member) => {
                let slot = next
                    .members
                    .iter_mut()
                    .find(|m| m.id == member.id)
                    .ok_or_else(|| TeamcalError::MemberNotFound(member.id.clone()))?;
                let notice = Notice::info(
                    "Member updated",
                    format!("{}'s information has been updated.", member.name),
                );
                *slot = member;
                Some(notice)
            }
            Command::DeleteMember(id) => {
                let removed = remove_by(&mut next.members, |m| m.id == id)
                    .ok_or(TeamcalError::MemberNotFound(id))?;
                Some(Notice::destructive(
                    "Member removed",
                    format!("{} has been removed from the team.", removed.name),
                ))
            }
            Command::AddCategory(category) => {
                if next.category(&category.id).is_some() {
                    return Err(TeamcalError::DuplicateId(category.id));
                }
                let notice = Notice::info(
                    "Category created",
                    format!("\"{}\" category has been added.", category.name),
                );
                next.categories.push(category);
                Some(notice)
            }
            Command::UpdateCategory(category) => {
                let slot = next
                    .categories
                    .iter_mut()
                    .find(|c| c.id == category.id)
                    .ok_or_else(|| TeamcalError::CategoryNotFound(category.id.clone()))?;
                let notice = Notice::info(
                    "Category updated",
                    format!("\"{}\" category has been updated.", category.name),
                );
                *slot = category;
                Some(notice)
            }
            Command::DeleteCategory(id) => {
                let removed = remove_by(&mut next.categories, |c| c.id == id)
                    .ok_or_else(|| TeamcalError::CategoryNotFound(id.clone()))?;
                // Events keep existing, only the reference goes
                for event in next.events.iter_mut() {
                    if event.category.as_deref() == Some(id.as_str()) {
                        event.category = None;
                    }
                }
                next.selected_categories.retain(|selected| *selected != id);
                Some(Notice::destructive(
                    "Category deleted",
                    format!("\"{}\" category has been removed.", removed.name),
                ))
            }
            Command::SetView(view) => {
                next.current_view = view;
                None
            }
            Command::SetSelectedCategories(selected) => {
                next.selected_categories = selected;
                None
            }
            Command::ToggleCategory(id) => {
                next.selected_categories = toggle_selection(&next.selected_categories, &id);
                None
            }
        };

        Ok(Transition { state: next, notice })
    }
}

fn remove_by<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    let index = items.iter().position(pred)?;
    Some(items.remove(index))
}

fn move_event(events: &mut [Event], id: &str, date: NaiveDate) -> TeamcalResult<Event> {
    let slot = events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| TeamcalError::EventNotFound(id.to_string()))?;
    *slot = slot.moved_to(date);
    Ok(slot.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{karate, team_meeting};
    use crate::store::notice::NoticeKind;

    fn state() -> AppState {
        AppState::seeded().with_events(vec![team_meeting(), karate()])
    }

    #[test]
    fn test_seeded_session_has_no_events() {
        let state = AppState::seeded();
        assert!(state.events().is_empty());
        assert_eq!(state.categories().len(), 5);
        assert_eq!(state.members().len(), 3);
        assert_eq!(state.documents().len(), 3);
        assert_eq!(state.current_view(), CalendarView::Month);
    }

    #[test]
    fn test_apply_leaves_previous_state_untouched() {
        let before = state();
        let after = before.apply(Command::DeleteEvent("1".to_string())).unwrap().state;

        assert_eq!(before.events().len(), 2);
        assert_eq!(after.events().len(), 1);
    }

    #[test]
    fn test_add_event_appends_and_notifies() {
        let mut event = team_meeting();
        event.id = "new".to_string();
        event.title = "Retro".to_string();

        let transition = state().apply(Command::AddEvent(event)).unwrap();
        assert_eq!(transition.state.events().last().unwrap().id, "new");
        assert_eq!(
            transition.notice,
            Some(Notice::info("Event created", "\"Retro\" has been added to your calendar."))
        );
    }

    #[test]
    fn test_add_event_rejects_duplicate_id() {
        let result = state().apply(Command::AddEvent(team_meeting()));
        assert!(matches!(result, Err(TeamcalError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_update_event_preserves_id_and_position() {
        let mut edited = team_meeting();
        edited.title = "Team Sync".to_string();

        let next = state().apply(Command::UpdateEvent(edited)).unwrap().state;
        assert_eq!(next.events()[0].id, "1");
        assert_eq!(next.events()[0].title, "Team Sync");
        assert_eq!(next.events().len(), 2);
    }

    #[test]
    fn test_update_unknown_event_fails() {
        let mut ghost = team_meeting();
        ghost.id = "ghost".to_string();
        let result = state().apply(Command::UpdateEvent(ghost));
        assert!(matches!(result, Err(TeamcalError::EventNotFound(_))));
    }

    #[test]
    fn test_delete_event_is_destructive_notice() {
        let transition = state().apply(Command::DeleteEvent("2".to_string())).unwrap();
        let notice = transition.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(
            notice.description,
            "\"Little Tigers Karate\" has been removed from your calendar."
        );
        assert!(transition.state.event("2").is_none());
    }

    #[test]
    fn test_move_event_keeps_times() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let next = state()
            .apply(Command::MoveEvent { id: "1".to_string(), date })
            .unwrap()
            .state;

        let moved = next.event("1").unwrap();
        assert_eq!(moved.date, date);
        assert_eq!(moved.start_time.to_string(), "2025-06-20 10:00:00");
    }

    #[test]
    fn test_delete_category_clears_references_but_keeps_events() {
        let mut meeting = team_meeting();
        meeting.category = Some("work".to_string());
        let mut yoga = karate();
        yoga.category = Some("social".to_string());

        let before = AppState::seeded()
            .with_events(vec![meeting, yoga])
            .apply(Command::SetSelectedCategories(vec!["work".to_string(), "social".to_string()]))
            .unwrap()
            .state;

        let after = before.apply(Command::DeleteCategory("work".to_string())).unwrap().state;

        assert_eq!(after.events().len(), 2);
        assert_eq!(after.event("1").unwrap().category, None);
        assert_eq!(after.event("2").unwrap().category.as_deref(), Some("social"));
        assert!(after.category("work").is_none());
        assert_eq!(after.selected_categories(), ["social".to_string()]);
    }

    #[test]
    fn test_delete_unknown_category_fails() {
        let result = state().apply(Command::DeleteCategory("nope".to_string()));
        assert!(matches!(result, Err(TeamcalError::CategoryNotFound(_))));
    }

    #[test]
    fn test_member_lifecycle() {
        let mut member = seed::default_members().remove(0);
        member.id = "4".to_string();
        member.name = "Ana Lima".to_string();

        let added = AppState::seeded().apply(Command::AddMember(member.clone())).unwrap();
        assert_eq!(added.state.members().len(), 4);

        member.phone = "+1 (555) 000-0000".to_string();
        let updated = added.state.apply(Command::UpdateMember(member)).unwrap();
        assert_eq!(
            updated.notice.unwrap().description,
            "Ana Lima's information has been updated."
        );

        let removed = updated.state.apply(Command::DeleteMember("4".to_string())).unwrap();
        assert_eq!(removed.state.members().len(), 3);
        assert!(matches!(
            removed.state.apply(Command::DeleteMember("4".to_string())),
            Err(TeamcalError::MemberNotFound(_))
        ));
    }

    #[test]
    fn test_view_and_filter_changes_are_silent() {
        let transition = state().apply(Command::SetView(CalendarView::Week)).unwrap();
        assert!(transition.notice.is_none());
        assert_eq!(transition.state.current_view(), CalendarView::Week);

        let transition = transition
            .state
            .apply(Command::ToggleCategory("work".to_string()))
            .unwrap();
        assert!(transition.notice.is_none());
        assert_eq!(transition.state.selected_categories(), ["work".to_string()]);
    }

    #[test]
    fn test_export_applies_category_filter() {
        let mut meeting = team_meeting();
        meeting.category = Some("meeting".to_string());

        let state = AppState::seeded()
            .with_events(vec![meeting, karate()])
            .apply(Command::ToggleCategory("meeting".to_string()))
            .unwrap()
            .state;

        let export = state.export(ExportFormat::Csv).unwrap();
        assert_eq!(export.content.lines().count(), 2);
        assert!(export.content.contains("Team Meeting"));
        assert!(!export.content.contains("Karate"));
    }

    #[test]
    fn test_export_without_filter_includes_everything() {
        let export = state().export(ExportFormat::Ics).unwrap();
        assert_eq!(export.content.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(export.file_name, "calendar.ics");
    }
}
