//! Commands that change session state.

use chrono::NaiveDate;

use crate::category::EventCategory;
use crate::event::Event;
use crate::member::Member;
use crate::view::CalendarView;

#[derive(Debug, Clone)]
pub enum Command {
    AddEvent(Event),
    /// Replace the event with the same id
    UpdateEvent(Event),
    DeleteEvent(String),
    /// Reschedule an event onto another date, keeping its times of day
    MoveEvent { id: String, date: NaiveDate },
    AddMember(Member),
    UpdateMember(Member),
    DeleteMember(String),
    AddCategory(EventCategory),
    UpdateCategory(EventCategory),
    /// Remove a category and clear it from every event that referenced it
    DeleteCategory(String),
    SetView(CalendarView),
    SetSelectedCategories(Vec<String>),
    ToggleCategory(String),
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddEvent(_) => "add_event",
            Command::UpdateEvent(_) => "update_event",
            Command::DeleteEvent(_) => "delete_event",
            Command::MoveEvent { .. } => "move_event",
            Command::AddMember(_) => "add_member",
            Command::UpdateMember(_) => "update_member",
            Command::DeleteMember(_) => "delete_member",
            Command::AddCategory(_) => "add_category",
            Command::UpdateCategory(_) => "update_category",
            Command::DeleteCategory(_) => "delete_category",
            Command::SetView(_) => "set_view",
            Command::SetSelectedCategories(_) => "set_selected_categories",
            Command::ToggleCategory(_) => "toggle_category",
        }
    }
}
