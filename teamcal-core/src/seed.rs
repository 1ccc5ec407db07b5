//! Data a fresh session starts with.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::category::EventCategory;
use crate::color::ColorTag;
use crate::document::Document;
use crate::event::{DayOfWeek, Event, Recurrence, new_id};
use crate::member::{Member, Role};

/// Avatar URL given to members without a picture.
pub const AVATAR_PLACEHOLDER: &str = "/placeholder.svg?height=40&width=40";

pub fn default_categories() -> Vec<EventCategory> {
    vec![
        EventCategory::new("work", "Work", ColorTag::Blue, Some("Work-related events")),
        EventCategory::new("personal", "Personal", ColorTag::Green, Some("Personal activities")),
        EventCategory::new("meeting", "Meetings", ColorTag::Purple, Some("Team meetings and calls")),
        EventCategory::new("deadline", "Deadlines", ColorTag::Red, Some("Important deadlines")),
        EventCategory::new("social", "Social", ColorTag::Yellow, Some("Social events and gatherings")),
    ]
}

pub fn default_members() -> Vec<Member> {
    let member = |id: &str, name: &str, email: &str, phone: &str, role, joined: &str| Member {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
        avatar: AVATAR_PLACEHOLDER.to_string(),
        joined_date: joined.to_string(),
    };

    vec![
        member("1", "John Doe", "john@example.com", "+1 (555) 123-4567", Role::Admin, "Jan 2024"),
        member("2", "Sarah Johnson", "sarah@example.com", "+1 (555) 234-5678", Role::Manager, "Feb 2024"),
        member("3", "Mike Chen", "mike@example.com", "+1 (555) 345-6789", Role::Member, "Mar 2024"),
    ]
}

pub fn default_documents() -> Vec<Document> {
    let document = |id: &str, name: &str, kind: &str, size: &str, owner: &str, modified| Document {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        size: size.to_string(),
        owner: owner.to_string(),
        modified_date: modified,
    };

    vec![
        document(
            "1",
            "Project Proposal.pdf",
            "PDF",
            "2.4 MB",
            "John Doe",
            Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap(),
        ),
        document(
            "2",
            "Team Guidelines.docx",
            "DOCX",
            "1.2 MB",
            "Sarah Johnson",
            Utc.with_ymd_and_hms(2024, 6, 8, 14, 30, 0).unwrap(),
        ),
        document(
            "3",
            "Budget Analysis.xlsx",
            "XLSX",
            "856 KB",
            "Mike Chen",
            Utc.with_ymd_and_hms(2024, 6, 5, 9, 15, 0).unwrap(),
        ),
    ]
}

/// A small demo schedule around mid-June 2025, with two weekly series.
pub fn sample_events() -> Vec<Event> {
    vec![
        sample("Team Meeting", (2025, 6, 13), (10, 0), (11, 30), ColorTag::Blue, None),
        sample("Project Review", (2025, 6, 13), (14, 0), (15, 0), ColorTag::Green, None),
        sample("Client Call", (2025, 6, 15), (11, 0), (12, 0), ColorTag::Purple, None),
        sample(
            "Little Tigers Karate",
            (2025, 6, 10),
            (16, 0),
            (17, 30),
            ColorTag::Red,
            Some(vec![DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday]),
        ),
        sample(
            "Yoga Class",
            (2025, 6, 11),
            (8, 0),
            (9, 0),
            ColorTag::Yellow,
            Some(vec![DayOfWeek::Tuesday, DayOfWeek::Thursday]),
        ),
    ]
}

fn sample(
    title: &str,
    (year, month, day): (i32, u32, u32),
    start: (u32, u32),
    end: (u32, u32),
    color: ColorTag,
    weekly_on: Option<Vec<DayOfWeek>>,
) -> Event {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let at = |(h, m): (u32, u32)| -> NaiveDateTime { date.and_hms_opt(h, m, 0).unwrap() };

    Event {
        id: new_id(),
        title: title.to_string(),
        description: None,
        date,
        start_time: at(start),
        end_time: at(end),
        color: Some(color),
        recurring: weekly_on.as_ref().map(|_| Recurrence::Weekly),
        days_of_week: weekly_on,
        category: None,
        location: None,
        attendees: None,
    }
}
