//! Interactive forms for events, categories, members and reminders.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, MultiSelect, Select};
use owo_colors::OwoColorize;
use teamcal_core::category::EventCategory;
use teamcal_core::color::ColorTag;
use teamcal_core::draft::{EventDraft, parse_time};
use teamcal_core::event::{DayOfWeek, Event, Recurrence, new_id};
use teamcal_core::member::{Member, Role};
use teamcal_core::occurrence::parse_date;
use teamcal_core::reminder::{DEFAULT_LEAD, LEAD_TIMES, Reminder, lead_label};
use teamcal_core::seed::AVATAR_PLACEHOLDER;

const ROLES: [Role; 3] = [Role::Member, Role::Manager, Role::Admin];

/// Fill in an event, starting from `draft` (blank for new events).
pub fn event(draft: EventDraft, categories: &[EventCategory]) -> Result<Event> {
    let title = text("  Title", &draft.title)?;

    let date_default = draft.date.map(|d| d.to_string()).unwrap_or_default();
    let date = prompt_with_retry("  Date (YYYY-MM-DD)", &date_default, |s| Ok(parse_date(s)?))?;

    let start = prompt_with_retry("  Start (HH:MM)", or(&draft.start, "09:00"), |s| {
        parse_time(s)?;
        Ok(s.trim().to_string())
    })?;
    let end = prompt_with_retry("  End (HH:MM)", or(&draft.end, "10:00"), |s| {
        parse_time(s)?;
        Ok(s.trim().to_string())
    })?;

    let category = choose_category(categories, draft.category.as_deref())?;
    let color = choose_color(draft.color)?;
    let recurring = choose_recurrence(draft.recurring)?;

    let days_of_week = match recurring {
        Some(Recurrence::Weekly) => choose_days(&draft.days_of_week, date)?,
        _ => Vec::new(),
    };

    let location = text("  Where? (skip)", draft.location.as_deref().unwrap_or_default())?;
    let description = text(
        "  Description (skip)",
        draft.description.as_deref().unwrap_or_default(),
    )?;
    let attendees = text("  Attendees, comma separated (skip)", &draft.attendees.join(", "))?;

    let event = EventDraft {
        id: draft.id,
        title,
        description: Some(description),
        date: Some(date),
        start,
        end,
        color,
        recurring,
        days_of_week,
        category,
        location: Some(location),
        attendees: parse_attendees(&attendees),
    }
    .into_event()?;

    Ok(event)
}

/// Fill in a category. Editing keeps the existing id.
pub fn category(existing: Option<&EventCategory>) -> Result<EventCategory> {
    let name = prompt_with_retry("  Name", existing.map_or("", |c| c.name.as_str()), |s| {
        let name = s.trim();
        anyhow::ensure!(!name.is_empty(), "Name is required");
        Ok(name.to_string())
    })?;
    let current = existing.map_or(ColorTag::Blue, |c| c.color);
    let color = ColorTag::ALL[Select::new()
        .with_prompt("  Color")
        .items(&ColorTag::ALL.map(|c| c.to_string()))
        .default(ColorTag::ALL.iter().position(|c| *c == current).unwrap_or(0))
        .interact()?];
    let description = text(
        "  Description (skip)",
        existing
            .and_then(|c| c.description.as_deref())
            .unwrap_or_default(),
    )?;

    Ok(build_category(existing, name, color, description))
}

fn build_category(
    existing: Option<&EventCategory>,
    name: String,
    color: ColorTag,
    description: String,
) -> EventCategory {
    EventCategory {
        id: existing.map_or_else(new_id, |c| c.id.clone()),
        name,
        color,
        description: (!description.is_empty()).then_some(description),
    }
}

/// Fields a member form collects.
struct MemberFields {
    name: String,
    email: String,
    phone: String,
    role: Role,
}

/// Fill in a member. Editing keeps the id and the joined date.
pub fn member(existing: Option<&Member>, today: NaiveDate) -> Result<Member> {
    let name = prompt_with_retry("  Name", existing.map_or("", |m| m.name.as_str()), |s| {
        let name = s.trim();
        anyhow::ensure!(!name.is_empty(), "Name is required");
        Ok(name.to_string())
    })?;
    let email = prompt_with_retry("  Email", existing.map_or("", |m| m.email.as_str()), |s| {
        let email = s.trim();
        anyhow::ensure!(email.contains('@'), "Not an email address: \"{}\"", email);
        Ok(email.to_string())
    })?;
    let phone = text("  Phone (skip)", existing.map_or("", |m| m.phone.as_str()))?;
    let current = existing.map_or(Role::Member, |m| m.role);
    let role = ROLES[Select::new()
        .with_prompt("  Role")
        .items(&ROLES.map(|r| r.to_string()))
        .default(ROLES.iter().position(|r| *r == current).unwrap_or(0))
        .interact()?];

    Ok(build_member(
        existing,
        MemberFields {
            name,
            email,
            phone,
            role,
        },
        today,
    ))
}

fn build_member(existing: Option<&Member>, fields: MemberFields, today: NaiveDate) -> Member {
    Member {
        id: existing.map_or_else(new_id, |m| m.id.clone()),
        name: fields.name,
        email: fields.email,
        phone: fields.phone,
        role: fields.role,
        avatar: AVATAR_PLACEHOLDER.to_string(),
        joined_date: existing.map_or_else(|| joined_label(today), |m| m.joined_date.clone()),
    }
}

/// Pick reminder recipients and timing for `event`.
pub fn reminder(event: &Event, members: &[Member]) -> Result<Reminder> {
    let attendees = event.attendees.as_deref().unwrap_or_default();
    if !attendees.is_empty() {
        println!("  Attendees ({}): {}", attendees.len(), attendees.join(", "));
    }

    let chosen = MultiSelect::new()
        .with_prompt("  Additional team members")
        .items(
            &members
                .iter()
                .map(|m| format!("{} ({})", m.name, m.email))
                .collect::<Vec<_>>(),
        )
        .interact()?;
    let selected = chosen.into_iter().map(|i| members[i].email.clone()).collect();

    let mut reminder = Reminder::new(event, selected)?;
    reminder.subject = text("  Subject", &reminder.subject)?;
    reminder.message = text("  Message", &reminder.message)?;

    let lead_default = LEAD_TIMES.iter().position(|m| *m == DEFAULT_LEAD).unwrap_or(0);
    reminder.lead_minutes = LEAD_TIMES[Select::new()
        .with_prompt("  Send reminder")
        .items(&LEAD_TIMES.map(lead_label))
        .default(lead_default)
        .interact()?];

    Ok(reminder)
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, default: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let value = input.interact_text()?;
        match parse(&value) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Free text; empty input keeps `default`, or skips when there is none.
fn text(prompt: &str, default: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .show_default(!default.is_empty())
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn choose_category(categories: &[EventCategory], current: Option<&str>) -> Result<Option<String>> {
    let mut items = vec!["(none)".to_string()];
    items.extend(categories.iter().map(|c| c.name.clone()));

    let default = current
        .and_then(|id| categories.iter().position(|c| c.id == id))
        .map_or(0, |i| i + 1);

    let choice = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(choice.checked_sub(1).map(|i| categories[i].id.clone()))
}

fn choose_color(current: Option<ColorTag>) -> Result<Option<ColorTag>> {
    let mut items = vec!["(none)".to_string()];
    items.extend(ColorTag::ALL.iter().map(|c| c.to_string()));

    let default = current
        .and_then(|tag| ColorTag::ALL.iter().position(|c| *c == tag))
        .map_or(0, |i| i + 1);

    let choice = Select::new()
        .with_prompt("  Color")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(choice.checked_sub(1).map(|i| ColorTag::ALL[i]))
}

fn choose_recurrence(current: Option<Recurrence>) -> Result<Option<Recurrence>> {
    let default = match current {
        None => 0,
        Some(Recurrence::Weekly) => 1,
        Some(Recurrence::Monthly) => 2,
    };

    let choice = Select::new()
        .with_prompt("  Repeats")
        .items(&["never", "weekly", "monthly"])
        .default(default)
        .interact()?;

    Ok(match choice {
        1 => Some(Recurrence::Weekly),
        2 => Some(Recurrence::Monthly),
        _ => None,
    })
}

fn choose_days(current: &[DayOfWeek], date: NaiveDate) -> Result<Vec<DayOfWeek>> {
    loop {
        let defaults = day_defaults(current, date);
        let chosen = MultiSelect::new()
            .with_prompt("  On which days?")
            .items(&DayOfWeek::ALL.map(|d| d.short_label()))
            .defaults(&defaults)
            .interact()?;

        if !chosen.is_empty() {
            return Ok(chosen.into_iter().map(|i| DayOfWeek::ALL[i]).collect());
        }
        eprintln!("  {}", "Pick at least one day".red());
    }
}

/// Pre-ticked days: the existing selection, or the weekday of the chosen date.
fn day_defaults(current: &[DayOfWeek], date: NaiveDate) -> [bool; 7] {
    let anchor = DayOfWeek::of(date);
    DayOfWeek::ALL.map(|d| {
        if current.is_empty() {
            d == anchor
        } else {
            current.contains(&d)
        }
    })
}

fn parse_attendees(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

/// "Jun 2025"
fn joined_label(today: NaiveDate) -> String {
    today.format("%b %Y").to_string()
}
