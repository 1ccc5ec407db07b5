//! Calendar layouts and their date geometry.
//!
//! Weeks start on Sunday in every layout.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::occurrence::{events_in_hour, events_on};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    /// Move `date` one unit of this layout forward or back.
    pub fn step(&self, date: NaiveDate, direction: Direction) -> NaiveDate {
        match (self, direction) {
            (CalendarView::Month, Direction::Next) => date
                .checked_add_months(Months::new(1))
                .unwrap_or(date),
            (CalendarView::Month, Direction::Previous) => date
                .checked_sub_months(Months::new(1))
                .unwrap_or(date),
            (CalendarView::Week, Direction::Next) => date + Duration::weeks(1),
            (CalendarView::Week, Direction::Previous) => date - Duration::weeks(1),
            (CalendarView::Day, Direction::Next) => date + Duration::days(1),
            (CalendarView::Day, Direction::Previous) => date - Duration::days(1),
        }
    }

    /// Heading for the layout, e.g. "June 2025", "Jun 8 - Jun 14, 2025", "Friday, June 13, 2025"
    pub fn title(&self, date: NaiveDate) -> String {
        match self {
            CalendarView::Month => date.format("%B %Y").to_string(),
            CalendarView::Week => {
                let days = week_days(date);
                format!(
                    "{} - {}",
                    days[0].format("%b %-d"),
                    days[6].format("%b %-d, %Y")
                )
            }
            CalendarView::Day => date.format("%A, %B %-d, %Y").to_string(),
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        };
        f.write_str(name)
    }
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "day" => Ok(CalendarView::Day),
            other => Err(format!("Unknown view '{}'. Expected month, week or day", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The seven days (Sunday..Saturday) of the week containing `date`.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let start = start_of_week(date);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Whole weeks covering the month of `date`, padded with days of the
/// neighbouring months.
pub fn month_grid(date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);

    let mut weeks = Vec::new();
    let mut cursor = start_of_week(first);
    while cursor <= last {
        weeks.push(week_days(cursor));
        cursor += Duration::weeks(1);
    }
    weeks
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// "9:00 AM" style label for an hourly slot.
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", display, suffix)
}

/// One day cell of a month grid.
#[derive(Debug)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<&'a Event>,
}

/// Resolve every cell of the month containing `date`.
pub fn month_cells<'a>(events: &'a [Event], date: NaiveDate, today: NaiveDate) -> Vec<[DayCell<'a>; 7]> {
    month_grid(date)
        .into_iter()
        .map(|week| {
            week.map(|day| DayCell {
                date: day,
                in_month: is_same_month(day, date),
                is_today: day == today,
                events: events_on(events, day),
            })
        })
        .collect()
}

/// Events per hour (0..24) for each given day: `slots[hour][day_index]`.
pub fn hour_slots<'a>(events: &'a [Event], days: &[NaiveDate]) -> Vec<Vec<Vec<&'a Event>>> {
    (0..24)
        .map(|hour| {
            days.iter()
                .map(|day| events_in_hour(events, *day, hour))
                .collect()
        })
        .collect()
}
