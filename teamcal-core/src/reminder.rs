//! Email reminders for an event.
//!
//! Nothing is actually mailed. A [`Reminder`] is resolved against the event
//! and the chosen team members, then handed to
//! [`Store::send_reminder`](crate::store::Store::send_reminder), which logs it
//! and announces how many recipients it reached.

use crate::error::{TeamcalError, TeamcalResult};
use crate::event::Event;
use crate::store::Notice;

/// Minutes-before-start choices offered for a reminder.
pub const LEAD_TIMES: [u32; 5] = [0, 15, 30, 60, 1440];
pub const DEFAULT_LEAD: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub event_id: String,
    pub subject: String,
    pub message: String,
    pub recipients: Vec<String>,
    /// Minutes before the event starts
    pub lead_minutes: u32,
}

impl Reminder {
    /// Address a reminder. Selected member emails win; with none selected
    /// the event's attendees are used.
    pub fn new(event: &Event, selected_emails: Vec<String>) -> TeamcalResult<Self> {
        let recipients = if selected_emails.is_empty() {
            event.attendees.clone().unwrap_or_default()
        } else {
            selected_emails
        };

        if recipients.is_empty() {
            return Err(TeamcalError::NoRecipients);
        }

        Ok(Reminder {
            event_id: event.id.clone(),
            subject: default_subject(event),
            message: default_message(event),
            recipients,
            lead_minutes: DEFAULT_LEAD,
        })
    }

    pub fn notice(&self) -> Notice {
        Notice::info(
            "Reminders sent",
            format!("Email reminders sent to {} recipients.", self.recipients.len()),
        )
    }
}

pub fn default_subject(event: &Event) -> String {
    format!("Reminder: {}", event.title)
}

pub fn default_message(event: &Event) -> String {
    format!("You have an upcoming event: {}", event.title)
}

/// "15 minutes before", "1 day before", ...
pub fn lead_label(minutes: u32) -> String {
    match minutes {
        0 => "At event time".to_string(),
        60 => "1 hour before".to_string(),
        1440 => "1 day before".to_string(),
        m => format!("{} minutes before", m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::team_meeting;

    fn with_attendees() -> Event {
        let mut event = team_meeting();
        event.attendees = Some(vec!["a@example.com".to_string(), "b@example.com".to_string()]);
        event
    }

    #[test]
    fn selected_members_win_over_attendees() {
        let reminder = Reminder::new(&with_attendees(), vec!["sarah@example.com".to_string()]).unwrap();
        assert_eq!(reminder.recipients, vec!["sarah@example.com"]);
        assert_eq!(reminder.subject, "Reminder: Team Meeting");
        assert_eq!(reminder.lead_minutes, 15);
    }

    #[test]
    fn falls_back_to_attendees() {
        let reminder = Reminder::new(&with_attendees(), Vec::new()).unwrap();
        assert_eq!(reminder.recipients.len(), 2);
        assert_eq!(
            reminder.notice().description,
            "Email reminders sent to 2 recipients."
        );
    }

    #[test]
    fn no_recipients_is_an_error() {
        let result = Reminder::new(&team_meeting(), Vec::new());
        assert!(matches!(result, Err(TeamcalError::NoRecipients)));
    }

    #[test]
    fn lead_labels() {
        let labels: Vec<String> = LEAD_TIMES.iter().map(|m| lead_label(*m)).collect();
        assert_eq!(
            labels,
            vec![
                "At event time",
                "15 minutes before",
                "30 minutes before",
                "1 hour before",
                "1 day before"
            ]
        );
    }
}
