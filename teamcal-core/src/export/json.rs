//! JSON export.

use crate::error::{TeamcalError, TeamcalResult};
use crate::event::Event;

/// Pretty-printed (2-space indented) JSON array of events.
pub fn generate_json(events: &[&Event]) -> TeamcalResult<String> {
    serde_json::to_string_pretty(events).map_err(|e| TeamcalError::Serialization(e.to_string()))
}

/// Read events back from a JSON export.
pub fn parse_events(content: &str) -> TeamcalResult<Vec<Event>> {
    serde_json::from_str(content).map_err(|e| TeamcalError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{karate, team_meeting};

    #[test]
    fn round_trips_field_by_field() {
        let mut meeting = team_meeting();
        meeting.description = Some("Quarterly \"planning\"\nBring notes".to_string());
        meeting.location = Some("Room 4, 2nd floor".to_string());
        meeting.attendees = Some(vec!["john@example.com".to_string()]);
        meeting.category = Some("meeting".to_string());
        let events = vec![meeting, karate()];
        let refs: Vec<&Event> = events.iter().collect();

        let json = generate_json(&refs).unwrap();
        assert_eq!(parse_events(&json).unwrap(), events);
    }

    #[test]
    fn uses_two_space_indentation() {
        let event = team_meeting();
        let json = generate_json(&[&event]).unwrap();

        let expected = r#"[
  {
    "id": "1",
    "title": "Team Meeting",
    "date": "2025-06-13",
    "startTime": "2025-06-13T10:00:00",
    "endTime": "2025-06-13T11:30:00"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn parse_reports_malformed_input() {
        let result = parse_events(r#"[{"id": "1", "title": "x", "date": "June 13"}]"#);
        assert!(matches!(result, Err(TeamcalError::Serialization(_))));
    }
}
