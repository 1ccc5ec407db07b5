//! Display palette shared by events and categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::EventCategory;
use crate::event::Event;

/// One of the fixed palette colors an event or category can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Red,
        ColorTag::Purple,
        ColorTag::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Red => "red",
            ColorTag::Purple => "purple",
            ColorTag::Yellow => "yellow",
        }
    }

    /// Hex swatch for the tag (the 500 shade of the palette).
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Blue => "#3b82f6",
            ColorTag::Green => "#22c55e",
            ColorTag::Red => "#ef4444",
            ColorTag::Purple => "#a855f7",
            ColorTag::Yellow => "#eab308",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown color '{}'", s))
    }
}

/// Pick the color an event is drawn with.
///
/// The event's category wins when it resolves to a known category; otherwise
/// the event's own color is used. `None` means the neutral primary style.
pub fn resolve_color(event: &Event, categories: &[EventCategory]) -> Option<ColorTag> {
    event
        .category
        .as_deref()
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.color)
        .or(event.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::team_meeting;

    #[test]
    fn category_color_takes_precedence() {
        let mut event = team_meeting();
        event.color = Some(ColorTag::Blue);
        event.category = Some("deadline".to_string());

        let categories = crate::seed::default_categories();
        assert_eq!(resolve_color(&event, &categories), Some(ColorTag::Red));
    }

    #[test]
    fn unknown_category_falls_back_to_event_color() {
        let mut event = team_meeting();
        event.color = Some(ColorTag::Yellow);
        event.category = Some("gone".to_string());

        let categories = crate::seed::default_categories();
        assert_eq!(resolve_color(&event, &categories), Some(ColorTag::Yellow));
    }

    #[test]
    fn no_color_anywhere_is_none() {
        let event = team_meeting();
        assert_eq!(resolve_color(&event, &[]), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Purple".parse::<ColorTag>(), Ok(ColorTag::Purple));
        assert!("orange".parse::<ColorTag>().is_err());
    }
}
