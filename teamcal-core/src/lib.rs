//! Core types for teamcal.
//!
//! - `event`, `category`, `member`, `document`: the session's records
//! - `occurrence`: which events occur on a given day
//! - `export`: iCalendar, CSV and JSON serialization
//! - `store`: session state and the commands that change it
//! - `reminder`: simulated email reminders for an event

pub mod category;
pub mod color;
pub mod config;
pub mod document;
pub mod draft;
pub mod error;
pub mod event;
pub mod export;
pub mod member;
pub mod occurrence;
pub mod reminder;
pub mod seed;
pub mod stats;
pub mod store;
pub mod view;

pub use error::{TeamcalError, TeamcalResult};
pub use event::Event;
pub use occurrence::{events_in_hour, events_on, occurs_on};
