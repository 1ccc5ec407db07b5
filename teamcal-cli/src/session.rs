//! Building the in-memory session a command runs against.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use teamcal_core::config::TeamcalConfig;
use teamcal_core::event::Event;
use teamcal_core::export::parse_events;
use teamcal_core::seed;
use teamcal_core::store::{AppState, Store};

use crate::render::Render;

/// Where a session's events come from.
pub struct Seed {
    pub events_file: Option<PathBuf>,
    pub sample: bool,
}

impl Seed {
    /// Command-line flags win over the config file.
    pub fn resolve(events_file: Option<PathBuf>, sample: bool, config: &TeamcalConfig) -> Self {
        Seed {
            events_file: events_file.or_else(|| config.events_path()),
            sample: sample || config.sample_events,
        }
    }

    fn events(&self) -> Result<Vec<Event>> {
        match &self.events_file {
            Some(path) => load_events(path),
            None if self.sample => Ok(seed::sample_events()),
            None => Ok(Vec::new()),
        }
    }
}

pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    let events = parse_events(&content)
        .with_context(|| format!("Failed to parse events file at {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = events.len(), "seeded events");
    Ok(events)
}

/// Open a session: default team data, seeded events, notices printed as they happen.
pub fn open(config: &TeamcalConfig, seed: &Seed) -> Result<Store> {
    let state = AppState::seeded()
        .with_view(config.default_view)
        .with_events(seed.events()?);

    let mut store = Store::new(state);
    store.subscribe(|notice| println!("{}", notice.render()));
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcal_core::export::{ExportFormat, serialize};

    #[test]
    fn flags_override_config() {
        let config = TeamcalConfig {
            events_file: Some(PathBuf::from("/from/config.json")),
            ..Default::default()
        };

        let seed = Seed::resolve(Some(PathBuf::from("/from/flag.json")), false, &config);
        assert_eq!(seed.events_file, Some(PathBuf::from("/from/flag.json")));

        let seed = Seed::resolve(None, false, &config);
        assert_eq!(seed.events_file, Some(PathBuf::from("/from/config.json")));
    }

    #[test]
    fn seeds_from_a_json_export() {
        let sample = seed::sample_events();
        let refs: Vec<&Event> = sample.iter().collect();
        let json = serialize(&refs, ExportFormat::Json).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        std::fs::write(&path, json).unwrap();

        let seed = Seed {
            events_file: Some(path),
            sample: false,
        };
        let store = open(&TeamcalConfig::default(), &seed).unwrap();
        assert_eq!(store.state().events(), sample.as_slice());
    }

    #[test]
    fn missing_events_file_is_an_error() {
        let seed = Seed {
            events_file: Some(PathBuf::from("/definitely/not/here.json")),
            sample: true,
        };
        assert!(open(&TeamcalConfig::default(), &seed).is_err());
    }

    #[test]
    fn empty_session_without_seed() {
        let seed = Seed {
            events_file: None,
            sample: false,
        };
        let store = open(&TeamcalConfig::default(), &seed).unwrap();
        assert!(store.state().events().is_empty());
        assert_eq!(store.state().categories().len(), 5);
    }
}
