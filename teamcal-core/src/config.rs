//! teamcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{TeamcalError, TeamcalResult};
use crate::view::CalendarView;

static DEFAULT_EXPORT_DIR: &str = ".";

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

/// Configuration at ~/.config/teamcal/config.toml
///
/// Every key can be overridden with a `TEAMCAL_`-prefixed environment
/// variable, e.g. `TEAMCAL_EXPORT_DIR=~/Downloads`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamcalConfig {
    /// Where exported calendar.* files are written
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default)]
    pub default_view: CalendarView,

    /// JSON export to seed each session's events from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Seed the demo schedule when no events file is given
    #[serde(default)]
    pub sample_events: bool,
}

impl Default for TeamcalConfig {
    fn default() -> Self {
        TeamcalConfig {
            export_dir: default_export_dir(),
            default_view: CalendarView::default(),
            events_file: None,
            sample_events: false,
        }
    }
}

impl TeamcalConfig {
    pub fn config_path() -> TeamcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TeamcalError::Config("Could not determine config directory".into()))?
            .join("teamcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> TeamcalResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> TeamcalResult<Self> {
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("TEAMCAL"))
            .build()
            .map_err(|e| TeamcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TeamcalError::Config(e.to_string()))
    }

    /// Export directory with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        expand(&self.export_dir)
    }

    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_deref().map(expand)
    }

    pub fn to_toml(&self) -> TeamcalResult<String> {
        toml::to_string_pretty(self).map_err(|e| TeamcalError::Serialization(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TeamcalResult<()> {
        let contents = format!(
            "\
# teamcal configuration

# Where exported calendar files are written:
# export_dir = \"{}\"

# Layout shown by `teamcal view` and the shell (month, week or day):
# default_view = \"month\"

# Seed every session with events from a JSON export:
# events_file = \"~/calendar.json\"

# Seed the demo schedule when no events file is set:
# sample_events = false
",
            DEFAULT_EXPORT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TeamcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TeamcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TeamcalConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TeamcalConfig::default());
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "export_dir = \"/tmp/exports\"\ndefault_view = \"week\"\nsample_events = true\n",
        )
        .unwrap();

        let config = TeamcalConfig::load_from(&path).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.default_view, CalendarView::Week);
        assert!(config.sample_events);
        assert_eq!(config.events_file, None);
    }

    #[test]
    fn rejects_unknown_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_view = \"year\"\n").unwrap();

        assert!(matches!(
            TeamcalConfig::load_from(&path),
            Err(TeamcalError::Config(_))
        ));
    }

    #[test]
    fn default_config_file_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        TeamcalConfig::create_default_config(&path).unwrap();

        let config = TeamcalConfig::load_from(&path).unwrap();
        assert_eq!(config, TeamcalConfig::default());
    }

    #[test]
    fn tilde_is_expanded() {
        let config = TeamcalConfig {
            export_dir: PathBuf::from("~/exports"),
            ..Default::default()
        };
        assert!(!config.export_path().to_string_lossy().starts_with('~'));
    }
}
