//! Configuration for Moonwalk.
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, `<config_dir>/moonwalk/config.toml`, then CLI flags
//! applied through the `with_*` builders.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::dance::DanceMode;
use crate::{MoonwalkError, Result};

/// Default delay between two dance steps.
pub const DEFAULT_DELAY_MS: u64 = 700;

/// Default duration of the slide between two positions.
pub const DEFAULT_TRANSITION_MS: u64 = 700;

/// How many offset pixels one terminal cell stands for.
pub const DEFAULT_PX_PER_CELL: u32 = 10;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MoonwalkConfig {
    /// Delay between two ticks of the animation driver
    pub delay: Duration,

    /// How long the figure takes to slide to its new position
    pub transition: Duration,

    /// Dance style selected at startup
    pub dance: DanceMode,

    /// Start dancing immediately instead of waiting for the user
    pub autostart: bool,

    /// Offset pixels per terminal column
    pub px_per_cell: u32,
}

impl Default for MoonwalkConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            dance: DanceMode::MoonWalk,
            autostart: false,
            px_per_cell: DEFAULT_PX_PER_CELL,
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    delay_ms: Option<u64>,
    transition_ms: Option<u64>,
    dance: Option<DanceMode>,
    autostart: Option<bool>,
    px_per_cell: Option<u32>,
}

impl MoonwalkConfig {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("moonwalk").join("config.toml"))
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let parsed: ConfigToml = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(ms) = parsed.delay_ms {
            config.delay = positive_millis("delay_ms", ms)?;
        }
        if let Some(ms) = parsed.transition_ms {
            config.transition = Duration::from_millis(ms);
        }
        if let Some(dance) = parsed.dance {
            config.dance = dance;
        }
        if let Some(autostart) = parsed.autostart {
            config.autostart = autostart;
        }
        if let Some(px) = parsed.px_per_cell {
            if px == 0 {
                return Err(MoonwalkError::Config("px_per_cell must be at least 1".into()));
            }
            config.px_per_cell = px;
        }

        Ok(config)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_dance(mut self, dance: DanceMode) -> Self {
        self.dance = dance;
        self
    }

    pub fn with_autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }
}

fn positive_millis(key: &str, ms: u64) -> Result<Duration> {
    if ms == 0 {
        return Err(MoonwalkError::Config(format!("{key} must be greater than 0")));
    }
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = MoonwalkConfig::load(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, MoonwalkConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "delay_ms = 350\ndance = \"duck-walk\"\nautostart = true\npx_per_cell = 5\n",
        )
        .unwrap();

        let config = MoonwalkConfig::load(&path).unwrap();
        assert_eq!(config.delay, Duration::from_millis(350));
        assert_eq!(config.dance, DanceMode::DuckWalk);
        assert!(config.autostart);
        assert_eq!(config.px_per_cell, 5);
        assert_eq!(config.transition, Duration::from_millis(DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let err = MoonwalkConfig::from_toml("delay_ms = 0").unwrap_err();
        assert!(matches!(err, MoonwalkError::Config(_)));
    }

    #[test]
    fn test_unknown_dance_rejected() {
        let err = MoonwalkConfig::from_toml("dance = \"robot\"").unwrap_err();
        assert!(matches!(err, MoonwalkError::Toml(_)));
    }

    #[test]
    fn test_builders_override() {
        let config = MoonwalkConfig::default()
            .with_delay(Duration::from_millis(100))
            .with_dance(DanceMode::DuckWalk)
            .with_autostart(true);
        assert_eq!(config.delay, Duration::from_millis(100));
        assert_eq!(config.dance, DanceMode::DuckWalk);
        assert!(config.autostart);
    }
}
