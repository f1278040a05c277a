//! User configuration
//!
//! Stored as TOML at `<config_dir>/lyrsync/config.toml`. Every field has a
//! default, so a missing file or a partial file both load fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::sync::DEFAULT_LINEAR_SCAN_THRESHOLD;
use crate::timeline::{TimelineOptions, DEFAULT_DUPLICATE_OFFSET, DEFAULT_LEAD_IN_TEXT};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeline: TimelineConfig,
    pub sync: SyncConfig,
    pub player: PlayerConfig,
}

/// How lyric text is turned into a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Text of the lead-in line inserted at 0:00 when the lyrics start later
    pub lead_in_text: String,
    /// Seconds a line is pushed back when its timestamp is already taken
    pub duplicate_offset: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            lead_in_text: DEFAULT_LEAD_IN_TEXT.to_string(),
            duplicate_offset: DEFAULT_DUPLICATE_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Timelines with at most this many lines are searched linearly
    pub linear_scan_threshold: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            linear_scan_threshold: DEFAULT_LINEAR_SCAN_THRESHOLD,
        }
    }
}

/// Terminal player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Clock polling interval in milliseconds
    pub tick_interval_ms: u64,
    /// Seconds moved by the seek keys
    pub seek_step: f64,
    /// Seconds to keep playing after the last line starts
    pub linger: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            seek_step: 5.0,
            linger: 3.0,
        }
    }
}

impl PlayerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("lyrsync").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::config_path()?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.timeline.duplicate_offset.is_finite() && self.timeline.duplicate_offset > 0.0) {
            bail!(
                "timeline.duplicate_offset must be greater than 0 (got {})",
                self.timeline.duplicate_offset
            );
        }
        if self.player.tick_interval_ms == 0 {
            bail!("player.tick_interval_ms must be at least 1");
        }
        if !(self.player.seek_step.is_finite() && self.player.seek_step > 0.0) {
            bail!(
                "player.seek_step must be greater than 0 (got {})",
                self.player.seek_step
            );
        }
        if !(self.player.linger.is_finite() && self.player.linger >= 0.0) {
            bail!("player.linger must not be negative (got {})", self.player.linger);
        }
        Ok(())
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(Self::config_path()?)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn timeline_options(&self) -> TimelineOptions {
        TimelineOptions {
            lead_in_text: self.timeline.lead_in_text.clone(),
            duplicate_offset: self.timeline.duplicate_offset,
        }
    }
}
