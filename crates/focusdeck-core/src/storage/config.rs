//! TOML-based application configuration.
//!
//! Holds the countdown durations and the long-break cadence. Stored at
//! `<data_dir>/config.toml`; a default file is written on first load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::timer::ModeDurations;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Countdown configuration, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_secs")]
    pub focus_secs: u32,
    #[serde(default = "default_short_break_secs")]
    pub short_break_secs: u32,
    #[serde(default = "default_long_break_secs")]
    pub long_break_secs: u32,
    /// Focus sessions between long breaks.
    #[serde(default = "default_sessions_before_long_break")]
    pub sessions_before_long_break: u32,
}

fn default_focus_secs() -> u32 {
    25 * 60
}
fn default_short_break_secs() -> u32 {
    5 * 60
}
fn default_long_break_secs() -> u32 {
    15 * 60
}
fn default_sessions_before_long_break() -> u32 {
    4
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_secs: default_focus_secs(),
            short_break_secs: default_short_break_secs(),
            long_break_secs: default_long_break_secs(),
            sessions_before_long_break: default_sessions_before_long_break(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join(CONFIG_FILE))
    }

    /// Load from disk, or write and return the default on a missing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// default cannot be written.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                }
                .into()
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Durations for the timer engine.
    pub fn durations(&self) -> ModeDurations {
        ModeDurations {
            focus_secs: self.timer.focus_secs,
            short_break_secs: self.timer.short_break_secs,
            long_break_secs: self.timer.long_break_secs,
        }
    }

    /// Get a value by dotted key, e.g. `timer.focus_secs`.
    pub fn get(&self, key: &str) -> Option<u32> {
        match key {
            "timer.focus_secs" => Some(self.timer.focus_secs),
            "timer.short_break_secs" => Some(self.timer.short_break_secs),
            "timer.long_break_secs" => Some(self.timer.long_break_secs),
            "timer.sessions_before_long_break" => Some(self.timer.sessions_before_long_break),
            _ => None,
        }
    }

    /// Set a value by dotted key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not parse,
    /// or the file cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a whole number, got '{value}'"),
        })?;
        match key {
            "timer.focus_secs" => self.timer.focus_secs = parsed,
            "timer.short_break_secs" => self.timer.short_break_secs = parsed,
            "timer.long_break_secs" => self.timer.long_break_secs = parsed,
            "timer.sessions_before_long_break" => self.timer.sessions_before_long_break = parsed,
            other => return Err(ConfigError::UnknownKey(other.to_string()).into()),
        }
        self.save()
    }
}
