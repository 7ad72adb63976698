// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::errors::JonodoroError;
use crate::infra::paths;
use crate::timer::Fraction;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Initial contents of the break-fraction field.
    #[serde(default = "default_fraction")]
    pub default_fraction: String,
    /// How often the clock label refreshes while working or on a break.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_fraction: default_fraction(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_fraction() -> String {
    "1/3".into()
}

fn default_tick_interval_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Footer with key bindings.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Session table under the timer.
    #[serde(default = "default_true")]
    pub show_history: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_key_hints: true,
            show_history: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file used while the TUI is running. Defaults to the data dir.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(paths::log_file_path)
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the timer cannot run with.
    pub fn validate(&self) -> Result<(), JonodoroError> {
        if let Err(e) = self.timer.default_fraction.parse::<Fraction>() {
            return Err(JonodoroError::Config(format!(
                "timer.default_fraction: {e}"
            )));
        }
        if self.timer.tick_interval_ms == 0 {
            return Err(JonodoroError::Config(
                "timer.tick_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
