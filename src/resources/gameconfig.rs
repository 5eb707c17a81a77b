//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [animation]
//! frame_rate = 12
//!
//! [demo]
//! tick_rate = 60
//! ticks = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::coinregistry::DEFAULT_FRAME_RATE;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_TICKS: u64 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the coin animation frame rate and the headless demo loop settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Coin animation steps per second.
    pub frame_rate: f32,
    /// Demo loop ticks per simulated second.
    pub tick_rate: u32,
    /// Demo loop tick budget before giving up.
    pub ticks: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            tick_rate: DEFAULT_TICK_RATE,
            ticks: DEFAULT_TICKS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [animation] section
        if let Some(frame_rate) = config.getfloat("animation", "frame_rate").ok().flatten() {
            self.frame_rate = frame_rate as f32;
        }

        // [demo] section
        if let Some(tick_rate) = config.getuint("demo", "tick_rate").ok().flatten() {
            self.tick_rate = tick_rate as u32;
        }
        if let Some(ticks) = config.getuint("demo", "ticks").ok().flatten() {
            self.ticks = ticks;
        }

        info!(
            "Loaded config: frame_rate={}, tick_rate={}, ticks={}",
            self.frame_rate, self.tick_rate, self.ticks
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [animation] section
        config.set("animation", "frame_rate", Some(self.frame_rate.to_string()));

        // [demo] section
        config.set("demo", "tick_rate", Some(self.tick_rate.to_string()));
        config.set("demo", "ticks", Some(self.ticks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
