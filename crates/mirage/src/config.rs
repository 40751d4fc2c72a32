//! # Engine Configuration
//!
//! Loaded once at startup from a TOML file (or built in code); nothing is
//! re-read during a session. Every field has a production default, so an
//! empty file is a valid config.
//!
//! ```toml
//! particle_count = 6000
//! smoothing = 0.1
//! initial_spread = 10.0
//! frame_capacity = 64
//! seed = 42          # optional: omit for a fresh cloud per run
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The smoothing factor is outside `(0, 1]`.
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),

    /// A zero-capacity frame channel would block the detector.
    #[error("frame_capacity must be at least 1")]
    ZeroFrameCapacity,
}

/// Startup configuration for the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Number of particles in the cloud. Fixed for the whole session.
    pub particle_count: usize,
    /// Integration smoothing factor, `(0, 1]`.
    pub smoothing: f32,
    /// Edge length of the initial scatter cube.
    pub initial_spread: f32,
    /// Frame channel capacity.
    pub frame_capacity: usize,
    /// Shape seed for deterministic replay. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: 6000,
            smoothing: 0.1,
            initial_spread: 10.0,
            frame_capacity: 64,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and the validation
    /// errors documented on [`EngineConfig::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus the
    /// parse/validation errors of [`EngineConfig::from_toml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Checks the numeric invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSmoothing`] for a smoothing factor
    /// outside `(0, 1]` and [`ConfigError::ZeroFrameCapacity`] for a
    /// zero-capacity channel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        if self.frame_capacity == 0 {
            return Err(ConfigError::ZeroFrameCapacity);
        }
        Ok(())
    }
}
