//! Run configuration
//!
//! Loaded from JSON by the native driver; everything has a playable default.

use serde::{Deserialize, Serialize};

use crate::consts::WASP_COUNT;
use crate::error::FirefliesError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the square arena
    pub arena_size: f32,
    /// Total population size (fireflies + wasps)
    pub num_actors: u32,
    /// RNG seed for reproducible populations (`None` = random)
    pub seed: Option<u64>,

    // === Driver ===
    /// Simulation ticks per second used by the native loop
    pub tick_hz: u32,
    /// Number of ticks the native loop runs before exiting
    pub ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_size: 100.0,
            num_actors: 50,
            seed: None,

            tick_hz: 60,
            ticks: 600,
        }
    }
}

impl Settings {
    /// Check the construction policy: positive finite arena, room for the wasps.
    pub fn validate(&self) -> Result<(), FirefliesError> {
        validate_dimensions(self.arena_size, self.num_actors)?;
        if self.tick_hz == 0 {
            return Err(FirefliesError::InvalidConfiguration(
                "tick_hz must be positive",
            ));
        }
        Ok(())
    }

    /// Seed to build the population with, drawing one if none is configured
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, FirefliesError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: arena={}, actors={}, seed={:?}",
            settings.arena_size,
            settings.num_actors,
            settings.seed
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, FirefliesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Shared by [`Settings::validate`] and the model constructors.
pub(crate) fn validate_dimensions(size: f32, num_actors: u32) -> Result<(), FirefliesError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(FirefliesError::InvalidConfiguration(
            "arena size must be positive and finite",
        ));
    }
    if num_actors < WASP_COUNT {
        return Err(FirefliesError::InvalidConfiguration(
            "population must hold at least 5 actors",
        ));
    }
    Ok(())
}
