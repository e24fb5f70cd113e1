//! Game balance configuration
//!
//! Every tunable lives in an immutable struct handed to a game at
//! construction, so several games with different curves can coexist.
//! Loaded from JSON; fields missing from the file keep their defaults.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::pixels_to_normalized;
use crate::sim::Ramp;

/// What a reflex-game restart does with the difficulty reached so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RestartPolicy {
    /// Back to the configured starting values
    #[default]
    ResetDifficulty,
    /// Keep the ramped values from the previous round
    CarryOver,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::ResetDifficulty => "reset",
            RestartPolicy::CarryOver => "carry-over",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reset" | "reset-difficulty" => Some(RestartPolicy::ResetDifficulty),
            "carry" | "carry-over" | "carryover" => Some(RestartPolicy::CarryOver),
            _ => None,
        }
    }
}

/// Reflex ("hammer") game tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflexConfig {
    /// Target width/height in normalized units; the actor is
    /// `length * width` wide and one target tall
    pub target_size: Vec2,
    /// Actor length (and health) ceiling
    pub max_actor_length: f32,
    /// Health gained per swept target
    pub gain: f32,
    /// Spawn attempts beyond this many live targets are dropped
    pub max_targets: usize,
    /// Approach angle range (radians, measured from +x)
    pub spawn_angle_min: f32,
    pub spawn_angle_max: f32,
    /// Seconds between spawns (shrinks on every hit)
    pub spawn_delay: Ramp,
    /// Health lost per second, and per passive contact
    pub drain: Ramp,
    /// Target speed in normalized units per second
    pub target_speed: Ramp,
    pub restart: RestartPolicy,
}

impl Default for ReflexConfig {
    fn default() -> Self {
        Self {
            target_size: Vec2::new(
                pixels_to_normalized(TARGET_PIXELS, REFERENCE_WIDTH),
                pixels_to_normalized(TARGET_PIXELS, REFERENCE_HEIGHT),
            ),
            max_actor_length: 4.0,
            gain: 0.5,
            max_targets: 25,
            spawn_angle_min: PI / 3.0,
            spawn_angle_max: 2.0 * PI / 3.0,
            spawn_delay: Ramp::new(0.5, -0.01, 0.25, 0.5),
            drain: Ramp::new(0.1, 0.001, 0.1, 0.3),
            target_speed: Ramp::new(1.0, 0.01, 1.0, 2.5),
            restart: RestartPolicy::ResetDifficulty,
        }
    }
}

impl ReflexConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("target_size.x", self.target_size.x)?;
        positive("target_size.y", self.target_size.y)?;
        if self.target_size.x > FIELD_MAX - FIELD_MIN {
            return Err(ConfigError::InvertedRange {
                name: "spawn_x",
                floor: FIELD_MIN + 0.5 * self.target_size.x,
                cap: FIELD_MAX - 0.5 * self.target_size.x,
            });
        }
        positive("max_actor_length", self.max_actor_length)?;
        if self.max_targets == 0 {
            return Err(ConfigError::ZeroCapacity {
                name: "max_targets",
            });
        }
        // Spawn headings must point into the field from either edge
        within_open("spawn_angle_min", self.spawn_angle_min, 0.0, PI)?;
        within_open("spawn_angle_max", self.spawn_angle_max, 0.0, PI)?;
        if self.spawn_angle_min > self.spawn_angle_max {
            return Err(ConfigError::InvertedRange {
                name: "spawn_angle",
                floor: self.spawn_angle_min,
                cap: self.spawn_angle_max,
            });
        }
        self.spawn_delay.validate("spawn_delay")?;
        // A zero delay would never let the catch-up spawn loop finish
        positive("spawn_delay.floor", self.spawn_delay.floor)?;
        self.drain.validate("drain")?;
        self.target_speed.validate("target_speed")?;
        Ok(())
    }
}

/// Stacking game tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Height of one tower row
    pub row_height: f32,
    /// Width of the first falling element
    pub start_width: f32,
    /// Placed blocks never get narrower than this
    pub min_width: f32,
    /// Placed blocks needed to complete the tower
    pub max_level: usize,
    /// Level speed magnitude: `start` is the first round's baseline,
    /// `step` is added per placement
    pub level_speed: Ramp,
    /// Added to the starting speed baseline after each completed tower
    pub baseline_step: f32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            row_height: 0.1,
            start_width: 0.5,
            min_width: 0.02,
            max_level: 10,
            level_speed: Ramp::new(0.5, 0.05, 0.5, 3.0),
            baseline_step: 0.1,
        }
    }
}

impl StackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("row_height", self.row_height)?;
        positive("min_width", self.min_width)?;
        let field = FIELD_MAX - FIELD_MIN;
        if self.start_width.is_nan()
            || self.start_width < self.min_width
            || self.start_width > field
        {
            return Err(ConfigError::StartOutOfRange {
                name: "start_width",
                start: self.start_width,
                floor: self.min_width,
                cap: field,
            });
        }
        if self.max_level == 0 {
            return Err(ConfigError::ZeroCapacity { name: "max_level" });
        }
        if self.max_level as f32 * self.row_height > field + 1e-4 {
            return Err(ConfigError::TowerTooTall {
                levels: self.max_level,
                row_height: self.row_height,
                field,
            });
        }
        self.level_speed.validate("level_speed")?;
        // A completed tower must make the next round harder
        positive("baseline_step", self.baseline_step)?;
        Ok(())
    }
}

/// Configuration for both games
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reflex: ReflexConfig,
    pub stack: StackConfig,
}

impl Config {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reflex.validate()?;
        self.stack.validate()
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn within_open(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value > min && value < max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
