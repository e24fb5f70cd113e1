//! Difficulty ramps
//!
//! Every ramped value moves by a fixed step per success and saturates at
//! the edges of its `[floor, cap]` range. Adjustments are pure functions of
//! the current values and the configured table; no randomness.

use serde::{Deserialize, Serialize};

use crate::config::{ReflexConfig, RestartPolicy, StackConfig};
use crate::error::ConfigError;

/// One ramped parameter: starting value, signed step per success, and the
/// range the value is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub start: f32,
    pub step: f32,
    pub floor: f32,
    pub cap: f32,
}

impl Ramp {
    pub const fn new(start: f32, step: f32, floor: f32, cap: f32) -> Self {
        Self {
            start,
            step,
            floor,
            cap,
        }
    }

    /// Next value after one success, saturating at floor/cap
    #[inline]
    pub fn advance(&self, value: f32) -> f32 {
        (value + self.step).clamp(self.floor, self.cap)
    }

    /// Advance by an arbitrary step, still saturating
    #[inline]
    pub fn advance_by(&self, value: f32, step: f32) -> f32 {
        (value + step).clamp(self.floor, self.cap)
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.floor.is_nan() || self.cap.is_nan() || self.floor > self.cap {
            return Err(ConfigError::InvertedRange {
                name,
                floor: self.floor,
                cap: self.cap,
            });
        }
        if self.start.is_nan() || self.start < self.floor || self.start > self.cap {
            return Err(ConfigError::StartOutOfRange {
                name,
                start: self.start,
                floor: self.floor,
                cap: self.cap,
            });
        }
        Ok(())
    }
}

/// Reflex game difficulty bundle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflexDifficulty {
    pub spawn_delay: f32,
    pub drain: f32,
    pub target_speed: f32,
}

impl ReflexDifficulty {
    pub fn initial(config: &ReflexConfig) -> Self {
        Self {
            spawn_delay: config.spawn_delay.start,
            drain: config.drain.start,
            target_speed: config.target_speed.start,
        }
    }

    /// Shorter spawn delay, faster drain, faster targets
    pub fn on_success(&self, config: &ReflexConfig) -> Self {
        Self {
            spawn_delay: config.spawn_delay.advance(self.spawn_delay),
            drain: config.drain.advance(self.drain),
            target_speed: config.target_speed.advance(self.target_speed),
        }
    }

    pub fn on_reset(&self, config: &ReflexConfig) -> Self {
        match config.restart {
            RestartPolicy::ResetDifficulty => Self::initial(config),
            RestartPolicy::CarryOver => *self,
        }
    }
}

/// Stacking game difficulty: the signed speed of the falling level and the
/// baseline magnitude each round starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackDifficulty {
    pub level_speed: f32,
    pub starting_speed: f32,
}

impl StackDifficulty {
    pub fn initial(config: &StackConfig) -> Self {
        let start = config.level_speed.start;
        Self {
            level_speed: start,
            starting_speed: start,
        }
    }

    /// Faster level, same direction of travel
    pub fn on_success(&self, config: &StackConfig) -> Self {
        let sign = if self.level_speed < 0.0 { -1.0 } else { 1.0 };
        let magnitude = config.level_speed.advance(self.level_speed.abs());
        Self {
            level_speed: sign * magnitude,
            ..*self
        }
    }

    /// Fresh round. A completed tower raises the baseline first.
    pub fn on_reset(&self, config: &StackConfig, tower_completed: bool) -> Self {
        let starting_speed = if tower_completed {
            config
                .level_speed
                .advance_by(self.starting_speed, config.baseline_step)
        } else {
            self.starting_speed
        };
        Self {
            level_speed: starting_speed,
            starting_speed,
        }
    }
}
