//! Rect Arcade - simulation core for two small rectangle arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entities, difficulty, state machines)
//! - `renderer`: Per-frame draw list handed to an external renderer
//! - `config`: Data-driven game balance, loadable from JSON
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{Config, ReflexConfig, RestartPolicy, StackConfig};
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Largest elapsed time applied to a single frame (seconds)
    pub const MAX_FRAME_DT: f32 = 1.0 / 60.0;

    /// Visible play field spans [-1, 1] on both axes
    pub const FIELD_MIN: f32 = -1.0;
    pub const FIELD_MAX: f32 = 1.0;

    /// Reference window size the default target size is expressed in (pixels)
    pub const REFERENCE_WIDTH: f32 = 640.0;
    pub const REFERENCE_HEIGHT: f32 = 480.0;

    /// Target edge length in reference pixels
    pub const TARGET_PIXELS: f32 = 25.0;
}

/// Clamp a measured frame time before it reaches the physics.
///
/// Negative or NaN measurements collapse to zero, anything longer than
/// `max_dt` is cut to `max_dt`.
#[inline]
pub fn clamp_frame_dt(elapsed: f32, max_dt: f32) -> f32 {
    if elapsed.is_nan() || elapsed <= 0.0 {
        0.0
    } else {
        elapsed.min(max_dt)
    }
}

/// Convert a pixel length to normalized units along an axis of `pixels` size
#[inline]
pub fn pixels_to_normalized(length: f32, pixels: f32) -> f32 {
    length / pixels * 2.0
}
