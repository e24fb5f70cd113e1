//! Configuration errors
//!
//! The simulation itself never fails; a bad difficulty table is the only
//! thing rejected, and it is rejected when a game is constructed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name}: floor {floor} is above cap {cap}")]
    InvertedRange {
        name: &'static str,
        floor: f32,
        cap: f32,
    },

    #[error("{name}: start {start} lies outside [{floor}, {cap}]")]
    StartOutOfRange {
        name: &'static str,
        start: f32,
        floor: f32,
        cap: f32,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be at least 1")]
    ZeroCapacity { name: &'static str },

    #[error("{name}: {value} lies outside ({min}, {max})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{levels} rows of height {row_height} do not fit in a field {field} high")]
    TowerTooTall {
        levels: usize,
        row_height: f32,
        field: f32,
    },
}
