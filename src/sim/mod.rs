//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is applied exactly as passed in (clamp it before calling)
//! - Seeded RNG only
//! - Stable entity order (store position)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entities;
pub mod input;
pub mod rect;
pub mod reflex;
pub mod spawner;
pub mod stack;
pub mod state;

pub use collision::{mirror_into_range, overlaps, reflect_if_out_of_bounds, span_overlap};
pub use difficulty::{Ramp, ReflexDifficulty, StackDifficulty};
pub use entities::EntityStore;
pub use input::{FrameInput, InputEvent, Key, Viewport};
pub use rect::Rect;
pub use reflex::ReflexGame;
pub use spawner::Spawner;
pub use stack::StackGame;
pub use state::{Game, GameEvent, MovingEntity, Outcome, Phase};
