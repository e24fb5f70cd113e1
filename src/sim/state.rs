//! Shared game state types
//!
//! Both games run the same skeleton: a three-phase state machine, moving
//! rectangles, and a queue of notifications for the UI layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::reflect_if_out_of_bounds;
use super::input::FrameInput;
use super::rect::Rect;
use crate::renderer::DrawList;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Reflex game: health ran out
    Depleted,
    /// Stacking game: the level missed the block below
    Lost,
    /// Stacking game: tower complete
    Won,
}

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first click
    Idle,
    /// Active gameplay
    Active,
    /// Round over, waiting for restart
    Terminal(Outcome),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}

/// Notifications for the UI/console layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A target was swept; `points` is the new total
    Scored { points: u32 },
    /// A block was placed; `height` is the new tower height
    Placed { height: usize, width: f32 },
    /// A new stacking round started after a completed tower
    LevelReached { level: u32 },
    PhaseChanged { from: Phase, to: Phase },
}

impl GameEvent {
    /// Text shown to the player, if this event has any
    pub fn notification(&self) -> Option<String> {
        match self {
            GameEvent::Scored { points } => Some(points.to_string()),
            GameEvent::LevelReached { level } => Some(format!("Level {}", level)),
            GameEvent::PhaseChanged {
                to: Phase::Terminal(Outcome::Won),
                ..
            } => Some("You win!".to_string()),
            GameEvent::PhaseChanged {
                to: Phase::Terminal(Outcome::Lost),
                ..
            } => Some("You lose!".to_string()),
            GameEvent::Placed { .. } | GameEvent::PhaseChanged { .. } => None,
        }
    }
}

/// A rectangle with a velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingEntity {
    pub rect: Rect,
    pub vel: Vec2,
}

impl MovingEntity {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.rect.center += self.vel * dt;
    }

    /// Point velocity back inward on any axis where the rectangle reached
    /// the edge of `[min, max]`. Position is not corrected.
    pub fn bounce_within(&mut self, min: f32, max: f32) {
        let c = self.rect.center;
        let h = self.rect.half;
        self.vel.x = reflect_if_out_of_bounds(c.x, self.vel.x, min + h.x, max - h.x);
        self.vel.y = reflect_if_out_of_bounds(c.y, self.vel.y, min + h.y, max - h.y);
    }
}

/// Common driver surface for both games
pub trait Game {
    fn phase(&self) -> Phase;

    /// Advance one frame. `dt` is applied as given; clamp it first.
    fn tick(&mut self, input: &FrameInput, dt: f32);

    /// Terminal -> Active. Returns false (and does nothing) in any other phase.
    fn restart(&mut self) -> bool;

    fn draw_list(&self) -> DrawList;

    /// Take queued notifications
    fn drain_events(&mut self) -> Vec<GameEvent>;
}

/// Move `phase` to `to`, recording the change
pub(crate) fn transition(phase: &mut Phase, to: Phase, events: &mut Vec<GameEvent>) {
    if *phase == to {
        return;
    }
    log::info!("Phase {:?} -> {:?}", phase, to);
    events.push(GameEvent::PhaseChanged { from: *phase, to });
    *phase = to;
}
