//! Stacking game
//!
//! A level element slides back and forth across its row. Each click drops
//! it onto the tower: the part hanging over the block below is cut away,
//! and the next row starts with whatever width survived. Missing the block
//! below ends the round; filling `max_level` rows wins it.

use glam::Vec2;

use super::collision::{mirror_into_range, span_overlap};
use super::difficulty::StackDifficulty;
use super::entities::EntityStore;
use super::input::FrameInput;
use super::rect::Rect;
use super::state::{Game, GameEvent, Outcome, Phase, transition};
use crate::config::StackConfig;
use crate::consts::{FIELD_MAX, FIELD_MIN};
use crate::error::ConfigError;
use crate::renderer::{self, DrawList};

/// Complete stacking game state
#[derive(Debug, Clone)]
pub struct StackGame {
    config: StackConfig,
    pub phase: Phase,
    /// The sliding level element
    pub level: Rect,
    /// Placed blocks, bottom first
    pub tower: EntityStore<Rect>,
    pub difficulty: StackDifficulty,
    /// Round number, 1-based; advances when a completed tower restarts
    pub round: u32,
    events: Vec<GameEvent>,
}

impl StackGame {
    pub fn new(config: StackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            phase: Phase::Idle,
            level: first_level(&config),
            tower: EntityStore::bounded(config.max_level),
            difficulty: StackDifficulty::initial(&config),
            round: 1,
            events: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Blocks placed so far this round
    pub fn height(&self) -> usize {
        self.tower.len()
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &FrameInput, dt: f32) {
        match self.phase {
            Phase::Idle => {
                if input.pointer_down {
                    transition(&mut self.phase, Phase::Active, &mut self.events);
                }
            }
            Phase::Active => {
                if input.pointer_down {
                    self.place();
                }
                // Placement may have ended the round
                if self.phase == Phase::Active {
                    self.slide(dt);
                }
            }
            Phase::Terminal(_) => {
                if input.restart {
                    self.restart();
                }
            }
        }
    }

    /// Move the level along its row, folding overshoot back off the walls
    fn slide(&mut self, dt: f32) {
        let (lo, hi) = self.level.center_range_x(FIELD_MIN, FIELD_MAX);
        let speed = self.difficulty.level_speed;
        let (x, direction) = mirror_into_range(self.level.center.x + speed * dt, speed, lo, hi);
        self.level.center.x = x;
        self.difficulty.level_speed = direction * speed.abs();
    }

    /// Drop the level onto the tower
    pub fn place(&mut self) {
        if self.phase != Phase::Active {
            return;
        }

        let row_height = self.config.row_height;
        let block = match self.tower.last() {
            None => self.level,
            Some(below) => match span_overlap(self.level.x_span(), below.x_span()) {
                Some((lo, hi)) => Rect::new(
                    Vec2::new((lo + hi) * 0.5, self.level.center.y),
                    Vec2::new((hi - lo).max(self.config.min_width), row_height),
                ),
                None => {
                    log::info!("Missed at height {}", self.tower.len());
                    transition(
                        &mut self.phase,
                        Phase::Terminal(Outcome::Lost),
                        &mut self.events,
                    );
                    return;
                }
            },
        };

        let pushed = self.tower.try_push(block);
        debug_assert!(pushed, "tower is bounded by max_level");
        let height = self.tower.len();
        log::debug!("Placed block {} (width {:.3})", height, block.width());
        self.events.push(GameEvent::Placed {
            height,
            width: block.width(),
        });

        if height >= self.config.max_level {
            log::info!("Tower complete in round {}", self.round);
            transition(
                &mut self.phase,
                Phase::Terminal(Outcome::Won),
                &mut self.events,
            );
            return;
        }

        self.difficulty = self.difficulty.on_success(&self.config);
        self.level = Rect::new(
            Vec2::new(self.level.center.x, block.center.y + row_height),
            Vec2::new(block.width(), row_height),
        );
    }

    /// Terminal -> Active with an empty tower. No-op in any other phase.
    pub fn restart(&mut self) -> bool {
        let won = match self.phase {
            Phase::Terminal(outcome) => outcome == Outcome::Won,
            Phase::Idle | Phase::Active => return false,
        };
        self.difficulty = self.difficulty.on_reset(&self.config, won);
        self.tower.clear();
        self.level = first_level(&self.config);
        if won {
            self.round += 1;
            log::info!("Level {}", self.round);
            self.events.push(GameEvent::LevelReached { level: self.round });
        }
        transition(&mut self.phase, Phase::Active, &mut self.events);
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Level element for the bottom row, centered
fn first_level(config: &StackConfig) -> Rect {
    Rect::new(
        Vec2::new(0.0, FIELD_MIN + 0.5 * config.row_height),
        Vec2::new(config.start_width, config.row_height),
    )
}

impl Game for StackGame {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn tick(&mut self, input: &FrameInput, dt: f32) {
        StackGame::tick(self, input, dt);
    }

    fn restart(&mut self) -> bool {
        StackGame::restart(self)
    }

    fn draw_list(&self) -> DrawList {
        renderer::stack_draw_list(self)
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        StackGame::drain_events(self)
    }
}
