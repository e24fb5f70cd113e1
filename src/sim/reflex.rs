//! Reflex ("hammer") game
//!
//! The actor is a horizontal bar on the center line whose length doubles as
//! health. Health drains continuously. Targets bounce around the field;
//! sweeping the actor under one scores and heals, while a target that drifts
//! into the actor on its own costs health.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::overlaps;
use super::difficulty::ReflexDifficulty;
use super::entities::EntityStore;
use super::input::FrameInput;
use super::rect::Rect;
use super::spawner::Spawner;
use super::state::{Game, GameEvent, MovingEntity, Outcome, Phase, transition};
use crate::config::ReflexConfig;
use crate::consts::{FIELD_MAX, FIELD_MIN};
use crate::error::ConfigError;
use crate::renderer::{self, DrawList};

/// Complete reflex game state
#[derive(Debug, Clone)]
pub struct ReflexGame<R = Pcg32> {
    config: ReflexConfig,
    pub phase: Phase,
    /// Actor center x (the actor always sits on y = 0)
    pub actor_x: f32,
    /// Actor length in target widths; this is also the health
    pub actor_length: f32,
    pub targets: EntityStore<MovingEntity>,
    pub difficulty: ReflexDifficulty,
    pub spawner: Spawner,
    pub score: u32,
    events: Vec<GameEvent>,
    rng: R,
}

impl ReflexGame<Pcg32> {
    /// Create a game with a seeded PCG generator
    pub fn new(config: ReflexConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> ReflexGame<R> {
    /// Create a game drawing spawn randomness from `rng`
    pub fn with_rng(config: ReflexConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let difficulty = ReflexDifficulty::initial(&config);
        Ok(Self {
            phase: Phase::Idle,
            actor_x: 0.0,
            actor_length: config.max_actor_length,
            targets: EntityStore::bounded(config.max_targets),
            spawner: Spawner::new(difficulty.spawn_delay),
            difficulty,
            score: 0,
            events: Vec::new(),
            rng,
            config,
        })
    }

    pub fn config(&self) -> &ReflexConfig {
        &self.config
    }

    /// The actor as drawn at full length
    pub fn actor_rect(&self) -> Rect {
        let size = self.config.target_size;
        Rect::new(
            Vec2::new(self.actor_x, 0.0),
            Vec2::new(self.actor_length * size.x, size.y),
        )
    }

    /// Region a target's center row must enter to count as touching the actor:
    /// the actor's horizontal extent over the band `(-height, height)`.
    pub fn hit_box(&self) -> Rect {
        let size = self.config.target_size;
        Rect {
            center: Vec2::new(self.actor_x, 0.0),
            half: Vec2::new(0.5 * self.actor_length * size.x, size.y),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &FrameInput, dt: f32) {
        let mut started = false;
        match self.phase {
            Phase::Idle => {
                if !input.pointer_down {
                    return;
                }
                transition(&mut self.phase, Phase::Active, &mut self.events);
                started = true;
            }
            Phase::Terminal(_) => {
                if input.restart {
                    self.restart();
                }
            }
            Phase::Active => {}
        }

        match self.phase {
            Phase::Idle => {}
            Phase::Active => {
                // Pointer motion up to and including the starting click is ignored
                if let Some(pointer) = input.pointer.filter(|_| !started) {
                    self.actor_x = pointer.x;
                }
                self.update_active(dt);
            }
            // Targets keep drifting after the round ends
            Phase::Terminal(_) => self.move_targets(dt),
        }
    }

    fn update_active(&mut self, dt: f32) {
        let (lo, hi) = self.actor_rect().center_range_x(FIELD_MIN, FIELD_MAX);
        self.actor_x = self.actor_x.clamp(lo, hi);

        let mut health = self.actor_length - dt * self.difficulty.drain;
        let hit_box = self.hit_box();

        // Sweep: targets already under the actor score
        let swept = self.targets.retain_if(|t| !touches(t, &hit_box));
        for _ in &swept {
            health += self.config.gain;
            self.difficulty = self.difficulty.on_success(&self.config);
            self.score += 1;
            log::info!("Score: {}", self.score);
            self.events.push(GameEvent::Scored { points: self.score });
        }

        self.spawner.update(
            dt,
            &self.difficulty,
            &self.config,
            &mut self.targets,
            &mut self.rng,
        );

        // Contact: targets that moved into the actor this frame penalize.
        // Swept targets are already gone, so nothing is counted twice.
        self.move_targets(dt);
        let contacts = self.targets.retain_if(|t| !touches(t, &hit_box));
        if !contacts.is_empty() {
            log::debug!("{} target(s) hit the actor", contacts.len());
        }
        health -= self.difficulty.drain * contacts.len() as f32;

        self.actor_length = health.min(self.config.max_actor_length);
        if self.actor_length <= 0.0 {
            self.actor_length = 0.0;
            log::info!("Health depleted, final score {}", self.score);
            transition(
                &mut self.phase,
                Phase::Terminal(Outcome::Depleted),
                &mut self.events,
            );
        }
    }

    fn move_targets(&mut self, dt: f32) {
        for target in self.targets.iter_mut() {
            target.integrate(dt);
            target.bounce_within(FIELD_MIN, FIELD_MAX);
        }
    }

    /// Terminal -> Active with a fresh round. No-op in any other phase.
    pub fn restart(&mut self) -> bool {
        match self.phase {
            Phase::Terminal(_) => {}
            Phase::Idle | Phase::Active => return false,
        }
        self.difficulty = self.difficulty.on_reset(&self.config);
        self.targets.clear();
        self.spawner = Spawner::new(self.difficulty.spawn_delay);
        self.actor_length = self.config.max_actor_length;
        self.actor_x = 0.0;
        self.score = 0;
        log::info!("Restart ({})", self.config.restart.as_str());
        transition(&mut self.phase, Phase::Active, &mut self.events);
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// A target touches the hit box when its horizontal extent overlaps the
/// actor and its center row lies strictly inside the band.
fn touches(target: &MovingEntity, hit_box: &Rect) -> bool {
    let probe = Rect {
        center: target.rect.center,
        half: Vec2::new(target.rect.half.x, 0.0),
    };
    overlaps(&probe, hit_box)
}

impl<R: Rng> Game for ReflexGame<R> {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn tick(&mut self, input: &FrameInput, dt: f32) {
        ReflexGame::tick(self, input, dt);
    }

    fn restart(&mut self) -> bool {
        ReflexGame::restart(self)
    }

    fn draw_list(&self) -> DrawList {
        renderer::reflex_draw_list(self)
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        ReflexGame::drain_events(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RestartPolicy;
    use crate::sim::input::{InputEvent, Viewport};

    const EPS: f32 = 1e-5;

    fn click() -> FrameInput {
        FrameInput {
            pointer_down: true,
            ..Default::default()
        }
    }

    fn restart_input() -> FrameInput {
        FrameInput {
            restart: true,
            ..Default::default()
        }
    }

    /// Active game with spawning pushed far into the future
    fn active_game() -> ReflexGame {
        let mut game = ReflexGame::new(ReflexConfig::default(), 12345).unwrap();
        game.tick(&click(), 0.0);
        assert_eq!(game.phase, Phase::Active);
        game.spawner.timer = 1000.0;
        game
    }

    fn target_at(game: &ReflexGame, x: f32, y: f32, vel: Vec2) -> MovingEntity {
        MovingEntity::new(Rect::new(Vec2::new(x, y), game.config.target_size), vel)
    }

    #[test]
    fn test_idle_until_click() {
        let mut game = ReflexGame::new(ReflexConfig::default(), 1).unwrap();
        let input = FrameInput {
            pointer: Some(Vec2::new(0.5, 0.0)),
            ..Default::default()
        };
        game.tick(&input, 1.0 / 60.0);
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.actor_x, 0.0);
        assert_eq!(game.actor_length, 4.0);

        game.tick(&click(), 1.0 / 60.0);
        assert_eq!(game.phase, Phase::Active);
    }

    #[test]
    fn test_actor_stays_centered_until_moved_while_active() {
        let mut game = ReflexGame::new(ReflexConfig::default(), 1).unwrap();
        let mut input = FrameInput::default();
        input.apply(
            &InputEvent::PointerMove { x: 600.0, y: 240.0 },
            &Viewport::default(),
        );
        game.tick(&input, 1.0 / 60.0);
        input.clear_one_shots();
        assert_eq!(game.phase, Phase::Idle);

        // The starting click carries a pointer position too
        let start = FrameInput {
            pointer: Some(Vec2::new(0.8, 0.0)),
            pointer_down: true,
            ..Default::default()
        };
        game.tick(&start, 0.0);
        assert_eq!(game.phase, Phase::Active);
        assert_eq!(game.actor_x, 0.0);

        game.tick(&input, 0.0);
        assert_eq!(game.actor_x, 0.0);

        input.apply(
            &InputEvent::PointerMove { x: 479.5, y: 240.0 },
            &Viewport::default(),
        );
        game.tick(&input, 0.0);
        assert!((game.actor_x - 0.5).abs() < EPS);
    }

    #[test]
    fn test_drain_without_targets() {
        let mut game = active_game();
        game.tick(&FrameInput::default(), 1.0);
        assert!((game.actor_length - 3.9).abs() < EPS);
        assert_eq!(game.phase, Phase::Active);
    }

    #[test]
    fn test_depletion_ends_round() {
        let mut game = active_game();
        game.actor_length = 0.05;
        game.tick(&FrameInput::default(), 1.0);
        assert_eq!(game.actor_length, 0.0);
        assert_eq!(game.phase, Phase::Terminal(Outcome::Depleted));
    }

    #[test]
    fn test_actor_clamped_to_field() {
        let mut game = active_game();
        let input = FrameInput {
            pointer: Some(Vec2::new(1.0, 0.0)),
            ..Default::default()
        };
        game.tick(&input, 0.0);
        let half = 0.5 * game.actor_length * game.config.target_size.x;
        assert!((game.actor_x - (1.0 - half)).abs() < EPS);
    }

    #[test]
    fn test_sweep_scores_and_ramps() {
        let mut game = active_game();
        let t = target_at(&game, 0.0, 0.01, Vec2::ZERO);
        game.targets.try_push(t);

        game.tick(&FrameInput::default(), 0.0);
        assert!(game.targets.is_empty());
        assert_eq!(game.score, 1);
        // 4.0 + 0.5 gain, clamped to max length
        assert_eq!(game.actor_length, 4.0);
        assert!((game.difficulty.spawn_delay - 0.49).abs() < EPS);
        assert!((game.difficulty.drain - 0.101).abs() < EPS);
        assert!((game.difficulty.target_speed - 1.01).abs() < EPS);

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::Scored { points: 1 }));
    }

    #[test]
    fn test_sweep_heals_below_max() {
        let mut game = active_game();
        game.actor_length = 2.0;
        let t = target_at(&game, 0.0, 0.0, Vec2::ZERO);
        game.targets.try_push(t);
        game.tick(&FrameInput::default(), 0.0);
        assert!((game.actor_length - 2.5).abs() < EPS);
    }

    #[test]
    fn test_target_outside_band_is_untouched() {
        let mut game = active_game();
        let t = target_at(&game, 0.0, 0.5, Vec2::ZERO);
        game.targets.try_push(t);
        game.tick(&FrameInput::default(), 0.0);
        assert_eq!(game.targets.len(), 1);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_passive_contact_penalizes() {
        let mut game = active_game();
        game.actor_length = 2.0;
        // Just above the band, moving down into it this frame
        let h = game.config.target_size.y;
        let t = target_at(&game, 0.0, h + 0.01, Vec2::new(0.0, -1.2));
        game.targets.try_push(t);

        let dt = 1.0 / 60.0;
        game.tick(&FrameInput::default(), dt);
        assert!(game.targets.is_empty());
        assert_eq!(game.score, 0);
        let expected = 2.0 - dt * 0.1 - 0.1;
        assert!((game.actor_length - expected).abs() < EPS);
    }

    #[test]
    fn test_swept_target_not_penalized_again() {
        let mut game = active_game();
        game.actor_length = 2.0;
        // Inside the band and still inside after moving
        let t = target_at(&game, 0.0, 0.0, Vec2::new(0.0, 0.1));
        game.targets.try_push(t);
        game.tick(&FrameInput::default(), 0.0);
        assert_eq!(game.score, 1);
        assert!((game.actor_length - 2.5).abs() < EPS);
    }

    #[test]
    fn test_terminal_keeps_targets_moving() {
        let mut game = active_game();
        game.phase = Phase::Terminal(Outcome::Depleted);
        let t = target_at(&game, 0.0, 0.5, Vec2::new(0.3, 0.0));
        game.targets.try_push(t);
        let length = game.actor_length;

        game.tick(&FrameInput::default(), 0.5);
        assert_eq!(game.targets.len(), 1);
        assert!((game.targets.as_slice()[0].rect.center.x - 0.15).abs() < EPS);
        assert_eq!(game.actor_length, length);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut game = active_game();
        game.difficulty = game.difficulty.on_success(&game.config);
        game.score = 5;
        game.actor_length = 0.01;
        game.tick(&FrameInput::default(), 1.0);
        assert!(game.phase.is_terminal());

        game.tick(&restart_input(), 0.0);
        assert_eq!(game.phase, Phase::Active);
        assert_eq!(game.score, 0);
        assert_eq!(game.actor_length, 4.0);
        assert!(game.targets.is_empty());
        assert_eq!(game.difficulty, ReflexDifficulty::initial(&game.config));
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut game = active_game();
        game.phase = Phase::Terminal(Outcome::Depleted);
        assert!(game.restart());
        let difficulty = game.difficulty;
        let spawner = game.spawner;
        assert!(!game.restart());
        assert_eq!(game.difficulty, difficulty);
        assert_eq!(game.spawner, spawner);
        assert_eq!(game.phase, Phase::Active);
    }

    #[test]
    fn test_restart_carry_over() {
        let config = ReflexConfig {
            restart: RestartPolicy::CarryOver,
            ..Default::default()
        };
        let mut game = ReflexGame::new(config, 3).unwrap();
        game.difficulty = game.difficulty.on_success(&game.config);
        let ramped = game.difficulty;
        game.phase = Phase::Terminal(Outcome::Depleted);
        assert!(game.restart());
        assert_eq!(game.difficulty, ramped);
    }

    #[test]
    fn test_unclamped_huge_frame_returns() {
        let mut game = active_game();
        game.tick(&FrameInput::default(), 1.0e8);
        assert_eq!(game.phase, Phase::Terminal(Outcome::Depleted));
        assert!(game.targets.len() <= game.config.max_targets);
    }

    #[test]
    fn test_determinism() {
        let mut a = ReflexGame::new(ReflexConfig::default(), 99999).unwrap();
        let mut b = ReflexGame::new(ReflexConfig::default(), 99999).unwrap();
        let dt = 1.0 / 60.0;
        for frame in 0..600 {
            let input = FrameInput {
                pointer: Some(Vec2::new((frame as f32 * 0.05).sin(), 0.0)),
                pointer_down: frame == 0,
                ..Default::default()
            };
            a.tick(&input, dt);
            b.tick(&input, dt);
        }
        assert_eq!(a.targets.as_slice(), b.targets.as_slice());
        assert_eq!(a.score, b.score);
        assert_eq!(a.actor_length, b.actor_length);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ReflexConfig {
            max_targets: 0,
            ..Default::default()
        };
        assert!(ReflexGame::new(config, 0).is_err());
    }
}
