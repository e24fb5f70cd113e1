//! Accumulator-driven target spawning
//!
//! The timer counts down by elapsed time. Each time it reaches zero one
//! spawn is attempted and the current delay is added back, so a long frame
//! or a delay shorter than a frame produces a burst of catch-up spawns.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::ReflexDifficulty;
use super::entities::EntityStore;
use super::rect::Rect;
use super::state::MovingEntity;
use crate::config::ReflexConfig;
use crate::consts::{FIELD_MAX, FIELD_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds until the next spawn attempt
    pub timer: f32,
}

impl Spawner {
    /// Timer seeded with the current spawn delay
    pub fn new(delay: f32) -> Self {
        Self { timer: delay }
    }

    /// Run the countdown for one frame. Returns how many targets were added.
    ///
    /// Attempts made while the store is full are dropped but still advance
    /// the timer.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        difficulty: &ReflexDifficulty,
        config: &ReflexConfig,
        targets: &mut EntityStore<MovingEntity>,
        rng: &mut R,
    ) -> usize {
        let delay = difficulty.spawn_delay;
        debug_assert!(delay > 0.0, "spawn delay must be positive");

        let mut spawned = 0;
        self.timer -= dt;
        // Attempts past a full store are dropped anyway; bounding the backlog
        // keeps `timer += delay` from stalling at large magnitudes.
        let backlog = delay * (config.max_targets as f32 + 1.0);
        if self.timer < -backlog {
            log::warn!("Spawn backlog of {:.1}s truncated", -self.timer);
            self.timer = -backlog;
        }
        while self.timer <= 0.0 {
            if let Some(target) = roll_target(difficulty.target_speed, config, targets, rng) {
                if targets.try_push(target) {
                    spawned += 1;
                }
            }
            self.timer += delay;
        }
        if spawned > 0 {
            log::debug!("Spawned {} target(s), {} live", spawned, targets.len());
        }
        spawned
    }
}

/// Draw position and heading for one spawn attempt.
///
/// Angle and x are always drawn; the entry edge only when there is room.
fn roll_target<R: Rng>(
    speed: f32,
    config: &ReflexConfig,
    targets: &EntityStore<MovingEntity>,
    rng: &mut R,
) -> Option<MovingEntity> {
    let size = config.target_size;
    let angle = rng.random_range(config.spawn_angle_min..=config.spawn_angle_max);
    let x = rng.random_range((FIELD_MIN + 0.5 * size.x)..=(FIELD_MAX - 0.5 * size.x));
    let vx = angle.cos() * speed;
    let vy = angle.sin() * speed;

    if !targets.has_room() {
        return None;
    }

    let (y, vy) = if rng.random_bool(0.5) {
        (FIELD_MAX - 0.5 * size.y, -vy)
    } else {
        (FIELD_MIN + 0.5 * size.y, vy)
    };
    Some(MovingEntity::new(
        Rect::new(Vec2::new(x, y), size),
        Vec2::new(vx, vy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (ReflexConfig, ReflexDifficulty, Pcg32) {
        let config = ReflexConfig::default();
        let difficulty = ReflexDifficulty::initial(&config);
        (config, difficulty, Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_no_spawn_before_delay() {
        let (config, difficulty, mut rng) = setup();
        let mut spawner = Spawner::new(difficulty.spawn_delay);
        let mut targets = EntityStore::bounded(config.max_targets);

        assert_eq!(spawner.update(0.25, &difficulty, &config, &mut targets, &mut rng), 0);
        assert!(targets.is_empty());
        assert!((spawner.timer - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_catch_up_burst() {
        let (config, difficulty, mut rng) = setup();
        let mut spawner = Spawner::new(0.0);
        let mut targets = EntityStore::bounded(config.max_targets);

        // timer -1.0 with delay 0.5: attempts at -1.0, -0.5, 0.0
        let n = spawner.update(1.0, &difficulty, &config, &mut targets, &mut rng);
        assert_eq!(n, 3);
        assert_eq!(targets.len(), 3);
        assert!(spawner.timer > 0.0);
    }

    #[test]
    fn test_full_store_still_advances_timer() {
        let (config, difficulty, mut rng) = setup();
        let mut spawner = Spawner::new(0.0);
        let mut targets = EntityStore::bounded(1);
        targets.try_push(MovingEntity::new(
            Rect::new(Vec2::ZERO, config.target_size),
            Vec2::ZERO,
        ));

        let n = spawner.update(0.0, &difficulty, &config, &mut targets, &mut rng);
        assert_eq!(n, 0);
        assert_eq!(targets.len(), 1);
        assert!((spawner.timer - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_spawned_targets_enter_from_an_edge_heading_inward() {
        let (config, difficulty, mut rng) = setup();
        let mut spawner = Spawner::new(0.0);
        let mut targets = EntityStore::bounded(config.max_targets);
        spawner.update(20.0, &difficulty, &config, &mut targets, &mut rng);
        assert_eq!(targets.len(), config.max_targets);

        let half = config.target_size * 0.5;
        for t in &targets {
            let c = t.rect.center;
            assert!(c.x >= FIELD_MIN + half.x - 1e-6 && c.x <= FIELD_MAX - half.x + 1e-6);
            if c.y > 0.0 {
                assert!((c.y - (FIELD_MAX - half.y)).abs() < 1e-6);
                assert!(t.vel.y < 0.0);
            } else {
                assert!((c.y - (FIELD_MIN + half.y)).abs() < 1e-6);
                assert!(t.vel.y > 0.0);
            }
            let speed = t.vel.length();
            assert!((speed - difficulty.target_speed).abs() < 1e-4);
        }
    }

    #[test]
    fn test_huge_dt_terminates() {
        let (config, difficulty, mut rng) = setup();
        let mut spawner = Spawner::new(difficulty.spawn_delay);
        let mut targets = EntityStore::bounded(config.max_targets);

        let n = spawner.update(1.0e8, &difficulty, &config, &mut targets, &mut rng);
        assert_eq!(n, config.max_targets);
        assert!(spawner.timer > 0.0 && spawner.timer <= difficulty.spawn_delay + 1e-4);

        // Already full: the next huge frame only advances the timer
        assert_eq!(spawner.update(1.0e8, &difficulty, &config, &mut targets, &mut rng), 0);
        assert!(spawner.timer > 0.0);
    }
}
