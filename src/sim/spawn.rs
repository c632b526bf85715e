//! Obstacle spawning
//!
//! Owns the run's RNG. Spawn cadence is timer-driven: the run accumulates
//! elapsed time and the spawner emits at most one obstacle per step, at a
//! random lateral slot fully inside the track.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::{Obstacle, RunState};

/// Widest spawn center offset: a full cube width inside each track edge
const SPAWN_LATERAL_RANGE: f32 = TRACK_HALF_WIDTH - OBSTACLE_SIZE;

/// Randomness source for obstacle placement and coloring
pub struct Spawner {
    rng: Pcg32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    /// Spawner with a fresh random seed
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Deterministic spawner for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Accumulate the spawn timer; emit one obstacle once it exceeds the
    /// interval.
    ///
    /// The timer resets to zero on emission, so an oversized `dt` still
    /// produces a single obstacle.
    pub fn maybe_spawn(&mut self, run: &mut RunState, dt: f32) -> Option<Obstacle> {
        run.spawn_timer += dt;
        if run.spawn_timer <= run.spawn_interval {
            return None;
        }
        run.spawn_timer = 0.0;
        Some(self.spawn_obstacle())
    }

    fn spawn_obstacle(&mut self) -> Obstacle {
        let x = self.rng.random_range(-SPAWN_LATERAL_RANGE..=SPAWN_LATERAL_RANGE);
        let pos = Vec3::new(x, GROUND_Y + OBSTACLE_HALF_SIZE, SPAWN_DEPTH);
        Obstacle::new(pos, OBSTACLE_HALF_SIZE, self.random_color())
    }

    /// Bright-ish RGB so cubes stay visible against the track
    fn random_color(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.random_range(0.3..=1.0),
            self.rng.random_range(0.3..=1.0),
            self.rng.random_range(0.3..=1.0),
        )
    }
}
