//! Single simulation step
//!
//! Advances one run by `dt` seconds. The step order is load-bearing:
//! steering, spawn, advance-and-classify, consequence. Obstacle travel for
//! the step uses the speed captured BEFORE escalation, so a cube moves at
//! the speed the player saw, not the speed the run will have next step.

use crate::consts::*;
use crate::sim::collision::collides;
use crate::sim::spawn::Spawner;
use crate::sim::state::{Obstacle, PlayerState, RunState};

/// What one step did to the run, for the session layer to act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Points earned this step (dodged obstacles)
    pub score_delta: u32,
    /// Change in lives, zero or negative (collisions this step)
    pub lives_delta: i32,
    /// Lives reached zero during this step
    pub terminal: bool,
}

/// Advance the run by `dt` seconds.
///
/// Each obstacle exits exactly one way per step: a collision consumes it
/// without scoring, and only a non-colliding cube past the despawn plane
/// scores. An obstacle is never counted twice.
pub fn step(
    player: &mut PlayerState,
    run: &mut RunState,
    obstacles: &mut Vec<Obstacle>,
    spawner: &mut Spawner,
    steer_axis: f32,
    dt: f32,
) -> StepResult {
    let mut result = StepResult::default();

    // 1. Steering (clamped inside) and flash decay
    player.steer(steer_axis, dt);
    player.decay_flash(dt);

    // 2. Spawn cadence
    if let Some(obstacle) = spawner.maybe_spawn(run, dt) {
        obstacles.push(obstacle);
    }

    // 3. Capture travel at the current speed, then escalate continuously
    let dz = run.obstacle_speed * dt;
    run.obstacle_speed += run.speed_increment * dt;
    run.scroll(dz);

    // 4. Advance and classify in insertion order; drop consumed cubes
    let mut collisions: u32 = 0;
    obstacles.retain_mut(|obstacle| {
        obstacle.advance(dz);
        if collides(player, obstacle) {
            collisions += 1;
            false
        } else if obstacle.pos.z > DESPAWN_DEPTH {
            result.score_delta += POINTS_PER_DODGE;
            false
        } else {
            true
        }
    });

    // 5. Consequences
    run.score += result.score_delta;
    if collisions > 0 {
        player.hit_flash = HIT_FLASH_SECS;
        let before = player.lives;
        player.lives = player.lives.saturating_sub(collisions);
        result.lives_delta = player.lives as i32 - before as i32;
        if player.lives == 0 {
            result.terminal = true;
        }
    }

    result
}
