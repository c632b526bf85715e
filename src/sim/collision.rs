//! Player/obstacle overlap test
//!
//! Collision is a planar footprint check: lateral extents on x, depth
//! extents on z. Height never participates, so a cube "above" the car
//! still counts once the footprints overlap.

use crate::consts::PLAYER_Z;
use crate::sim::state::{Obstacle, PlayerState};

/// True when the obstacle's footprint overlaps the player's.
///
/// Axis-aligned interval overlap on each axis independently:
/// centers closer than the summed half-extents on BOTH x and z.
pub fn collides(player: &PlayerState, obstacle: &Obstacle) -> bool {
    let overlap_x = (player.lateral - obstacle.pos.x).abs()
        <= crate::consts::PLAYER_HALF_WIDTH + obstacle.half_size;
    let overlap_z =
        (PLAYER_Z - obstacle.pos.z).abs() <= crate::consts::PLAYER_HALF_DEPTH + obstacle.half_size;
    overlap_x && overlap_z
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use proptest::prelude::*;

    use super::*;
    use crate::consts::*;

    fn obstacle_at(x: f32, z: f32) -> Obstacle {
        Obstacle::new(Vec3::new(x, GROUND_Y + OBSTACLE_HALF_SIZE, z), OBSTACLE_HALF_SIZE, Vec3::ONE)
    }

    fn player_at(lateral: f32) -> PlayerState {
        let mut p = PlayerState::new();
        p.lateral = lateral;
        p
    }

    #[test]
    fn head_on_overlap_hits() {
        // Both centered on the track, obstacle right at the player's depth
        assert!(collides(&player_at(0.0), &obstacle_at(0.0, 0.0)));
    }

    #[test]
    fn wide_lateral_gap_misses() {
        // 5.0 apart laterally; summed half-extents are 0.9 + 0.75
        assert!(!collides(&player_at(0.0), &obstacle_at(5.0, 0.0)));
    }

    #[test]
    fn touching_edges_count_as_hit() {
        let edge = PLAYER_HALF_WIDTH + OBSTACLE_HALF_SIZE;
        assert!(collides(&player_at(0.0), &obstacle_at(edge, 0.0)));
        assert!(!collides(&player_at(0.0), &obstacle_at(edge + 0.01, 0.0)));
    }

    #[test]
    fn depth_gap_misses_even_when_aligned() {
        let deep = PLAYER_HALF_DEPTH + OBSTACLE_HALF_SIZE + 0.1;
        assert!(!collides(&player_at(0.0), &obstacle_at(0.0, -deep)));
        assert!(!collides(&player_at(0.0), &obstacle_at(0.0, deep)));
    }

    proptest! {
        /// Mirroring both participants across the centerline can't change
        /// the verdict.
        #[test]
        fn overlap_is_mirror_symmetric(
            px in -LATERAL_LIMIT..LATERAL_LIMIT,
            ox in -TRACK_HALF_WIDTH..TRACK_HALF_WIDTH,
            oz in -4.0f32..4.0,
        ) {
            let straight = collides(&player_at(px), &obstacle_at(ox, oz));
            let mirrored = collides(&player_at(-px), &obstacle_at(-ox, oz));
            prop_assert_eq!(straight, mirrored);
        }

        /// Far-away obstacles never collide regardless of lateral placement.
        #[test]
        fn distant_obstacles_never_hit(
            px in -LATERAL_LIMIT..LATERAL_LIMIT,
            ox in -TRACK_HALF_WIDTH..TRACK_HALF_WIDTH,
            oz in -60.0f32..-10.0,
        ) {
            prop_assert!(!collides(&player_at(px), &obstacle_at(ox, oz)));
        }
    }
}
