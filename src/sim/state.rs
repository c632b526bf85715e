//! Run entities and per-run state
//!
//! Everything the simulation step mutates lives here: the player vehicle,
//! the live obstacle set's element type, and the run-wide scalars. The
//! difficulty table is the only tuning input; a profile is chosen once at
//! run start and never changes mid-run.

use glam::Vec3;

use crate::audio::SoundId;
use crate::consts::*;

/// Difficulty settings the player can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Selection order on the difficulty screen
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Tuning constants for this difficulty
    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY_PROFILE,
            Difficulty::Normal => &NORMAL_PROFILE,
            Difficulty::Hard => &HARD_PROFILE,
        }
    }
}

/// Per-difficulty tuning, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Seconds between obstacle spawns
    pub spawn_interval: f32,
    /// Obstacle speed at run start (units/s)
    pub initial_speed: f32,
    /// Speed gained per second of play
    pub speed_increment: f32,
    /// Looping theme started with the run
    pub theme: SoundId,
}

const EASY_PROFILE: DifficultyProfile = DifficultyProfile {
    spawn_interval: 1.25,
    initial_speed: 12.0,
    speed_increment: 0.18,
    theme: SoundId::ThemeEasy,
};

const NORMAL_PROFILE: DifficultyProfile = DifficultyProfile {
    spawn_interval: 1.0,
    initial_speed: 18.0,
    speed_increment: 0.3,
    theme: SoundId::ThemeNormal,
};

const HARD_PROFILE: DifficultyProfile = DifficultyProfile {
    spawn_interval: 0.75,
    initial_speed: 24.0,
    speed_increment: 0.45,
    theme: SoundId::ThemeHard,
};

/// A cube sliding down the track toward the player
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// World position of the cube center
    pub pos: Vec3,
    pub half_size: f32,
    /// RGB in [0,1], randomized at spawn
    pub color: Vec3,
}

impl Obstacle {
    pub fn new(pos: Vec3, half_size: f32, color: Vec3) -> Self {
        Self { pos, half_size, color }
    }

    /// Slide toward (and eventually past) the player's depth plane
    pub fn advance(&mut self, dz: f32) {
        self.pos.z += dz;
    }
}

/// The player vehicle during a run
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Lateral offset from the track centerline
    pub lateral: f32,
    pub lives: u32,
    /// Seconds of collision flash remaining (cosmetic)
    pub hit_flash: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            lateral: 0.0,
            lives: STARTING_LIVES,
            hit_flash: 0.0,
        }
    }

    /// Apply held steering, then clamp to the track
    pub fn steer(&mut self, axis: f32, dt: f32) {
        self.lateral += axis * PLAYER_SPEED * dt;
        self.lateral = self.lateral.clamp(-LATERAL_LIMIT, LATERAL_LIMIT);
    }

    /// Run down the collision flash
    pub fn decay_flash(&mut self, dt: f32) {
        self.hit_flash = (self.hit_flash - dt).max(0.0);
    }

    /// Flash strength in [0,1] for the renderer
    pub fn flash_intensity(&self) -> f32 {
        (self.hit_flash / HIT_FLASH_SECS).clamp(0.0, 1.0)
    }
}

/// Run-wide scalars reset at every run start
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub score: u32,
    /// Current obstacle speed; never decreases within a run
    pub obstacle_speed: f32,
    /// Speed gained per second, from the difficulty profile
    pub speed_increment: f32,
    /// Accumulated seconds since the last spawn
    pub spawn_timer: f32,
    /// Seconds between spawns, from the difficulty profile
    pub spawn_interval: f32,
    /// Ground-stripe scroll phase (cosmetic)
    pub track_scroll: f32,
}

impl RunState {
    /// Fresh run tuned by a difficulty profile
    pub fn new(profile: &DifficultyProfile) -> Self {
        Self {
            score: 0,
            obstacle_speed: profile.initial_speed,
            speed_increment: profile.speed_increment,
            spawn_timer: 0.0,
            spawn_interval: profile.spawn_interval,
            track_scroll: 0.0,
        }
    }

    /// Advance the stripe scroll, wrapping at the stripe spacing
    pub fn scroll(&mut self, dz: f32) {
        self.track_scroll = (self.track_scroll + dz) % LANE_STRIPE_SPACING;
    }
}
