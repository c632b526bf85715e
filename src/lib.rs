//! Car Dodge - a 3D lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, difficulty scaling)
//! - `session`: Menu / name entry / play / pause / game-over state machine
//! - `leaderboard`: Append-only score log with a file-backed gateway
//! - `render` / `audio`: Frontend boundaries the core feeds every frame
//! - `platform`: Frame pacing for the 60 Hz loop

pub mod assets;
pub mod audio;
pub mod input;
pub mod leaderboard;
pub mod platform;
pub mod render;
pub mod session;
pub mod sim;

pub use input::{FrameInput, InputEvent};
pub use session::{Session, SessionMode};

/// Game configuration constants
pub mod consts {
    /// Target frame cadence of the main loop (Hz)
    pub const FRAME_RATE: u32 = 60;

    /// Track geometry
    pub const TRACK_HALF_WIDTH: f32 = 8.0;
    pub const GROUND_Y: f32 = -1.5;
    /// Spacing of the scrolling lane stripes (cosmetic)
    pub const LANE_STRIPE_SPACING: f32 = 4.0;

    /// Player vehicle footprint
    pub const PLAYER_HALF_WIDTH: f32 = 0.9;
    pub const PLAYER_HALF_DEPTH: f32 = 0.6;
    pub const PLAYER_Y: f32 = GROUND_Y + 0.4;
    /// Depth plane the vehicle sits on; obstacles sweep across it toward +z
    pub const PLAYER_Z: f32 = 0.0;
    /// Lateral movement speed (units/s)
    pub const PLAYER_SPEED: f32 = 10.0;
    /// How far the vehicle center may stray from the centerline
    pub const LATERAL_LIMIT: f32 = TRACK_HALF_WIDTH - PLAYER_HALF_WIDTH;

    /// Obstacle cubes
    pub const OBSTACLE_SIZE: f32 = 1.5;
    pub const OBSTACLE_HALF_SIZE: f32 = OBSTACLE_SIZE / 2.0;
    /// Depth at which obstacles enter the world, far ahead of the player
    pub const SPAWN_DEPTH: f32 = -60.0;
    /// Depth past the player at which an obstacle counts as dodged
    pub const DESPAWN_DEPTH: f32 = 4.0;

    /// Scoring and lives
    pub const POINTS_PER_DODGE: u32 = 10;
    pub const STARTING_LIVES: u32 = 3;
    /// Seconds the collision flash tints the vehicle
    pub const HIT_FLASH_SECS: f32 = 1.0;

    /// Name entry and leaderboard display
    pub const MAX_NAME_LEN: usize = 12;
    /// Rows shown on the leaderboard screen, most recent first
    pub const LEADERBOARD_ROWS: usize = 10;

    /// Window size frontends should open with (the original ran 900x600)
    pub const WINDOW_WIDTH: u32 = 900;
    pub const WINDOW_HEIGHT: u32 = 600;
}
