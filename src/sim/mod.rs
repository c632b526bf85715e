//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - dt-scaled integration driven only by the caller's clock
//! - Seeded RNG only (the spawner owns it)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use spawn::Spawner;
pub use state::{Difficulty, DifficultyProfile, Obstacle, PlayerState, RunState};
pub use tick::{StepResult, step};
