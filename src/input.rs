//! Per-frame input surface
//!
//! The frontend polls its event source once per frame and hands the session a
//! [`FrameInput`]: held steering state plus the discrete events that arrived
//! since the last poll, in arrival order. The session processes every event
//! before the tick's physics run, so a pause or menu exit always lands ahead
//! of that tick's movement.

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Left press: menu cursor to the previous entry
    Left,
    /// Right press: menu cursor to the next entry
    Right,
    /// Enter / primary action
    Confirm,
    /// Escape / back
    Cancel,
    /// Pause key
    PauseToggle,
    /// Restart key (game-over screen)
    Restart,
    /// Printable character typed during name entry
    Char(char),
    Backspace,
    /// Window close or hard quit
    Quit,
}

/// Everything the session consumes for one tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Left steering key currently held
    pub steer_left: bool,
    /// Right steering key currently held
    pub steer_right: bool,
    /// Discrete events since the previous frame, in arrival order
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    /// Input frame carrying a single event
    pub fn event(event: InputEvent) -> Self {
        Self {
            events: vec![event],
            ..Default::default()
        }
    }

    /// Signed steering axis: -1.0 left, +1.0 right, 0.0 idle or both held
    pub fn steer_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.steer_left {
            axis -= 1.0;
        }
        if self.steer_right {
            axis += 1.0;
        }
        axis
    }
}
