//! Frame pacing
//!
//! The main loop is rate-limited by a blocking wait at the end of each
//! iteration. `dt` is the measured time since the previous frame start,
//! never a constant: a missed deadline simply produces a larger `dt` for
//! the next step, which scales every position and timer delta through it.

use std::thread;
use std::time::{Duration, Instant};

use log::debug;

/// Blocking 60 Hz (or whatever rate) pacer for the main loop
pub struct FrameClock {
    frame: Duration,
    start: Instant,
    last_frame: Instant,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(rate_hz: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(rate_hz.max(1))),
            start: now,
            last_frame: now,
            deadline: now,
        }
    }

    /// Mark the top of a frame; returns seconds elapsed since the previous
    /// frame start (near zero on the very first frame).
    pub fn frame_start(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }

    /// Block until the next frame deadline. An overrun re-anchors the
    /// deadline at now instead of trying to catch up with extra frames.
    pub fn pace(&mut self) {
        self.deadline += self.frame;
        let now = Instant::now();
        if now < self.deadline {
            thread::sleep(self.deadline - now);
        } else {
            debug!(
                "frame overran its budget by {:?}",
                now.duration_since(self.deadline)
            );
            self.deadline = now;
        }
    }

    /// Wall-clock seconds since the clock was created. Cosmetic effects
    /// only (the name-entry cursor blink); gameplay always uses `dt`.
    pub fn wall_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
