//! Car Dodge native entry point
//!
//! Wires the session core to a demonstration frontend: a scripted autopilot
//! stands in for the keyboard, the renderer and audio sink write to the log.
//! One launch walks the whole session lifecycle (menu, name entry,
//! difficulty, a run with a pause, game over, leaderboard, quit) through the
//! same 60 Hz loop a windowed frontend would use.

use std::path::Path;
use std::process::ExitCode;

use log::{debug, error, info};

use car_dodge::assets;
use car_dodge::audio::{AudioChannel, AudioSink, SoundId};
use car_dodge::consts;
use car_dodge::input::{FrameInput, InputEvent};
use car_dodge::leaderboard::FileLeaderboard;
use car_dodge::platform::FrameClock;
use car_dodge::render::{Renderer, Scene};
use car_dodge::{Session, SessionMode};

/// Files the demo frontend would load. It draws to the log, so none; a
/// windowed frontend lists its fonts and sounds here and refuses to start
/// without them.
const DEMO_ASSETS: &[&str] = &[];

/// Score log in the working directory, as the original kept it
const SCORE_FILE: &str = "car_dodge_scores.txt";

/// Seconds between the autopilot's discrete key presses
const PILOT_CADENCE: f32 = 0.25;

fn main() -> ExitCode {
    env_logger::init();
    info!("Car Dodge starting");

    if let Err(err) = assets::verify(Path::new("assets"), DEMO_ASSETS) {
        error!("startup aborted: {err}");
        return ExitCode::FAILURE;
    }

    let board = FileLeaderboard::new(SCORE_FILE);
    let mut session = Session::new(Box::new(board));
    let mut clock = FrameClock::new(consts::FRAME_RATE);
    let mut renderer = LogRenderer::default();
    let mut audio = LogAudio;
    let mut pilot = AutoPilot::new();

    while !session.should_quit() {
        let dt = clock.frame_start();
        let input = pilot.poll(&session, dt);
        session.frame(&input, dt);
        for cue in session.take_cues() {
            audio.apply(cue);
        }
        let scene = session.scene(clock.wall_secs());
        renderer.draw(&scene);
        pilot.observe(&scene);
        clock.pace();
    }

    info!("Car Dodge shut down cleanly");
    ExitCode::SUCCESS
}

/// Scripted stand-in for a human at the keyboard.
///
/// Menus are walked with a fixed plan per visit; during play it dodges by
/// reading the previous frame's scene, exactly as a player reads the screen.
/// After a while it stops dodging so the run reaches game over on its own.
struct AutoPilot {
    prev_mode: SessionMode,
    /// Times the menu has been entered, first entry included
    menu_visits: u32,
    /// Position within the current screen's key plan
    plan_step: usize,
    action_timer: f32,
    play_time: f32,
    paused_once: bool,
    last_scene: Scene,
}

/// Name the autopilot types on the EnterName screen
const PILOT_NAME: &str = "Demo";

/// How long the autopilot actually dodges before letting the run end
const DODGE_SECS: f32 = 20.0;

impl AutoPilot {
    fn new() -> Self {
        Self {
            prev_mode: SessionMode::Menu,
            menu_visits: 1,
            plan_step: 0,
            action_timer: 0.0,
            play_time: 0.0,
            paused_once: false,
            last_scene: Scene::default(),
        }
    }

    fn poll(&mut self, session: &Session, dt: f32) -> FrameInput {
        let mode = session.mode();
        if mode != self.prev_mode {
            if mode == SessionMode::Menu {
                self.menu_visits += 1;
            }
            if mode == SessionMode::Playing && self.prev_mode != SessionMode::Paused {
                self.play_time = 0.0;
                self.paused_once = false;
            }
            self.prev_mode = mode;
            self.plan_step = 0;
            self.action_timer = 0.0;
        }

        let mut input = FrameInput::default();

        if mode == SessionMode::Playing {
            self.play_time += dt;
            let axis = if self.play_time < DODGE_SECS {
                self.steer()
            } else {
                0.0 // park and let the cubes win
            };
            input.steer_left = axis < 0.0;
            input.steer_right = axis > 0.0;

            // Exercise the pause path once per run
            if self.play_time > 5.0 && !self.paused_once {
                self.paused_once = true;
                input.events.push(InputEvent::PauseToggle);
            }
            return input;
        }

        self.action_timer += dt;
        if self.action_timer < PILOT_CADENCE {
            return input;
        }
        self.action_timer = 0.0;

        if let Some(event) = self.next_key(mode) {
            self.plan_step += 1;
            input.events.push(event);
        }
        input
    }

    /// The scripted key for the current screen, one per cadence interval
    fn next_key(&self, mode: SessionMode) -> Option<InputEvent> {
        let plan: &[InputEvent] = match mode {
            // Visit 1: Play. Visit 2: Leaderboard. Visit 3: Quit.
            SessionMode::Menu => match self.menu_visits {
                1 => &[InputEvent::Confirm],
                2 => &[InputEvent::Right, InputEvent::Confirm],
                _ => &[InputEvent::Right, InputEvent::Right, InputEvent::Confirm],
            },
            SessionMode::EnterName => {
                let chars: Vec<char> = PILOT_NAME.chars().collect();
                return Some(if self.plan_step < chars.len() {
                    InputEvent::Char(chars[self.plan_step])
                } else {
                    InputEvent::Confirm
                });
            }
            SessionMode::SelectDifficulty => &[InputEvent::Confirm],
            SessionMode::Paused => &[InputEvent::PauseToggle],
            SessionMode::GameOver => &[InputEvent::Confirm],
            SessionMode::Leaderboard => &[InputEvent::Confirm],
            SessionMode::Playing => &[],
        };
        plan.get(self.plan_step).copied()
    }

    /// Dodge the nearest threatening cube, drifting back to center when
    /// the lane ahead is clear.
    fn steer(&self) -> f32 {
        let Some(player) = self.last_scene.player else {
            return 0.0;
        };
        let px = player.pos.x;

        let threat = self
            .last_scene
            .obstacles
            .iter()
            .filter(|o| o.pos.z > -25.0)
            .max_by(|a, b| a.pos.z.total_cmp(&b.pos.z));

        match threat {
            Some(o) if (o.pos.x - px).abs() < 3.0 => {
                if px >= o.pos.x { 1.0 } else { -1.0 }
            }
            _ if px.abs() > 0.5 => -px.signum(),
            _ => 0.0,
        }
    }

    fn observe(&mut self, scene: &Scene) {
        self.last_scene = scene.clone();
    }
}

/// Renderer that narrates screens to the log instead of drawing them
#[derive(Default)]
struct LogRenderer {
    last_headline: String,
    frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, scene: &Scene) {
        self.frames += 1;

        let headline = scene.hud.first().map(|h| h.text.as_str()).unwrap_or("");
        if headline != self.last_headline {
            self.last_headline = headline.to_string();
            let lines: Vec<&str> = scene.hud.iter().map(|h| h.text.as_str()).collect();
            info!("screen: {}", lines.join(" | "));
        }

        // Once a second during play, a world snapshot
        if scene.player.is_some() && self.frames % u64::from(consts::FRAME_RATE) == 0 {
            let hud: Vec<&str> = scene.hud.iter().map(|h| h.text.as_str()).collect();
            debug!("{} | {} cubes live", hud.join(" | "), scene.obstacles.len());
        }
    }
}

/// Audio sink that narrates cues to the log instead of playing them
struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: SoundId, looped: bool) {
        debug!("audio: play {sound:?} (looped: {looped})");
    }

    fn pause(&mut self, channel: AudioChannel) {
        debug!("audio: pause {channel:?}");
    }

    fn resume(&mut self, channel: AudioChannel) {
        debug!("audio: resume {channel:?}");
    }
}
