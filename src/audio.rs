//! Audio cue boundary
//!
//! Playback is a frontend concern; the core only names what should sound and
//! when. The session queues [`AudioCmd`]s as it transitions and the main loop
//! drains them into whatever [`AudioSink`] is wired up.

/// Sound asset identifiers the core can cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    /// Looping theme for an Easy run
    ThemeEasy,
    /// Looping theme for a Normal run
    ThemeNormal,
    /// Looping theme for a Hard run
    ThemeHard,
    /// Vehicle clipped an obstacle
    Crash,
    /// An obstacle was dodged and scored
    Score,
    /// Life pool exhausted
    GameOver,
}

/// Mixer channels a sink must expose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioChannel {
    /// The looping difficulty theme
    Music,
    /// One-shot effects (crash, score, game over)
    Effects,
}

/// A queued audio instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCmd {
    Play { sound: SoundId, looped: bool },
    Pause(AudioChannel),
    Resume(AudioChannel),
}

impl AudioCmd {
    /// One-shot effect playback
    pub fn effect(sound: SoundId) -> Self {
        AudioCmd::Play { sound, looped: false }
    }

    /// Looping music playback
    pub fn music(sound: SoundId) -> Self {
        AudioCmd::Play { sound, looped: true }
    }
}

/// Playback surface implemented by the frontend
pub trait AudioSink {
    fn play(&mut self, sound: SoundId, looped: bool);
    fn pause(&mut self, channel: AudioChannel);
    fn resume(&mut self, channel: AudioChannel);

    /// Route a queued command to the matching call
    fn apply(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Play { sound, looped } => self.play(sound, looped),
            AudioCmd::Pause(channel) => self.pause(channel),
            AudioCmd::Resume(channel) => self.resume(channel),
        }
    }
}
