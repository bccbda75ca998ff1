//! Audio feedback module.
//!
//! Two tones are synthesized once at startup and replayed on demand:
//!
//! - **Jump**: 440 Hz sine, 0.1 s
//! - **Game over**: 220 Hz sine, 0.3 s
//!
//! The simulation never touches audio directly. The host drains
//! [`GameEvent`]s after each tick and hands them to [`Audio::handle`], which
//! picks the tone and starts playback without blocking.
//!
//! Output goes through rodio (the default `rodio` feature). Builds without it,
//! and machines where no output device opens, fall back to [`SilentPlayer`].

pub mod player;
pub mod tone;

use thiserror::Error;
use tracing::{debug, warn};

pub use tui_flappy_types as types;

pub use player::{SilentPlayer, TonePlayer};
#[cfg(feature = "rodio")]
pub use player::RodioPlayer;
pub use tone::{Tone, SAMPLE_RATE};

use crate::types::GameEvent;

/// Whether this build can play through an output device.
pub const DEVICE_PLAYBACK: bool = cfg!(feature = "rodio");

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
}

/// The pre-generated tones.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBank {
    jump: Tone,
    game_over: Tone,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            jump: Tone::jump(),
            game_over: Tone::game_over(),
        }
    }

    /// Tone to play for an event, if any.
    pub fn tone_for(&self, event: GameEvent) -> Option<&Tone> {
        match event {
            GameEvent::Jump => Some(&self.jump),
            GameEvent::Collision(_) => Some(&self.game_over),
            GameEvent::Scored => None,
        }
    }
}

/// Routes game events to a playback backend.
pub struct Audio {
    bank: SoundBank,
    player: Box<dyn TonePlayer>,
}

impl Audio {
    pub fn with_player(player: Box<dyn TonePlayer>) -> Self {
        Self {
            bank: SoundBank::new(),
            player,
        }
    }

    pub fn silent() -> Self {
        Self::with_player(Box::new(SilentPlayer))
    }

    /// Open the best available backend. Never fails: falls back to silence.
    pub fn open(enabled: bool) -> Self {
        if !enabled {
            debug!("audio disabled by configuration");
            return Self::silent();
        }
        Self::open_device()
    }

    #[cfg(feature = "rodio")]
    fn open_device() -> Self {
        match RodioPlayer::open() {
            Ok(player) => Self::with_player(Box::new(player)),
            Err(err) => {
                warn!(%err, "falling back to silent audio");
                Self::silent()
            }
        }
    }

    #[cfg(not(feature = "rodio"))]
    fn open_device() -> Self {
        warn!("built without the `rodio` feature; audio is silent");
        Self::silent()
    }

    pub fn backend(&self) -> &'static str {
        self.player.name()
    }

    /// Start the tone for `event`, if it has one.
    pub fn handle(&mut self, event: GameEvent) {
        if let Some(tone) = self.bank.tone_for(event) {
            self.player.play(tone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollisionKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<f32>>>);

    impl TonePlayer for Recorder {
        fn play(&mut self, tone: &Tone) {
            self.0.borrow_mut().push(tone.frequency_hz());
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    #[test]
    fn test_events_route_to_tones() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut audio = Audio::with_player(Box::new(Recorder(played.clone())));

        audio.handle(GameEvent::Jump);
        audio.handle(GameEvent::Scored);
        audio.handle(GameEvent::Collision(CollisionKind::Pipe));
        audio.handle(GameEvent::Collision(CollisionKind::Ground));

        assert_eq!(*played.borrow(), vec![440.0, 220.0, 220.0]);
        assert_eq!(audio.backend(), "recorder");
    }

    #[test]
    fn test_disabled_audio_is_silent() {
        let audio = Audio::open(false);
        assert_eq!(audio.backend(), "silent");
    }

    #[test]
    fn test_sound_bank_tones() {
        let bank = SoundBank::new();
        assert_eq!(bank.tone_for(GameEvent::Jump), Some(&Tone::jump()));
        assert_eq!(
            bank.tone_for(GameEvent::Collision(CollisionKind::Ceiling)),
            Some(&Tone::game_over())
        );
        assert_eq!(bank.tone_for(GameEvent::Scored), None);
    }
}
