//! Pre-synthesized sine tones.

use std::f64::consts::PI;
use std::time::Duration;

/// Output sample rate for every tone.
pub const SAMPLE_RATE: u32 = 44_100;

/// Peak amplitude of generated tones.
pub const AMPLITUDE: f32 = 0.5;

/// Jump feedback: 440 Hz for 100 ms.
pub const JUMP_HZ: f32 = 440.0;
pub const JUMP_MS: u32 = 100;

/// Game-over feedback: 220 Hz for 300 ms.
pub const GAME_OVER_HZ: f32 = 220.0;
pub const GAME_OVER_MS: u32 = 300;

/// A mono sample buffer holding one fixed-frequency sine wave.
#[derive(Debug, Clone, PartialEq)]
pub struct Tone {
    frequency_hz: f32,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl Tone {
    /// Synthesize `duration_ms` of a sine wave at `frequency_hz`.
    ///
    /// The buffer holds exactly `sample_rate * duration_ms / 1000` samples,
    /// starting at phase zero.
    pub fn sine(frequency_hz: f32, duration_ms: u32, sample_rate: u32) -> Self {
        let len = (u64::from(sample_rate) * u64::from(duration_ms) / 1000) as usize;
        let rate = f64::from(sample_rate);
        let freq = f64::from(frequency_hz);
        let samples = (0..len)
            .map(|i| {
                let t = i as f64 / rate;
                AMPLITUDE * (2.0 * PI * freq * t).sin() as f32
            })
            .collect();

        Self {
            frequency_hz,
            sample_rate,
            samples,
        }
    }

    pub fn jump() -> Self {
        Self::sine(JUMP_HZ, JUMP_MS, SAMPLE_RATE)
    }

    pub fn game_over() -> Self {
        Self::sine(GAME_OVER_HZ, GAME_OVER_MS, SAMPLE_RATE)
    }

    pub fn frequency_hz(&self) -> f32 {
        self.frequency_hz
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.samples.len() as u64 * 1_000_000_000 / u64::from(self.sample_rate))
    }
}
