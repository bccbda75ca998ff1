//! Playback backends.
//!
//! Playback is fire-and-forget: `play` must return immediately and never
//! report failure to the caller. A backend that cannot play a tone logs and
//! drops it.

use tracing::trace;

use crate::tone::Tone;

/// Something that can start playing a tone without blocking.
pub trait TonePlayer {
    fn play(&mut self, tone: &Tone);

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Discards every tone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl TonePlayer for SilentPlayer {
    fn play(&mut self, tone: &Tone) {
        trace!(hz = tone.frequency_hz(), "tone dropped (audio disabled)");
    }

    fn name(&self) -> &'static str {
        "silent"
    }
}

#[cfg(feature = "rodio")]
pub use self::rodio_backend::RodioPlayer;

#[cfg(feature = "rodio")]
mod rodio_backend {
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamHandle, Sink};
    use tracing::warn;

    use super::TonePlayer;
    use crate::tone::Tone;
    use crate::AudioError;

    /// Plays tones on the default output device.
    ///
    /// Each tone gets its own detached sink, so overlapping tones mix instead
    /// of queueing behind each other.
    pub struct RodioPlayer {
        // Dropping the stream stops all output.
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl RodioPlayer {
        pub fn open() -> Result<Self, AudioError> {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|err| AudioError::Unavailable(err.to_string()))?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl TonePlayer for RodioPlayer {
        fn play(&mut self, tone: &Tone) {
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    let source = SamplesBuffer::new(1, tone.sample_rate(), tone.samples().to_vec());
                    sink.append(source);
                    sink.detach();
                }
                Err(err) => warn!(%err, hz = tone.frequency_hz(), "dropping tone"),
            }
        }

        fn name(&self) -> &'static str {
            "rodio"
        }
    }
}
