//! Sound output
//!
//! Game events are turned into tones by the core synthesizer and handed to a
//! [`SoundSink`]. Playback is fire-and-forget.

use game_core::{AudioSample, Events, Tone, ToneSynthesizer};

/// Something that can play a mono sample buffer
pub trait SoundSink {
    fn play(&self, sample: AudioSample);
}

/// Drops every sound. Used when built without the `audio` feature.
#[derive(Debug, Default)]
#[cfg_attr(feature = "audio", allow(dead_code))]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&self, _sample: AudioSample) {}
}

#[cfg(feature = "audio")]
pub use output::RodioOutput;

#[cfg(feature = "audio")]
mod output {
    use anyhow::Context;
    use game_core::AudioSample;
    use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

    use super::SoundSink;

    /// Default output device via rodio
    pub struct RodioOutput {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl RodioOutput {
        pub fn open() -> anyhow::Result<Self> {
            let (stream, handle) =
                OutputStream::try_default().context("no audio output device")?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl SoundSink for RodioOutput {
        fn play(&self, sample: AudioSample) {
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    let rate = sample.sample_rate();
                    sink.append(SamplesBuffer::new(1, rate, sample.into_samples()));
                    sink.detach();
                }
                Err(e) => tracing::warn!("Failed to create audio sink: {e}"),
            }
        }
    }
}

/// Open the platform audio output
#[cfg(feature = "audio")]
pub fn open_output() -> anyhow::Result<Box<dyn SoundSink>> {
    let output = RodioOutput::open()?;
    tracing::info!("audio output opened");
    Ok(Box::new(output))
}

#[cfg(not(feature = "audio"))]
pub fn open_output() -> anyhow::Result<Box<dyn SoundSink>> {
    tracing::info!("built without audio, sounds are muted");
    Ok(Box::new(Silent))
}

/// Plays the tone for each game event that has one
pub struct SoundBoard {
    synth: ToneSynthesizer,
    sink: Box<dyn SoundSink>,
}

impl SoundBoard {
    pub fn new(sample_rate: u32, sink: Box<dyn SoundSink>) -> Self {
        Self {
            synth: ToneSynthesizer::new(sample_rate),
            sink,
        }
    }

    /// Returns the number of sounds started
    pub fn play_events(&self, events: &Events) -> usize {
        let mut played = 0;
        for tone in events.iter().filter_map(Tone::for_event) {
            self.sink.play(self.synth.render(tone));
            played += 1;
        }
        played
    }
}

/// Records sample lengths instead of playing them
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    pub played: std::rc::Rc<std::cell::RefCell<Vec<usize>>>,
}

#[cfg(test)]
impl SoundSink for Recorder {
    fn play(&self, sample: AudioSample) {
        self.played.borrow_mut().push(sample.len());
    }
}
