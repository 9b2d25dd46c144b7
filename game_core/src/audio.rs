//! Procedural sound effects
//!
//! Every effect is a plain sine tone rendered into a mono, signed 16-bit PCM
//! buffer. Nothing here touches an audio device; playback belongs to the
//! client.

use crate::GameEvent;

/// A rendered sound effect: mono signed 16-bit PCM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSample {
    sample_rate: u32,
    samples: Vec<i16>,
}

impl AudioSample {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Hand the PCM data over, e.g. to an output buffer
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}

/// Parameters of one sine tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f64, // Hz
    pub duration: f64,  // seconds
    pub volume: f64,    // 0..=1
}

impl Tone {
    pub const HIT_PADDLE: Tone = Tone {
        frequency: 440.0,
        duration: 0.1,
        volume: 0.2,
    };

    pub const SCORE: Tone = Tone {
        frequency: 220.0,
        duration: 0.2,
        volume: 0.3,
    };

    /// Sound effect for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Tone> {
        match event {
            GameEvent::PaddleHit { .. } => Some(Tone::HIT_PADDLE),
            GameEvent::Scored { .. } => Some(Tone::SCORE),
            GameEvent::WallBounce | GameEvent::MatchOver { .. } => None,
        }
    }
}

/// Samples sine waves at a fixed rate
#[derive(Debug, Clone, Copy)]
pub struct ToneSynthesizer {
    sample_rate: u32,
}

impl ToneSynthesizer {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn generate(&self, frequency: f64, duration: f64, volume: f64) -> AudioSample {
        let rate = self.sample_rate as f64;
        let count = (rate * duration).round().max(0.0) as usize;
        let amplitude = volume * i16::MAX as f64;

        let samples = (0..count)
            .map(|i| {
                let phase = std::f64::consts::TAU * frequency * i as f64 / rate;
                (amplitude * phase.sin()).round() as i16
            })
            .collect();

        AudioSample {
            sample_rate: self.sample_rate,
            samples,
        }
    }

    pub fn render(&self, tone: Tone) -> AudioSample {
        self.generate(tone.frequency, tone.duration, tone.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Params, Side};

    #[test]
    fn test_hit_tone_length_and_range() {
        let synth = ToneSynthesizer::new(Params::SAMPLE_RATE);
        let sample = synth.generate(440.0, 0.1, 0.2);

        assert_eq!(sample.len(), 2205);
        assert_eq!(sample.sample_rate(), 22_050);

        let limit = (0.2 * 32767.0_f64).round() as i16;
        assert!(sample.samples().iter().all(|s| s.abs() <= limit));
        // Sampling lands within half a step of each crest
        let peak = sample.samples().iter().map(|s| s.abs()).max().unwrap_or(0);
        assert!(peak >= 6540, "peak {}", peak);
    }

    #[test]
    fn test_score_tone_length() {
        let synth = ToneSynthesizer::new(Params::SAMPLE_RATE);
        assert_eq!(synth.render(Tone::SCORE).len(), 4410);
    }

    #[test]
    fn test_samples_follow_sine() {
        let synth = ToneSynthesizer::new(8);
        // Two cycles per second at 8 Hz sampling: 0, +peak, 0, -peak, ...
        let sample = synth.generate(2.0, 1.0, 1.0);
        assert_eq!(
            sample.samples(),
            &[0_i16, 32767, 0, -32767, 0, 32767, 0, -32767]
        );
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let synth = ToneSynthesizer::new(Params::SAMPLE_RATE);
        assert!(synth.generate(440.0, 0.0, 0.5).is_empty());
    }

    #[test]
    fn test_event_sounds() {
        assert_eq!(
            Tone::for_event(&GameEvent::PaddleHit { side: Side::Left }),
            Some(Tone::HIT_PADDLE)
        );
        assert_eq!(
            Tone::for_event(&GameEvent::Scored { side: Side::Right }),
            Some(Tone::SCORE)
        );
        assert_eq!(Tone::for_event(&GameEvent::WallBounce), None);
        assert_eq!(
            Tone::for_event(&GameEvent::MatchOver { winner: Side::Left }),
            None
        );
    }
}
