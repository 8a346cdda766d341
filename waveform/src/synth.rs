//! Waveform Synthesizer
//!
//! Builds the full-length complex sample sequence for a requested signal
//! type: periodic types tile their canonical sequence with whole copies
//! (floor division, remainder samples are dropped), the sine type is
//! computed analytically for exactly the requested count, and the reference
//! type is a plain table lookup.

use crate::preamble::{
    long_training_sequence, short_training_sequence, DEFAULT_LTS_CP, DEFAULT_STS_REPS,
};
use crate::{reference, WaveformError};
use common::types::SignalType;
use num_complex::Complex32;
use std::f32::consts::PI;
use tracing::debug;

/// Fixed digital scale applied to the short training sequence.
///
/// The STS path has always transmitted at 5x regardless of the requested
/// amplitude; the asymmetry against the LTS path is kept for exact parity
/// with deployed behavior.
const STS_FIXED_SCALE: f32 = 5.0;

/// The sine tone frequency is sample_rate / SINE_RATE_DIVISOR, which makes
/// one period span exactly 50 samples at any rate.
const SINE_RATE_DIVISOR: usize = 50;

/// Transmit waveform synthesizer
///
/// Holds the per-run request parameters; each `synthesize` call allocates
/// and returns a fresh sequence, so a single instance is safe to use from
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct WaveformSynthesizer {
    /// Sample rate in samples/second
    sample_rate: f64,
    /// Digital amplitude scale for the amplitude-controlled signal types
    amplitude: f32,
}

impl WaveformSynthesizer {
    /// Create a new synthesizer
    pub fn new(sample_rate: f64, amplitude: f32) -> Result<Self, WaveformError> {
        if !(sample_rate > 0.0) {
            return Err(WaveformError::InvalidParameter(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        Ok(Self {
            sample_rate,
            amplitude,
        })
    }

    /// Sample rate this synthesizer was configured with
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Produce the baseband sequence for `signal_type`.
    ///
    /// Output length is exactly `num_samples` for `Sine` and `Reference`.
    /// For the periodic training types it is
    /// `floor(num_samples / canonical_len) * canonical_len`: only whole
    /// copies of the canonical sequence are emitted and callers must not
    /// assume the exact requested length on those paths.
    pub fn synthesize(
        &self,
        signal_type: SignalType,
        num_samples: usize,
    ) -> Result<Vec<Complex32>, WaveformError> {
        if num_samples == 0 {
            return Err(WaveformError::InvalidParameter(
                "sample count must be positive".to_string(),
            ));
        }

        let samples = match signal_type {
            // Table values are pre-normalized; amplitude is NOT applied here
            SignalType::Reference => reference::prefix(num_samples)?,
            SignalType::LongTraining => {
                let canonical = long_training_sequence(DEFAULT_LTS_CP)?;
                scale(tile(&canonical, num_samples), self.amplitude)
            }
            SignalType::ShortTraining => {
                let canonical = short_training_sequence(DEFAULT_STS_REPS)?;
                scale(tile(&canonical, num_samples), STS_FIXED_SCALE)
            }
            SignalType::Sine => self.sine(num_samples),
        };

        debug!(
            "Synthesized {} waveform: requested {} samples, produced {}",
            signal_type,
            num_samples,
            samples.len()
        );
        Ok(samples)
    }

    /// Parse the raw CLI selector and synthesize.
    ///
    /// Fails with `UnsupportedSignalType` for any selector outside the four
    /// supported spellings.
    pub fn synthesize_named(
        &self,
        selector: &str,
        num_samples: usize,
    ) -> Result<Vec<Complex32>, WaveformError> {
        let signal_type: SignalType = selector.parse()?;
        self.synthesize(signal_type, num_samples)
    }

    /// Complex exponential at sample_rate/50, scaled by the amplitude.
    fn sine(&self, num_samples: usize) -> Vec<Complex32> {
        // phase advances 2*pi/50 per sample; reducing the index modulo the
        // period keeps the argument small and the tone exactly periodic
        (0..num_samples)
            .map(|n| {
                let phase = 2.0 * PI * ((n % SINE_RATE_DIVISOR) as f32)
                    / SINE_RATE_DIVISOR as f32;
                Complex32::from_polar(self.amplitude, phase)
            })
            .collect()
    }
}

/// Repeat the canonical sequence with whole copies up to `num_samples`.
fn tile(canonical: &[Complex32], num_samples: usize) -> Vec<Complex32> {
    let copies = num_samples / canonical.len();
    let mut out = Vec::with_capacity(copies * canonical.len());
    for _ in 0..copies {
        out.extend_from_slice(canonical);
    }
    out
}

fn scale(mut samples: Vec<Complex32>, factor: f32) -> Vec<Complex32> {
    for sample in samples.iter_mut() {
        *sample *= factor;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preamble::{LTS_SYMBOL_LEN, STS_SYMBOL_LEN};

    fn synth() -> WaveformSynthesizer {
        WaveformSynthesizer::new(5e6, 1.0).unwrap()
    }

    #[test]
    fn test_rejects_zero_samples() {
        for ty in [
            SignalType::Reference,
            SignalType::LongTraining,
            SignalType::ShortTraining,
            SignalType::Sine,
        ] {
            assert!(matches!(
                synth().synthesize(ty, 0),
                Err(WaveformError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        assert!(WaveformSynthesizer::new(0.0, 1.0).is_err());
        assert!(WaveformSynthesizer::new(-5e6, 1.0).is_err());
    }

    #[test]
    fn test_sine_scenario() {
        // synthesize(SINE, 100, ampl=1.0, rate=5e6): exactly 100 samples,
        // first sample (1, 0), all magnitudes 1
        let samples = synth().synthesize(SignalType::Sine, 100).unwrap();
        assert_eq!(samples.len(), 100);
        assert!((samples[0].re - 1.0).abs() < 1e-6);
        assert!(samples[0].im.abs() < 1e-6);
        for (i, s) in samples.iter().enumerate() {
            assert!((s.norm() - 1.0).abs() < 1e-5, "magnitude off at {}", i);
        }
    }

    #[test]
    fn test_sine_amplitude() {
        let synth = WaveformSynthesizer::new(5e6, 0.25).unwrap();
        let samples = synth.synthesize(SignalType::Sine, 64).unwrap();
        for s in &samples {
            assert!((s.norm() - 0.25).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sts_tiling_length() {
        // canonical STS = 10 reps * 16 = 160 samples; floor(1000/160) = 6
        let samples = synth().synthesize(SignalType::ShortTraining, 1000).unwrap();
        assert_eq!(samples.len(), 6 * 10 * STS_SYMBOL_LEN);
    }

    #[test]
    fn test_tiling_below_one_period_is_empty() {
        // zero whole copies fit, so the output carries no samples at all
        let lts = synth().synthesize(SignalType::LongTraining, 50).unwrap();
        assert!(lts.is_empty());

        let sts = synth().synthesize(SignalType::ShortTraining, 159).unwrap();
        assert!(sts.is_empty());
    }

    #[test]
    fn test_lts_tiling_length_and_period() {
        // canonical LTS = 32 cp + 64 = 96 samples; floor(1024/96) = 10
        let samples = synth().synthesize(SignalType::LongTraining, 1024).unwrap();
        let canonical_len = 32 + LTS_SYMBOL_LEN;
        assert_eq!(samples.len(), 10 * canonical_len);

        for i in canonical_len..samples.len() {
            let a = samples[i];
            let b = samples[i - canonical_len];
            assert!((a - b).norm() < 1e-6, "period break at {}", i);
        }
    }

    #[test]
    fn test_lts_amplitude_applied() {
        let unit = synth().synthesize(SignalType::LongTraining, 192).unwrap();
        let scaled = WaveformSynthesizer::new(5e6, 2.0)
            .unwrap()
            .synthesize(SignalType::LongTraining, 192)
            .unwrap();
        for (a, b) in unit.iter().zip(scaled.iter()) {
            assert!((*b - *a * 2.0).norm() < 1e-6);
        }
    }

    #[test]
    fn test_sts_ignores_amplitude() {
        // Fixed 5x scale on the STS path regardless of the requested amplitude
        let a = WaveformSynthesizer::new(5e6, 1.0)
            .unwrap()
            .synthesize(SignalType::ShortTraining, 320)
            .unwrap();
        let b = WaveformSynthesizer::new(5e6, 7.5)
            .unwrap()
            .synthesize(SignalType::ShortTraining, 320)
            .unwrap();
        assert_eq!(a, b);

        let reference = short_training_sequence(DEFAULT_STS_REPS).unwrap();
        for (s, r) in a.iter().zip(reference.iter().cycle()) {
            assert!((*s - *r * 5.0).norm() < 1e-6);
        }
    }

    #[test]
    fn test_reference_unscaled_prefix() {
        let samples = synth().synthesize(SignalType::Reference, 256).unwrap();
        assert_eq!(samples, reference::prefix(256).unwrap());

        // amplitude must have no effect on the reference path
        let loud = WaveformSynthesizer::new(5e6, 10.0)
            .unwrap()
            .synthesize(SignalType::Reference, 256)
            .unwrap();
        assert_eq!(samples, loud);
    }

    #[test]
    fn test_reference_out_of_range() {
        let request = reference::TABLE_LEN + 1;
        assert_eq!(
            synth().synthesize(SignalType::Reference, request),
            Err(WaveformError::OutOfRange {
                requested: request,
                available: reference::TABLE_LEN,
            })
        );
    }

    #[test]
    fn test_idempotence() {
        for ty in [
            SignalType::Reference,
            SignalType::LongTraining,
            SignalType::ShortTraining,
            SignalType::Sine,
        ] {
            let a = synth().synthesize(ty, 1024).unwrap();
            let b = synth().synthesize(ty, 1024).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_synthesize_named() {
        let samples = synth().synthesize_named("SINE", 50).unwrap();
        assert_eq!(samples.len(), 50);

        assert!(matches!(
            synth().synthesize_named("FM", 50),
            Err(WaveformError::UnsupportedSignalType(_))
        ));
    }
}
