//! Wi-Fi Training Sequence Generation
//!
//! Produces the canonical 802.11 long (LTS) and short (STS) training
//! sequences in the time domain. Both are defined on a 64-subcarrier grid;
//! the time-domain symbols are obtained with an fftshift-compensated
//! 64-point inverse FFT normalized by 1/N.

use crate::WaveformError;
use num_complex::Complex32;
use rustfft::FftPlanner;
use tracing::debug;

/// Subcarrier grid size for both training sequences
const FFT_SIZE: usize = 64;

/// Length of one long training symbol in time-domain samples
pub const LTS_SYMBOL_LEN: usize = 64;

/// Length of one short training symbol in time-domain samples
pub const STS_SYMBOL_LEN: usize = 16;

/// Cyclic prefix length used by the transmit preamble path
pub const DEFAULT_LTS_CP: usize = 32;

/// Default short-symbol repetition count
pub const DEFAULT_STS_REPS: usize = 10;

/// LTS frequency-domain mask, centered grid (index 0 is subcarrier -32).
/// 52 occupied BPSK subcarriers, DC and band edges empty.
const LTS_FREQ: [i8; FFT_SIZE] = [
    0, 0, 0, 0, 0, 0, 1, 1, -1, -1, 1, 1, -1, 1, -1, 1,
    1, 1, 1, 1, 1, -1, -1, 1, 1, -1, 1, -1, 1, 1, 1, 1,
    0, 1, -1, -1, 1, 1, -1, 1, -1, 1, -1, -1, -1, -1, -1, 1,
    1, -1, -1, 1, -1, 1, -1, 1, 1, 1, 1, 0, 0, 0, 0, 0,
];

/// STS frequency-domain mask, centered grid. Every fourth subcarrier
/// carries s*(1+j) with s from this table, which makes the time-domain
/// symbol periodic with period 16.
const STS_SIGN: [i8; FFT_SIZE] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, -1, 0, 0, 0,
    1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, 1, 0, 0, 0,
    1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
];

/// Inverse FFT of a centered frequency grid, 1/N normalized.
fn ifft_centered(freq: &[Complex32; FFT_SIZE]) -> Vec<Complex32> {
    // ifftshift: move the DC bin from the grid center to index 0
    let mut buffer: Vec<Complex32> = (0..FFT_SIZE)
        .map(|k| freq[(k + FFT_SIZE / 2) % FFT_SIZE])
        .collect();

    let mut planner = FftPlanner::<f32>::new();
    let ifft = planner.plan_fft_inverse(FFT_SIZE);
    ifft.process(&mut buffer);

    for sample in buffer.iter_mut() {
        *sample /= FFT_SIZE as f32;
    }
    buffer
}

/// Generate the long training sequence: one 64-sample LTS symbol prefixed
/// with `cyclic_prefix_len` samples copied from its tail.
///
/// Pure function of its parameter; fails with `InvalidParameter` if the
/// prefix would be longer than the symbol itself.
pub fn long_training_sequence(cyclic_prefix_len: usize) -> Result<Vec<Complex32>, WaveformError> {
    if cyclic_prefix_len > LTS_SYMBOL_LEN {
        return Err(WaveformError::InvalidParameter(format!(
            "cyclic prefix length {} exceeds the {}-sample LTS symbol",
            cyclic_prefix_len, LTS_SYMBOL_LEN
        )));
    }

    let mut freq = [Complex32::new(0.0, 0.0); FFT_SIZE];
    for (bin, &sign) in freq.iter_mut().zip(LTS_FREQ.iter()) {
        *bin = Complex32::new(sign as f32, 0.0);
    }
    let symbol = ifft_centered(&freq);

    let mut sequence = Vec::with_capacity(cyclic_prefix_len + LTS_SYMBOL_LEN);
    sequence.extend_from_slice(&symbol[LTS_SYMBOL_LEN - cyclic_prefix_len..]);
    sequence.extend_from_slice(&symbol);

    debug!(
        "Generated LTS sequence: cp={}, total length {}",
        cyclic_prefix_len,
        sequence.len()
    );
    Ok(sequence)
}

/// Generate the short training sequence: the 16-sample STS symbol replicated
/// `repetitions` times.
///
/// Pure function of its parameter; fails with `InvalidParameter` for zero
/// repetitions.
pub fn short_training_sequence(repetitions: usize) -> Result<Vec<Complex32>, WaveformError> {
    if repetitions == 0 {
        return Err(WaveformError::InvalidParameter(
            "STS repetition count must be at least 1".to_string(),
        ));
    }

    // sqrt(13/6) restores unit average power over the 12 occupied subcarriers
    let scale = (13.0_f32 / 6.0).sqrt();
    let mut freq = [Complex32::new(0.0, 0.0); FFT_SIZE];
    for (bin, &sign) in freq.iter_mut().zip(STS_SIGN.iter()) {
        if sign != 0 {
            *bin = Complex32::new(sign as f32 * scale, sign as f32 * scale);
        }
    }
    let symbol = ifft_centered(&freq);
    let short = &symbol[..STS_SYMBOL_LEN];

    let mut sequence = Vec::with_capacity(repetitions * STS_SYMBOL_LEN);
    for _ in 0..repetitions {
        sequence.extend_from_slice(short);
    }

    debug!(
        "Generated STS sequence: {} repetitions, total length {}",
        repetitions,
        sequence.len()
    );
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lts_length_and_prefix() {
        let seq = long_training_sequence(32).unwrap();
        assert_eq!(seq.len(), 32 + LTS_SYMBOL_LEN);

        // The prefix must be a copy of the symbol tail: seq[i] == seq[i + 64]
        for i in 0..32 {
            let a = seq[i];
            let b = seq[i + LTS_SYMBOL_LEN];
            assert!((a - b).norm() < 1e-6, "prefix mismatch at {}", i);
        }
    }

    #[test]
    fn test_lts_first_symbol_sample() {
        // The standard LTS time-domain symbol starts at 10/64 = 0.15625
        let seq = long_training_sequence(0).unwrap();
        assert!((seq[0].re - 0.15625).abs() < 1e-5);
        assert!(seq[0].im.abs() < 1e-5);
    }

    #[test]
    fn test_lts_energy() {
        // Parseval: 52 unit subcarriers over a 64-point grid give
        // total time-domain energy 52/64 per symbol
        let seq = long_training_sequence(0).unwrap();
        let energy: f32 = seq.iter().map(|s| s.norm_sqr()).sum();
        assert!((energy - 52.0 / 64.0).abs() < 1e-4);
    }

    #[test]
    fn test_lts_rejects_oversized_prefix() {
        assert!(matches!(
            long_training_sequence(65),
            Err(WaveformError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_sts_periodicity() {
        let seq = short_training_sequence(10).unwrap();
        assert_eq!(seq.len(), 160);
        for i in 0..seq.len() {
            let a = seq[i];
            let b = seq[i % STS_SYMBOL_LEN];
            assert!((a - b).norm() < 1e-6, "period break at {}", i);
        }
    }

    #[test]
    fn test_sts_energy() {
        // 12 subcarriers at power 2*(13/6) spread over 64 samples, of which
        // the short symbol takes the first quarter
        let seq = short_training_sequence(1).unwrap();
        let energy: f32 = seq.iter().map(|s| s.norm_sqr()).sum();
        assert!((energy - 52.0 / 64.0 / 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_sts_rejects_zero_reps() {
        assert!(matches!(
            short_training_sequence(0),
            Err(WaveformError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_deterministic_output() {
        let a = long_training_sequence(32).unwrap();
        let b = long_training_sequence(32).unwrap();
        assert_eq!(a, b);

        let a = short_training_sequence(10).unwrap();
        let b = short_training_sequence(10).unwrap();
        assert_eq!(a, b);
    }
}
