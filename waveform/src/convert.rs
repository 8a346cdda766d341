//! Fixed-Point Sample Conversion
//!
//! The replay buffer takes one 32-bit register word per complex sample:
//! 16-bit signed I (real) in the upper half, 16-bit signed Q (imaginary) in
//! the lower half. Encoding multiplies by full scale (32767), rounds, and
//! saturates at the 16-bit bounds; it never wraps. This layout is a wire
//! format and must match the hardware bit-for-bit.
//!
//! Because encoding scales by 32767 while decoding divides by 32768, a
//! round trip can be off by up to 1.5 quantization steps near full scale,
//! not the single step the rounding alone would allow.

use num_complex::Complex32;

/// Encoding scale: full-scale float 1.0 maps to 32767
pub const FULL_SCALE: f32 = 32767.0;

/// Decoding scale, matching how the hardware DAC path interprets the words
const DECODE_SCALE: f32 = 1.0 / 32768.0;

/// Quantize one float component to a saturating 16-bit signed value.
fn quantize(value: f32) -> i16 {
    (value * FULL_SCALE)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Pack one complex sample into a replay-buffer register word.
pub fn pack_sample(sample: Complex32) -> u32 {
    let i = quantize(sample.re);
    let q = quantize(sample.im);
    ((i as u16 as u32) << 16) | (q as u16 as u32)
}

/// Decode one register word back into a complex sample.
pub fn unpack_sample(word: u32) -> Complex32 {
    let i = (word >> 16) as u16 as i16;
    let q = word as u16 as i16;
    Complex32::new(i as f32 * DECODE_SCALE, q as f32 * DECODE_SCALE)
}

/// Convert a sample sequence to replay-buffer words, one per sample.
pub fn to_fixed_point(samples: &[Complex32]) -> Vec<u32> {
    samples.iter().map(|&s| pack_sample(s)).collect()
}

/// Decode a word sequence back to complex samples.
pub fn from_fixed_point(words: &[u32]) -> Vec<Complex32> {
    words.iter().map(|&w| unpack_sample(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One quantization step of the 16-bit format
    const STEP: f32 = 1.0 / 32768.0;

    #[test]
    fn test_word_layout() {
        // 0.5 -> 16384 = 0x4000 in the upper half,
        // -0.25 -> -8192 = 0xE000 in the lower half
        let word = pack_sample(Complex32::new(0.5, -0.25));
        assert_eq!(word, 0x4000_E000);
    }

    #[test]
    fn test_full_scale_boundary() {
        // (1.0, -1.0) packs the maximum positive with the mirrored negative
        let word = pack_sample(Complex32::new(1.0, -1.0));
        assert_eq!(word >> 16, 0x7FFF);
        assert_eq!(word & 0xFFFF, (-32767i16 as u16) as u32);
    }

    #[test]
    fn test_saturation_not_wraparound() {
        let word = pack_sample(Complex32::new(2.0, -2.0));
        assert_eq!((word >> 16) as u16 as i16, i16::MAX);
        assert_eq!(word as u16 as i16, i16::MIN);

        // decoded extremes keep their signs
        let decoded = unpack_sample(word);
        assert!(decoded.re > 0.999);
        assert!(decoded.im <= -1.0);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        // Rounding contributes up to half a step; the 32767/32768 scale
        // skew contributes up to another half step near full scale.
        let tolerance = 1.5 * STEP;
        let values = [
            0.0, 1.0, -1.0, 0.5, -0.5, 0.25, 0.1234, -0.9876, 0.999_97, -0.000_03,
        ];
        for &re in &values {
            for &im in &values {
                let original = Complex32::new(re, im);
                let decoded = unpack_sample(pack_sample(original));
                assert!(
                    (decoded.re - re).abs() <= tolerance,
                    "re error too large for {}",
                    re
                );
                assert!(
                    (decoded.im - im).abs() <= tolerance,
                    "im error too large for {}",
                    im
                );
            }
        }
    }

    #[test]
    fn test_zero_maps_to_zero_word() {
        assert_eq!(pack_sample(Complex32::new(0.0, 0.0)), 0);
        assert_eq!(unpack_sample(0), Complex32::new(0.0, 0.0));
    }

    #[test]
    fn test_sequence_conversion() {
        let samples = vec![
            Complex32::new(1.0, 0.0),
            Complex32::new(0.0, 1.0),
            Complex32::new(-1.0, 0.0),
            Complex32::new(0.0, -1.0),
        ];
        let words = to_fixed_point(&samples);
        assert_eq!(words.len(), samples.len());

        let decoded = from_fixed_point(&words);
        for (a, b) in samples.iter().zip(decoded.iter()) {
            assert!((a.re - b.re).abs() <= 1.5 * STEP);
            assert!((a.im - b.im).abs() <= 1.5 * STEP);
        }
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<Complex32> = (0..100)
            .map(|i| Complex32::new((i as f32 * 0.013).sin(), (i as f32 * 0.017).cos()))
            .collect();
        assert_eq!(to_fixed_point(&samples), to_fixed_point(&samples));
    }
}
