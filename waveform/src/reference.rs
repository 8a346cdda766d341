//! Cellular Reference Waveform Lookup
//!
//! The reference signal type does not synthesize anything at run time: it
//! reads a precomputed table of 16-bit I/Q pairs and normalizes each entry
//! by 1/32768, which places every sample inside [-1, 1]. The table values
//! are transmitted as-is; no amplitude scaling is applied on this path.

use crate::reference_table::{REFERENCE_I, REFERENCE_Q};
use crate::WaveformError;
use num_complex::Complex32;

pub use crate::reference_table::TABLE_LEN;

/// Fixed scale applied when expanding the stored 16-bit entries
const TABLE_SCALE: f32 = 1.0 / 32768.0;

/// Expand the full reference table into complex baseband samples.
pub fn table() -> Vec<Complex32> {
    REFERENCE_I
        .iter()
        .zip(REFERENCE_Q.iter())
        .map(|(&i, &q)| Complex32::new(i as f32 * TABLE_SCALE, q as f32 * TABLE_SCALE))
        .collect()
}

/// The first `count` entries of the reference table.
///
/// Fails with `OutOfRange` when the request exceeds the table length;
/// reading past the end is an error, never a wraparound.
pub fn prefix(count: usize) -> Result<Vec<Complex32>, WaveformError> {
    if count > TABLE_LEN {
        return Err(WaveformError::OutOfRange {
            requested: count,
            available: TABLE_LEN,
        });
    }

    Ok(REFERENCE_I[..count]
        .iter()
        .zip(REFERENCE_Q[..count].iter())
        .map(|(&i, &q)| Complex32::new(i as f32 * TABLE_SCALE, q as f32 * TABLE_SCALE))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_length() {
        assert_eq!(table().len(), TABLE_LEN);
    }

    #[test]
    fn test_prefix_matches_table() {
        let full = table();
        let head = prefix(100).unwrap();
        assert_eq!(head[..], full[..100]);
    }

    #[test]
    fn test_entries_normalized() {
        for (i, sample) in table().iter().enumerate() {
            assert!(sample.re.abs() <= 1.0, "re out of range at {}", i);
            assert!(sample.im.abs() <= 1.0, "im out of range at {}", i);
        }
    }

    #[test]
    fn test_out_of_range_request() {
        assert_eq!(
            prefix(TABLE_LEN + 1),
            Err(WaveformError::OutOfRange {
                requested: TABLE_LEN + 1,
                available: TABLE_LEN,
            })
        );
    }
}
