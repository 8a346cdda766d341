//! Baseband Waveform Synthesis Library
//!
//! This crate implements the transmit-path signal core: canonical training
//! sequence generation, the precomputed cellular reference table, waveform
//! synthesis for a requested sample count, and conversion to the fixed-point
//! register words the replay buffer expects.
//!
//! Everything here is pure and deterministic: identical inputs produce
//! bitwise-identical output sequences, and every call operates on its own
//! freshly allocated buffers.

pub mod convert;
pub mod preamble;
pub mod reference;
mod reference_table;
pub mod synth;

// Re-export commonly used items
pub use convert::{from_fixed_point, to_fixed_point};
pub use preamble::{long_training_sequence, short_training_sequence};
pub use synth::WaveformSynthesizer;

use common::types::ParseError;
use thiserror::Error;

/// Errors reported by the waveform core
///
/// All variants are synchronous and recoverable; generation is deterministic,
/// so retrying without changed inputs cannot succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaveformError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Signal type not supported: {0}")]
    UnsupportedSignalType(String),

    #[error("Requested {requested} samples but only {available} are available")]
    OutOfRange { requested: usize, available: usize },
}

impl From<ParseError> for WaveformError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnsupportedSignalType(s) => Self::UnsupportedSignalType(s),
            other => Self::InvalidParameter(other.to_string()),
        }
    }
}
