//! Common Types for the Transmit Signal Generator
//!
//! Defines the selector types shared between the waveform core and the
//! radio front-end collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing operator-supplied selectors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Signal type not supported: {0}. Valid entries: LTE/LTS/STS/SINE")]
    UnsupportedSignalType(String),

    #[error("Unknown antenna selector: {0}. Valid entries: A/B/AB")]
    UnknownAntenna(String),
}

/// Baseband signal type
///
/// The CLI spellings match the original option values: `LTE` for the
/// precomputed cellular reference waveform, `LTS`/`STS` for the Wi-Fi
/// long/short training preambles, and `SINE` for the synthetic tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalType {
    /// Precomputed cellular-like reference waveform (pre-normalized table)
    Reference,
    /// Wi-Fi long training sequence with cyclic prefix
    LongTraining,
    /// Wi-Fi short training sequence
    ShortTraining,
    /// Complex exponential tone
    Sine,
}

impl FromStr for SignalType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LTE" => Ok(Self::Reference),
            "LTS" => Ok(Self::LongTraining),
            "STS" => Ok(Self::ShortTraining),
            "SINE" => Ok(Self::Sine),
            _ => Err(ParseError::UnsupportedSignalType(s.to_string())),
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reference => "LTE",
            Self::LongTraining => "LTS",
            Self::ShortTraining => "STS",
            Self::Sine => "SINE",
        };
        write!(f, "{}", name)
    }
}

/// Transmit antenna selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxAntenna {
    /// Antenna A only (channel 0)
    A,
    /// Antenna B only (channel 1)
    B,
    /// Both antennas (channels 0 and 1)
    Both,
}

impl TxAntenna {
    /// Hardware TX channel indices driven by this selection
    pub fn channels(&self) -> &'static [usize] {
        match self {
            Self::A => &[0],
            Self::B => &[1],
            Self::Both => &[0, 1],
        }
    }
}

impl FromStr for TxAntenna {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "AB" => Ok(Self::Both),
            _ => Err(ParseError::UnknownAntenna(s.to_string())),
        }
    }
}

impl fmt::Display for TxAntenna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::Both => "AB",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_type_parsing() {
        assert_eq!("LTE".parse::<SignalType>().unwrap(), SignalType::Reference);
        assert_eq!("lts".parse::<SignalType>().unwrap(), SignalType::LongTraining);
        assert_eq!("STS".parse::<SignalType>().unwrap(), SignalType::ShortTraining);
        assert_eq!("sine".parse::<SignalType>().unwrap(), SignalType::Sine);

        let err = "QPSK".parse::<SignalType>().unwrap_err();
        assert_eq!(err, ParseError::UnsupportedSignalType("QPSK".to_string()));
    }

    #[test]
    fn test_antenna_parsing() {
        assert_eq!("A".parse::<TxAntenna>().unwrap(), TxAntenna::A);
        assert_eq!("b".parse::<TxAntenna>().unwrap(), TxAntenna::B);
        assert_eq!("AB".parse::<TxAntenna>().unwrap(), TxAntenna::Both);
        assert!("C".parse::<TxAntenna>().is_err());
    }

    #[test]
    fn test_antenna_channels() {
        assert_eq!(TxAntenna::A.channels(), &[0]);
        assert_eq!(TxAntenna::B.channels(), &[1]);
        assert_eq!(TxAntenna::Both.channels(), &[0, 1]);
    }

    #[test]
    fn test_display_round_trip() {
        for ty in [
            SignalType::Reference,
            SignalType::LongTraining,
            SignalType::ShortTraining,
            SignalType::Sine,
        ] {
            assert_eq!(ty.to_string().parse::<SignalType>().unwrap(), ty);
        }
    }
}
