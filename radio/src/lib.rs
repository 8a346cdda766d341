//! Radio Front-End Interfaces Library
//!
//! This crate provides the hardware-facing collaborators of the transmit
//! signal generator: the SDR device abstraction, the replay-buffer write
//! path, and the background sensor poller. The waveform core never touches
//! these interfaces directly; it only hands its encoded payload to them.

pub mod device;
pub mod replay;
pub mod sensors;

use thiserror::Error;

/// Radio front-end errors
#[derive(Error, Debug)]
pub enum RadioError {
    #[error("Device not initialized")]
    NotInitialized,

    #[error("Unknown TX channel: {0}")]
    UnknownChannel(usize),

    #[error("Replay buffer overflow: {requested} words exceed capacity {capacity}")]
    ReplayCapacity { requested: usize, capacity: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sensor not available: {0}")]
    SensorUnavailable(String),
}
