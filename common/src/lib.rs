//! Common Types Library
//!
//! This crate provides shared types used across the transmit signal generator.

pub mod types;

// Re-export commonly used items
pub use types::*;
