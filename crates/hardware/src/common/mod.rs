//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Register count, instruction and word widths, the memory reset pattern.
//! 2. **Error Handling:** The `SimError` taxonomy for core faults.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for core faults.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_GPRS, WORD_SIZE};
pub use error::SimError;
