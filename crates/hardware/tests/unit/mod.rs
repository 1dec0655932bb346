//! # Unit Components
//!
//! This module organizes the unit tests by the crate module they cover:
//! shared types, the ISA, the processor core, and the simulation layer.



/// Unit tests for the processor core: register file, functional units,
/// pipeline stages, hazard detection and the CPU container.
pub mod core;



/// Unit tests for statistics and derived metrics.
pub mod stats;
