//! Five-stage in-order pipeline simulator library.
//!
//! This crate implements a cycle-accurate functional simulator for a small RISC-style
//! instruction set:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), register file,
//!    data memory, hazard detection and stall injection.
//! 2. **ISA:** Opcodes, instruction records, classification predicates and disassembly.
//! 3. **Simulation:** Assembly loader, the top-level `Simulator`, configuration and
//!    statistics collection.

/// Common types and constants (sentinels, sizes, errors).
pub mod common;
/// Simulator configuration (defaults and serde-deserializable structures).
pub mod config;
/// CPU core (architectural state, pipeline, functional units).
pub mod core;
/// Instruction set (opcodes, instruction records, disassembly).
pub mod isa;
/// Program loading and the top-level simulator.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, latches and stats.
pub use crate::core::Cpu;
/// Simulator error type.
pub use crate::common::SimError;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::simulator::{Simulator, StopReason};
/// Loaded program image.
pub use crate::sim::program::Program;
