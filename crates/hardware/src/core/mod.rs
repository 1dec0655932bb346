//! Core processor implementation.
//!
//! This module contains the CPU state container, the five-stage pipeline, the
//! architectural register definitions and the functional units the execute stage
//! calls into.

/// Architectural components (general-purpose and special-purpose registers, stages).
pub mod arch;

/// CPU state container and per-cycle orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards).
pub mod pipeline;

/// Functional units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
