//! Architectural components.
//!
//! This module contains the architecturally visible state definitions:
//! 1. **GPRs:** The 32-entry general-purpose register file.
//! 2. **Special registers:** Names of the per-stage special-purpose registers and
//!    of the pipeline stages themselves, used by the inspection accessors.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Special-purpose register and stage names.
pub mod special;

pub use gpr::Gpr;
pub use special::{SpRegister, Stage};
