//! Functional units.
//!
//! This module contains the pure combinational units the execute stage uses:
//! the integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for integer operations and address/target computation.
pub mod alu;

/// Branch Resolution Unit: taken/not-taken decisions.
pub mod bru;
