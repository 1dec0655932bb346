//! Simulation driver and program loading.
//!
//! Provides the `Simulator` run-control facade, the `Program` image handed
//! to the core, and the assembly loader that produces it.

/// Assembly source parsing.
pub mod loader;

/// Loaded program images.
pub mod program;

/// Top-level simulator.
pub mod simulator;
