//! Shared test infrastructure.


/// Reference assembly programs.
pub mod programs;
