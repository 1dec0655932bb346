

/// Data memory access.
pub mod memory;
