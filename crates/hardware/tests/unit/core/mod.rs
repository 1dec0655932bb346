
/// CPU container, data memory and the cycle loop.
pub mod cpu;

/// Pipeline stages and hazard detection.
pub mod pipeline;
