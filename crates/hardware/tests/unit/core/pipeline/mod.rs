/// Hazard unit tests.
pub mod hazards;
