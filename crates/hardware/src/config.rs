//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory size, program capacity, watchdog).
//! 2. **Structures:** General, memory, program and pipeline sections.
//! 3. **Enums:** Hazard detection scope.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! Every field is optional in JSON and falls back to its default.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Data memory size in bytes (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;

    /// Data memory latency in cycles. Accepted but not used for timing.
    pub const MEMORY_LATENCY: u32 = 0;

    /// Instruction memory capacity in instructions.
    pub const PROGRAM_CAPACITY: usize = 50;

    /// Address the program is loaded at.
    pub const BASE_ADDRESS: u32 = 0;

    /// Cycle watchdog for runs to completion.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Which instructions the hazard unit checks for read-after-write dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum HazardScope {
    /// Only register-immediate and register-register arithmetic.
    ///
    /// Loads, stores and branches read their sources without stalling.
    #[default]
    Arithmetic,
    /// Arithmetic plus the sources of loads, stores and conditional branches.
    #[serde(alias = "All")]
    AllSources,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use pipesim_core::config::{Config, HazardScope};
///
/// let json = r#"{
///     "memory": { "size_bytes": 1024 },
///     "pipeline": { "hazard_scope": "AllSources" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.memory.size_bytes, 1024);
/// assert_eq!(config.memory.latency, 0);
/// assert_eq!(config.program.capacity, 50);
/// assert_eq!(config.pipeline.hazard_scope, HazardScope::AllSources);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Data memory configuration
    pub memory: MemoryConfig,
    /// Instruction memory configuration
    pub program: ProgramConfig,
    /// Pipeline configuration
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Default configuration with the given data memory size and latency.
    pub fn with_memory(size_bytes: usize, latency: u32) -> Self {
        Self {
            memory: MemoryConfig {
                size_bytes,
                latency,
            },
            ..Self::default()
        }
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log each register write-back at `info` under the `pipesim::retire` target.
    pub trace_instructions: bool,

    /// Cycle limit for `run(0)`; 0 disables the watchdog.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Capacity in bytes.
    pub size_bytes: usize,

    /// Access latency in cycles. Reserved; the pipeline does not model it.
    pub latency: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::MEMORY_SIZE,
            latency: defaults::MEMORY_LATENCY,
        }
    }
}

/// Instruction memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Number of instruction slots.
    pub capacity: usize,

    /// Default load address.
    pub base_address: u32,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::PROGRAM_CAPACITY,
            base_address: defaults::BASE_ADDRESS,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Read-after-write hazard detection scope.
    pub hazard_scope: HazardScope,
}
