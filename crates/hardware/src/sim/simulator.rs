//! Simulator: the run-control facade around the CPU.
//!
//! Owns the `Cpu` and the configuration it was built from, and exposes the
//! operations a driver needs: load, run, register and memory access, dumps
//! and statistics.

use tracing::{debug, info};

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::{SpRegister, Stage};
use crate::core::cpu::dump::MemoryDump;
use crate::sim::program::Program;
use crate::stats::SimStats;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The `EOP` marker reached the MEM/WB latch.
    EndOfProgram,
    /// The requested number of cycles elapsed.
    CycleBudget,
}

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU state (registers, memories, latches, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a simulator in the reset state.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            config: config.clone(),
        }
    }

    /// Creates a simulator with default settings and the given data memory.
    ///
    /// # Arguments
    ///
    /// * `size_bytes` - Data memory capacity.
    /// * `latency` - Memory latency; stored but does not affect timing.
    pub fn with_memory(size_bytes: usize, latency: u32) -> Self {
        Self::new(&Config::with_memory(size_bytes, latency))
    }

    /// Configuration the simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns every entity to its initial state. The program must be loaded again.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Loads `program` into instruction memory and restarts the pipeline.
    ///
    /// # Errors
    ///
    /// `SimError::ProgramTooLarge` if the program does not fit.
    pub fn load(&mut self, program: &Program) -> Result<(), SimError> {
        self.cpu.load(program)
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// # Errors
    ///
    /// Any error raised by a pipeline stage.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick()
    }

    /// Runs the pipeline.
    ///
    /// # Arguments
    ///
    /// * `cycles` - Cycles to advance, or `0` to run until `EOP` reaches the
    ///   MEM/WB latch. A bounded run also stops early at `EOP`.
    ///
    /// # Errors
    ///
    /// * `SimError::NoProgram` if no program is loaded.
    /// * `SimError::CycleLimit` if a run to completion exceeds `general.max_cycles`.
    /// * Any error raised by a pipeline stage.
    pub fn run(&mut self, cycles: u64) -> Result<StopReason, SimError> {
        if self.cpu.pc.is_none() {
            return Err(SimError::NoProgram);
        }

        let start = self.cpu.stats.cycles;
        let limit = self.config.general.max_cycles;
        debug!(cycles, start, "run");

        loop {
            if self.cpu.is_finished() {
                info!(
                    cycles = self.cpu.stats.cycles,
                    instructions = self.cpu.stats.instructions_executed,
                    stalls = self.cpu.stats.stalls,
                    "end of program"
                );
                return Ok(StopReason::EndOfProgram);
            }

            let elapsed = self.cpu.stats.cycles - start;
            if cycles != 0 && elapsed == cycles {
                return Ok(StopReason::CycleBudget);
            }
            if cycles == 0 && limit != 0 && elapsed >= limit {
                return Err(SimError::CycleLimit { limit });
            }

            self.cpu.tick()?;
        }
    }

    /// Reads a special-purpose register as seen by `stage`.
    ///
    /// See [`Cpu::get_sp_register`] for the stage mapping.
    pub fn get_sp_register(&self, reg: SpRegister, stage: Stage) -> Option<u32> {
        self.cpu.get_sp_register(reg, stage)
    }

    /// Reads a general-purpose register; `None` if it was never written.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidRegister` if `reg` is not in `0..32`.
    pub fn get_gp_register(&self, reg: usize) -> Result<Option<u32>, SimError> {
        self.cpu.regs.read(reg)
    }

    /// Writes a general-purpose register.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidRegister` if `reg` is not in `0..32`.
    pub fn set_gp_register(&mut self, reg: usize, value: u32) -> Result<(), SimError> {
        self.cpu.regs.write(reg, value)
    }

    /// Writes a little-endian word into data memory.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` or `SimError::MisalignedAccess`.
    pub fn write_memory(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        self.cpu.data_memory.write_word(addr, value)
    }

    /// Reads a little-endian word from data memory.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` or `SimError::MisalignedAccess`.
    pub fn read_memory_word(&self, addr: u32) -> Result<u32, SimError> {
        self.cpu.data_memory.read_word(addr)
    }

    /// Raw bytes of data memory in `start..end`.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` if the range is not inside data memory.
    pub fn memory_range(&self, start: u32, end: u32) -> Result<&[u8], SimError> {
        self.cpu.data_memory.range(start, end)
    }

    /// Writes the register dump to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`.
    pub fn write_registers<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self.cpu.register_dump())
    }

    /// Prints the register dump to stdout.
    pub fn print_registers(&self) {
        print!("{}", self.cpu.register_dump());
    }

    /// Returns a printable hex dump of data memory in `start..end`.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` if the range is not inside data memory.
    pub fn memory_dump(&self, start: u32, end: u32) -> Result<MemoryDump<'_>, SimError> {
        self.cpu.memory_dump(start, end)
    }

    /// Prints a hex dump of data memory in `start..end` to stdout.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` if the range is not inside data memory.
    pub fn print_memory(&self, start: u32, end: u32) -> Result<(), SimError> {
        print!("{}", self.cpu.memory_dump(start, end)?);
        Ok(())
    }

    /// Statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Clock cycles elapsed.
    pub const fn get_clock_cycles(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Real instructions that passed decode.
    pub const fn get_instructions_executed(&self) -> u64 {
        self.cpu.stats.instructions_executed
    }

    /// Stall cycles.
    pub const fn get_stalls(&self) -> u64 {
        self.cpu.stats.stalls
    }

    /// Instructions per cycle, `None` before the first cycle.
    pub fn get_ipc(&self) -> Option<f64> {
        self.cpu.stats.ipc()
    }
}
