//! Simulation statistics collection and reporting.
//!
//! This module tracks the performance counters of the pipeline. It provides:
//! 1. **Cycle and IPC:** Elapsed cycles, executed instructions, and derived metrics (IPC, CPI).
//! 2. **Stalls:** Cycles in which decode held an instruction on a data hazard.

use std::fmt;

/// Simulation statistics structure tracking the pipeline's counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total clock cycles elapsed.
    pub cycles: u64,
    /// Number of real instructions (not `NOP` or `EOP`) that passed decode.
    pub instructions_executed: u64,
    /// Cycles in which decode held a stalled instruction.
    pub stalls: u64,
}

impl SimStats {
    /// Instructions per cycle.
    ///
    /// # Returns
    ///
    /// `None` until at least one cycle has elapsed.
    pub fn ipc(&self) -> Option<f64> {
        (self.cycles != 0).then(|| self.instructions_executed as f64 / self.cycles as f64)
    }

    /// Cycles per instruction, `None` until an instruction has executed.
    pub fn cpi(&self) -> Option<f64> {
        (self.instructions_executed != 0)
            .then(|| self.cycles as f64 / self.instructions_executed as f64)
    }

    /// Writes the statistics report to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`.
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u64| {
            if self.cycles == 0 {
                0.0
            } else {
                (n as f64 / self.cycles as f64) * 100.0
            }
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_executed)?;
        match self.ipc() {
            Some(ipc) => writeln!(f, "sim_ipc                  {ipc:.4}")?,
            None => writeln!(f, "sim_ipc                  -")?,
        }
        match self.cpi() {
            Some(cpi) => writeln!(f, "sim_cpi                  {cpi:.4}")?,
            None => writeln!(f, "sim_cpi                  -")?,
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(
            f,
            "  stalls.data            {} ({:.2}%)",
            self.stalls,
            pct(self.stalls)
        )?;
        writeln!(f, "==========================================================")
    }
}
