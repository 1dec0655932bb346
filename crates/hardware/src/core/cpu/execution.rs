//! Main Execution Loop.
//!
//! One call to [`Cpu::tick`] is one clock cycle. The stages run in reverse
//! pipeline order (WB, MEM, EX, ID, IF) so each stage consumes the latch its
//! predecessor wrote in the previous cycle before that latch is replaced.

use super::Cpu;
use crate::common::SimError;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::isa::Opcode;

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    ///
    /// # Errors
    ///
    /// * `SimError::NoProgram` if no program has been loaded.
    /// * Any error raised by a stage; the cycle is not counted and the CPU
    ///   state is left partially advanced.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.pc.is_none() {
            return Err(SimError::NoProgram);
        }

        wb_stage(self)?;
        mem_stage(self)?;
        execute_stage(self)?;
        decode_stage(self)?;
        fetch_stage(self)?;

        self.stats.cycles += 1;
        Ok(())
    }

    /// Whether the end-of-program marker has reached the MEM/WB latch.
    pub fn is_finished(&self) -> bool {
        self.mem_wb.inst.opcode == Opcode::Eop
    }
}
