//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits load data or the ALU result to the destination register.

use tracing::{info, trace};

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::require;
use crate::isa::InstClass;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - `NOP`, stores, and branches write nothing
/// - `LW` writes the loaded word, everything else the ALU result
///
/// # Errors
///
/// * `SimError::UndefinedOperand` if the value to write back is undefined.
/// * `SimError::InvalidRegister` if the destination is outside the register file.
pub fn wb_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let wb = cpu.mem_wb;
    let op = wb.inst.opcode;

    let (value, operand) = match op.class() {
        InstClass::Nop | InstClass::Store => return Ok(()),
        InstClass::Load => (wb.lmd, "LMD"),
        _ => (wb.alu_out, "ALU_OUTPUT"),
    };

    let Some(dest) = wb.inst.dest else {
        return Ok(());
    };
    let value = require(value, op, operand)?;
    cpu.regs.write(dest, value)?;

    trace!(cycle = cpu.stats.cycles, "WB  R{dest} <- {value:#x}");
    if cpu.trace {
        info!(target: "pipesim::retire", "R{dest} = {value} / {value:#x}   [{}]", wb.inst);
    }
    Ok(())
}
