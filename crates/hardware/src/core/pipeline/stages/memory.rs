//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! `LW` reads a word from data memory, `SW` writes one; every other
//! instruction passes its ALU result through untouched.

use tracing::trace;

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{MemWb, require};
use crate::isa::Opcode;

/// Executes the memory access stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// * `SimError::UndefinedOperand` if the address or store data is undefined.
/// * `SimError::MemoryOutOfBounds` or `SimError::MisalignedAccess` for a bad address.
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let ex = cpu.ex_mem;
    let op = ex.inst.opcode;

    let lmd = match op {
        Opcode::Lw => {
            let addr = require(ex.alu_out, op, "ALU_OUTPUT")?;
            let data = cpu.data_memory.read_word(addr)?;
            trace!(cycle = cpu.stats.cycles, addr = format_args!("{addr:#x}"), data, "MEM load");
            Some(data)
        }
        Opcode::Sw => {
            let addr = require(ex.alu_out, op, "ALU_OUTPUT")?;
            let data = require(ex.b, op, "B")?;
            cpu.data_memory.write_word(addr, data)?;
            trace!(cycle = cpu.stats.cycles, addr = format_args!("{addr:#x}"), data, "MEM store");
            None
        }
        _ => None,
    };

    cpu.mem_wb = MemWb {
        inst: ex.inst,
        alu_out: ex.alu_out,
        lmd,
    };
    Ok(())
}
