//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline.
//! It computes arithmetic results, effective addresses and branch targets on
//! the ALU and evaluates branch conditions on the BRU. While decode holds a
//! stalled instruction, execute emits a bubble instead.

use tracing::trace;

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, require};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::{InstClass, Opcode};

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Inserts a `NOP` bubble into EX/MEM while a stall is pending
/// - Leaves the ALU output undefined for `NOP` and `EOP`
/// - Arithmetic uses `A` with `B` or the immediate; loads and stores compute
///   `A + IMM`; branches compute `NPC + IMM` and set the condition
/// - Forwards `B` unchanged for the memory stage
///
/// # Errors
///
/// `SimError::UndefinedOperand` if an operand the opcode needs is undefined.
pub fn execute_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if cpu.stall {
        cpu.ex_mem = ExMem::default();
        trace!(cycle = cpu.stats.cycles, "EX  bubble");
        return Ok(());
    }

    let id = cpu.id_ex;
    let op = id.inst.opcode;

    let (alu_out, cond) = match op.class() {
        InstClass::Nop | InstClass::Eop => (None, None),
        InstClass::RegReg => {
            let a = require(id.a, op, "A")?;
            let b = require(id.b, op, "B")?;
            (Some(Alu::execute(op, a, b, 0, 0)?), None)
        }
        InstClass::RegImm | InstClass::Load | InstClass::Store => {
            let a = require(id.a, op, "A")?;
            let imm = require(id.imm, op, "IMM")?;
            (Some(Alu::execute(op, a, 0, imm, 0)?), None)
        }
        InstClass::Branch => {
            let imm = require(id.imm, op, "IMM")?;
            let npc = require(id.npc, op, "NPC")?;
            let taken = if op == Opcode::Jump {
                true
            } else {
                Bru::is_taken(op, require(id.a, op, "A")?)
            };
            (Some(Alu::execute(op, 0, 0, imm, npc)?), Some(taken))
        }
    };

    trace!(cycle = cpu.stats.cycles, ?alu_out, ?cond, "EX  {}", id.inst);

    cpu.ex_mem = ExMem {
        inst: id.inst,
        alu_out,
        b: id.b,
        cond,
    };
    Ok(())
}
