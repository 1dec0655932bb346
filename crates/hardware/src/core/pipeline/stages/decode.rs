//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! It reads source operands from the register file into the ID/EX latch and
//! runs the hazard unit against the instructions further down the pipe.
//!
//! A stalled instruction stays in ID/EX with its operand values dropped. Each
//! following cycle re-checks it; once the hazard clears the operands are read
//! again, now that the producer has written back.

use tracing::{debug, trace};

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::arch::Gpr;
use crate::core::pipeline::hazards::need_stall_raw;
use crate::core::pipeline::latches::IdEx;
use crate::isa::{InstClass, Instruction};

/// Builds the ID/EX latch for `inst`, reading its operands from `regs`.
fn read_operands(regs: &Gpr, inst: Instruction, npc: Option<u32>) -> Result<IdEx, SimError> {
    let read = |idx: Option<usize>| idx.map_or(Ok(None), |r| regs.read(r));

    let (a, b) = match inst.opcode.class() {
        InstClass::Nop | InstClass::Eop => (None, None),
        InstClass::Load | InstClass::Branch | InstClass::RegImm => (read(inst.src1)?, None),
        InstClass::Store | InstClass::RegReg => (read(inst.src1)?, read(inst.src2)?),
    };

    Ok(IdEx {
        inst,
        npc,
        a,
        b,
        imm: inst.immediate,
    })
}

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - With no stall pending, decodes the IF/ID instruction into ID/EX and counts
///   it as executed when it is a real opcode
/// - With a stall pending, re-checks the held instruction: a persisting hazard
///   counts one stall cycle, a cleared hazard re-reads the operands and releases
///   the stall
/// - A newly detected hazard sets the stall flag and drops the ID/EX values
///
/// # Errors
///
/// `SimError::InvalidRegister` if an instruction names a register outside the file.
pub fn decode_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if cpu.stall {
        if need_stall_raw(&cpu.id_ex, &cpu.ex_mem, &cpu.mem_wb, cpu.hazard_scope) {
            cpu.stats.stalls += 1;
            cpu.id_ex.invalidate();
            debug!(cycle = cpu.stats.cycles, inst = %cpu.id_ex.inst, "ID  stall");
            return Ok(());
        }

        cpu.id_ex = read_operands(&cpu.regs, cpu.id_ex.inst, cpu.if_id.npc)?;
        cpu.stall = false;
        trace!(cycle = cpu.stats.cycles, "ID  {} (released)", cpu.id_ex.inst);
        return Ok(());
    }

    let inst = cpu.if_id.inst;
    cpu.id_ex = read_operands(&cpu.regs, inst, cpu.if_id.npc)?;
    if inst.opcode.is_real() {
        cpu.stats.instructions_executed += 1;
    }
    trace!(
        cycle = cpu.stats.cycles,
        pc = ?cpu.if_id.pc,
        "ID  {inst}"
    );

    if need_stall_raw(&cpu.id_ex, &cpu.ex_mem, &cpu.mem_wb, cpu.hazard_scope) {
        cpu.stall = true;
        cpu.id_ex.invalidate();
        debug!(cycle = cpu.stats.cycles, inst = %inst, "ID  hazard detected");
    }
    Ok(())
}
