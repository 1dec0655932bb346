//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the instruction at the current Program Counter (PC) from
//! instruction memory and advances the PC past it.

use tracing::trace;

use crate::common::{INSTRUCTION_SIZE, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::IfId;

/// Executes the instruction fetch stage of the pipeline.
///
/// Fetches the instruction at `PC` into the IF/ID latch. The latch's next-PC
/// is the current `PC` unless the PC advances, in which case it is the advanced
/// value.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Indexes instruction memory with `(PC - base) / 4`
/// - Advances the PC by 4 only for a real opcode while no stall is pending
/// - A `NOP` or `EOP` leaves the PC in place, so the marker is fetched again
///   every cycle until the program drains
///
/// # Errors
///
/// * `SimError::NoProgram` if no program is loaded.
/// * `SimError::FetchOutOfBounds` if the PC lies outside instruction memory.
pub fn fetch_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let (Some(pc), Some(base)) = (cpu.pc, cpu.base_address) else {
        return Err(SimError::NoProgram);
    };

    let inst = pc
        .checked_sub(base)
        .map(|offset| (offset / INSTRUCTION_SIZE) as usize)
        .and_then(|index| cpu.instr_memory.get(index))
        .copied()
        .ok_or(SimError::FetchOutOfBounds { pc })?;

    let mut npc = pc;
    if inst.opcode.is_real() && !cpu.stall {
        npc = pc.wrapping_add(INSTRUCTION_SIZE);
        cpu.pc = Some(npc);
    }

    trace!(cycle = cpu.stats.cycles, pc = format_args!("{pc:#x}"), "IF  {inst}");

    cpu.if_id = IfId {
        inst,
        pc: Some(pc),
        npc: Some(npc),
    };
    Ok(())
}
