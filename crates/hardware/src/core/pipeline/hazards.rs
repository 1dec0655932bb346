//! Data Hazard Detection.
//!
//! There is no forwarding: an instruction that reads a register still being
//! produced by an instruction in the EX/MEM or MEM/WB latch must wait in decode
//! until the producer has written the register file back.
//!
//! By default only register-immediate and register-register arithmetic is
//! checked. Loads, stores and branches read their sources without stalling unless
//! the configuration widens the scope to `HazardScope::AllSources`.

use crate::config::HazardScope;
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::isa::{InstClass, Instruction};

/// Returns the source registers of `inst` that the hazard unit checks.
fn checked_sources(inst: &Instruction, scope: HazardScope) -> [Option<usize>; 2] {
    match (inst.opcode.class(), scope) {
        (InstClass::RegImm, _) => [inst.src1, None],
        (InstClass::RegReg, _) => [inst.src1, inst.src2],
        (InstClass::Load | InstClass::Branch, HazardScope::AllSources) => [inst.src1, None],
        (InstClass::Store, HazardScope::AllSources) => [inst.src1, inst.src2],
        _ => [None, None],
    }
}

/// Checks whether the instruction in the ID/EX latch must stall.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the instruction just decoded (or held).
/// * `ex_mem` - The EX/MEM latch as written by this cycle's execute stage.
/// * `mem_wb` - The MEM/WB latch as written by this cycle's memory stage.
/// * `scope` - Which instruction classes are checked.
///
/// # Returns
///
/// `true` if a checked source register is the destination of the instruction in
/// EX/MEM or MEM/WB.
///
/// # Examples
///
/// ```
/// use pipesim_core::config::HazardScope;
/// use pipesim_core::core::pipeline::hazards::need_stall_raw;
/// use pipesim_core::core::pipeline::latches::{ExMem, IdEx, MemWb};
/// use pipesim_core::isa::{Instruction, Opcode};
///
/// // EX/MEM: ADDI R1 R0 5   <- produces R1
/// // ID/EX:  ADD R2 R1 R1   <- consumes R1
/// let ex_mem = ExMem { inst: Instruction::reg_imm(Opcode::Addi, 1, 0, 5), ..Default::default() };
/// let id_ex = IdEx { inst: Instruction::reg_reg(Opcode::Add, 2, 1, 1), ..Default::default() };
///
/// assert!(need_stall_raw(&id_ex, &ex_mem, &MemWb::default(), HazardScope::Arithmetic));
/// ```
pub fn need_stall_raw(id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb, scope: HazardScope) -> bool {
    checked_sources(&id_ex.inst, scope)
        .into_iter()
        .flatten()
        .any(|reg| ex_mem.inst.writes(reg) || mem_wb.inst.writes(reg))
}
