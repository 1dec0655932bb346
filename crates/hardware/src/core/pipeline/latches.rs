//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the records carried between the five pipeline stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Every latch carries the instruction occupying that boundary.
//! 2. **Values:** Each latch carries only the computed values its downstream stages use.
//! 3. **Undefined Fields:** A field that is not meaningful for the instruction is `None`.
//!
//! The default value of every latch holds a `NOP` with all fields undefined, which is
//! also what a bubble looks like.

use crate::common::SimError;
use crate::isa::{Instruction, Opcode};

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Fetched instruction.
    pub inst: Instruction,
    /// Address the instruction was fetched from.
    pub pc: Option<u32>,
    /// Program counter after the fetch (the following instruction's address
    /// when the program counter advanced).
    pub npc: Option<u32>,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Decoded instruction.
    pub inst: Instruction,
    /// Next program counter, base for branch targets.
    pub npc: Option<u32>,
    /// First operand (Rs1 value).
    pub a: Option<u32>,
    /// Second operand (Rs2 value).
    pub b: Option<u32>,
    /// Immediate.
    pub imm: Option<u32>,
}

impl IdEx {
    /// Drops the operand and next-PC values while keeping the instruction.
    ///
    /// Used while the instruction is held by a stall: its operands were read too
    /// early and must be read again once the hazard clears.
    pub const fn invalidate(&mut self) {
        self.npc = None;
        self.a = None;
        self.b = None;
        self.imm = None;
    }
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Executed instruction.
    pub inst: Instruction,
    /// ALU result: arithmetic result, effective address or branch target.
    pub alu_out: Option<u32>,
    /// Second operand, the data to store for `SW`.
    pub b: Option<u32>,
    /// Branch condition; only defined for branches and jumps.
    pub cond: Option<bool>,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Instruction completing the memory stage.
    pub inst: Instruction,
    /// ALU result passed through the memory stage.
    pub alu_out: Option<u32>,
    /// Loaded memory data; only defined for `LW`.
    pub lmd: Option<u32>,
}

/// Unwraps a latch field a stage needs.
///
/// # Errors
///
/// `SimError::UndefinedOperand` naming `operand` when the field is undefined.
pub(crate) fn require(
    value: Option<u32>,
    opcode: Opcode,
    operand: &'static str,
) -> Result<u32, SimError> {
    value.ok_or(SimError::UndefinedOperand { opcode, operand })
}
