//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It computes:
//! - arithmetic results for `ADD`, `ADDI`, `SUB`, `SUBI` and `XOR`,
//! - effective addresses for `LW` and `SW` (`a + imm`),
//! - branch and jump targets (`npc + imm`).
//!
//! All arithmetic wraps modulo 2^32.

use crate::common::SimError;
use crate::isa::Opcode;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`  - The opcode being executed
    /// * `a`   - First operand (Rs1 value)
    /// * `b`   - Second operand (Rs2 value)
    /// * `imm` - Immediate or resolved branch displacement
    /// * `npc` - Address of the instruction following this one
    ///
    /// Operands an opcode does not use are ignored, so arithmetic results never
    /// depend on `npc` and targets never depend on `a` or `b`.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidInstruction` for `NOP` and `EOP`, which have no ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipesim_core::core::units::alu::Alu;
    /// use pipesim_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 40, 2, 0, 0).unwrap(), 42);
    /// assert_eq!(Alu::execute(Opcode::Subi, 0, 0, 2, 0).unwrap(), (-2i32) as u32);
    /// assert_eq!(Alu::execute(Opcode::Beqz, 0, 0, (-8i32) as u32, 12).unwrap(), 4);
    /// assert!(Alu::execute(Opcode::Nop, 0, 0, 0, 0).is_err());
    /// ```
    pub fn execute(op: Opcode, a: u32, b: u32, imm: u32, npc: u32) -> Result<u32, SimError> {
        match op {
            Opcode::Add => Ok(a.wrapping_add(b)),
            Opcode::Addi => Ok(a.wrapping_add(imm)),
            Opcode::Sub => Ok(a.wrapping_sub(b)),
            Opcode::Subi => Ok(a.wrapping_sub(imm)),
            Opcode::Xor => Ok(a ^ b),
            Opcode::Lw | Opcode::Sw => Ok(a.wrapping_add(imm)),
            Opcode::Beqz
            | Opcode::Bnez
            | Opcode::Bgtz
            | Opcode::Bgez
            | Opcode::Bltz
            | Opcode::Blez
            | Opcode::Jump => Ok(npc.wrapping_add(imm)),
            Opcode::Eop | Opcode::Nop => Err(SimError::InvalidInstruction { opcode: op }),
        }
    }
}
