//! Decoded instruction records.
//!
//! An `Instruction` is immutable once decoded. Fields an opcode does not use are
//! `None`; branch and jump immediates are already resolved to a byte displacement
//! relative to the instruction that follows the branch.

use crate::isa::opcode::Opcode;

/// A decoded instruction as stored in instruction memory and carried by the latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Operation.
    pub opcode: Opcode,
    /// First source register index.
    pub src1: Option<usize>,
    /// Second source register index.
    pub src2: Option<usize>,
    /// Destination register index.
    pub dest: Option<usize>,
    /// Immediate or PC-relative byte displacement.
    pub immediate: Option<u32>,
}

impl Instruction {
    /// A no-op with every field undefined. Bubbles and empty slots hold this.
    pub const NOP: Self = Self {
        opcode: Opcode::Nop,
        src1: None,
        src2: None,
        dest: None,
        immediate: None,
    };

    /// The end-of-program marker.
    pub const EOP: Self = Self {
        opcode: Opcode::Eop,
        ..Self::NOP
    };

    /// Register-register arithmetic: `dest <- src1 op src2`.
    pub const fn reg_reg(opcode: Opcode, dest: usize, src1: usize, src2: usize) -> Self {
        Self {
            opcode,
            src1: Some(src1),
            src2: Some(src2),
            dest: Some(dest),
            immediate: None,
        }
    }

    /// Register-immediate arithmetic: `dest <- src1 op imm`.
    pub const fn reg_imm(opcode: Opcode, dest: usize, src1: usize, imm: u32) -> Self {
        Self {
            opcode,
            src1: Some(src1),
            src2: None,
            dest: Some(dest),
            immediate: Some(imm),
        }
    }

    /// `LW dest offset(base)`.
    pub const fn load(dest: usize, base: usize, offset: u32) -> Self {
        Self {
            opcode: Opcode::Lw,
            src1: Some(base),
            src2: None,
            dest: Some(dest),
            immediate: Some(offset),
        }
    }

    /// `SW src offset(base)`.
    pub const fn store(src: usize, base: usize, offset: u32) -> Self {
        Self {
            opcode: Opcode::Sw,
            src1: Some(base),
            src2: Some(src),
            dest: None,
            immediate: Some(offset),
        }
    }

    /// Conditional branch on `src1` with a resolved byte displacement.
    pub const fn branch(opcode: Opcode, src1: usize, displacement: i32) -> Self {
        Self {
            opcode,
            src1: Some(src1),
            src2: None,
            dest: None,
            immediate: Some(displacement as u32),
        }
    }

    /// Unconditional jump with a resolved byte displacement.
    pub const fn jump(displacement: i32) -> Self {
        Self {
            opcode: Opcode::Jump,
            immediate: Some(displacement as u32),
            ..Self::NOP
        }
    }

    /// Whether `reg` is the destination of this instruction.
    pub fn writes(&self, reg: usize) -> bool {
        self.dest == Some(reg)
    }
}
