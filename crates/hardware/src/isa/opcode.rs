//! Opcode enumeration and classification.
//!
//! The instruction set has sixteen opcodes: word loads/stores, register and
//! immediate integer arithmetic, six conditional branches, an unconditional jump,
//! the end-of-program marker and a no-op. Classification predicates group them
//! the way the decode stage and the hazard unit need them.

use std::str::FromStr;

use thiserror::Error;

/// Instruction opcodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Load word: `Rd <- MEM[Rs1 + imm]`.
    Lw,
    /// Store word: `MEM[Rs1 + imm] <- Rs2`.
    Sw,
    /// Register-register addition.
    Add,
    /// Register-immediate addition.
    Addi,
    /// Register-register subtraction.
    Sub,
    /// Register-immediate subtraction.
    Subi,
    /// Register-register exclusive or.
    Xor,
    /// Branch if `Rs1 == 0`.
    Beqz,
    /// Branch if `Rs1 != 0`.
    Bnez,
    /// Branch if `Rs1 < 0` (signed).
    Bltz,
    /// Branch if `Rs1 > 0` (signed).
    Bgtz,
    /// Branch if `Rs1 <= 0` (signed).
    Blez,
    /// Branch if `Rs1 >= 0` (signed).
    Bgez,
    /// Unconditional jump.
    Jump,
    /// End of program marker.
    Eop,
    /// No operation. Unfilled instruction memory slots and bubbles hold this.
    #[default]
    Nop,
}

/// Operand-selection class of an opcode, as used by the decode stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// No-op (also pipeline bubbles).
    Nop,
    /// End-of-program marker.
    Eop,
    /// Word load.
    Load,
    /// Word store.
    Store,
    /// Conditional branch or unconditional jump.
    Branch,
    /// Register-immediate integer arithmetic.
    RegImm,
    /// Register-register integer arithmetic.
    RegReg,
}

impl Opcode {
    /// Every opcode, in encoding order.
    pub const ALL: [Self; 16] = [
        Self::Lw,
        Self::Sw,
        Self::Add,
        Self::Addi,
        Self::Sub,
        Self::Subi,
        Self::Xor,
        Self::Beqz,
        Self::Bnez,
        Self::Bltz,
        Self::Bgtz,
        Self::Blez,
        Self::Bgez,
        Self::Jump,
        Self::Eop,
        Self::Nop,
    ];

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lw => "LW",
            Self::Sw => "SW",
            Self::Add => "ADD",
            Self::Addi => "ADDI",
            Self::Sub => "SUB",
            Self::Subi => "SUBI",
            Self::Xor => "XOR",
            Self::Beqz => "BEQZ",
            Self::Bnez => "BNEZ",
            Self::Bltz => "BLTZ",
            Self::Bgtz => "BGTZ",
            Self::Blez => "BLEZ",
            Self::Bgez => "BGEZ",
            Self::Jump => "JUMP",
            Self::Eop => "EOP",
            Self::Nop => "NOP",
        }
    }

    /// Conditional branches and the unconditional jump.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Self::Beqz
                | Self::Bnez
                | Self::Bltz
                | Self::Bgtz
                | Self::Blez
                | Self::Bgez
                | Self::Jump
        )
    }

    /// Loads and stores.
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Lw | Self::Sw)
    }

    /// Register-register integer operations.
    pub const fn is_int_r(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Xor)
    }

    /// Register-immediate integer operations.
    pub const fn is_int_imm(self) -> bool {
        matches!(self, Self::Addi | Self::Subi)
    }

    /// Returns the operand-selection class used by decode.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Nop => InstClass::Nop,
            Self::Eop => InstClass::Eop,
            Self::Lw => InstClass::Load,
            Self::Sw => InstClass::Store,
            Self::Addi | Self::Subi => InstClass::RegImm,
            Self::Add | Self::Sub | Self::Xor => InstClass::RegReg,
            Self::Beqz
            | Self::Bnez
            | Self::Bltz
            | Self::Bgtz
            | Self::Blez
            | Self::Bgez
            | Self::Jump => InstClass::Branch,
        }
    }

    /// Whether the instruction does architectural work (counts towards
    /// instructions executed and advances the program counter on fetch).
    pub const fn is_real(self) -> bool {
        !matches!(self, Self::Nop | Self::Eop)
    }
}

/// Error returned when a mnemonic does not name an opcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown opcode `{0}`")]
pub struct ParseOpcodeError(pub String);

impl FromStr for Opcode {
    type Err = ParseOpcodeError;

    /// Parses a mnemonic, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOpcodeError(s.to_string()))
    }
}
