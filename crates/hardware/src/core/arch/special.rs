//! Special-purpose register and pipeline stage names.
//!
//! Special-purpose registers are the fields of the pipeline latches as seen at
//! the entrance of a stage: `NPC` at the entrance of ID is the IF/ID latch's
//! next-PC, `ALU_OUTPUT` at the entrance of WB is the MEM/WB latch's ALU result,
//! and so on.

use std::fmt;

/// Special-purpose registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpRegister {
    /// Program counter.
    Pc,
    /// Next program counter.
    Npc,
    /// Instruction register. Never a value register; see `Cpu::instruction_at`.
    Ir,
    /// First operand.
    A,
    /// Second operand (also the store data).
    B,
    /// Immediate.
    Imm,
    /// Branch condition.
    Cond,
    /// ALU result.
    AluOutput,
    /// Loaded memory data.
    Lmd,
}

impl SpRegister {
    /// Every special-purpose register, in display order.
    pub const ALL: [Self; 9] = [
        Self::Pc,
        Self::Npc,
        Self::Ir,
        Self::A,
        Self::B,
        Self::Imm,
        Self::Cond,
        Self::AluOutput,
        Self::Lmd,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Npc => "NPC",
            Self::Ir => "IR",
            Self::A => "A",
            Self::B => "B",
            Self::Imm => "IMM",
            Self::Cond => "COND",
            Self::AluOutput => "ALU_OUTPUT",
            Self::Lmd => "LMD",
        }
    }
}

impl fmt::Display for SpRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Instruction decode.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Write-back.
    Wb,
}

impl Stage {
    /// Every stage, in instruction-flow order.
    pub const ALL: [Self; 5] = [Self::If, Self::Id, Self::Ex, Self::Mem, Self::Wb];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
