//! Core fault definitions.
//!
//! Every fault here is a contract violation on well-formed input and aborts the
//! current `run` with a diagnosable error. Values that are merely "not meaningful
//! in this stage" are represented as `None`, never as an error.

use thiserror::Error;

use crate::isa::Opcode;

/// Faults raised by the pipeline core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// An opcode without an arithmetic meaning (NOP, EOP) reached the ALU.
    #[error("invalid instruction: {opcode} has no ALU operation")]
    InvalidInstruction {
        /// Offending opcode.
        opcode: Opcode,
    },

    /// A data memory access touched an address at or beyond the memory size.
    #[error("memory access at {addr:#010x} out of bounds (memory size {size:#x})")]
    MemoryOutOfBounds {
        /// First byte address of the access.
        addr: u32,
        /// Configured data memory size in bytes.
        size: usize,
    },

    /// A word access used an address that is not 4-byte aligned.
    #[error("misaligned word access at {addr:#010x}")]
    MisalignedAccess {
        /// Faulting address.
        addr: u32,
    },

    /// A register index outside `[0, 31]`.
    #[error("invalid register index {0}")]
    InvalidRegister(usize),

    /// A stage needed an operand that was never defined.
    #[error("{opcode} consumed an undefined {operand} operand")]
    UndefinedOperand {
        /// Opcode of the instruction being processed.
        opcode: Opcode,
        /// Name of the missing latch field.
        operand: &'static str,
    },

    /// `run` was called before a program was loaded.
    #[error("no program loaded")]
    NoProgram,

    /// The program counter points outside instruction memory.
    #[error("instruction fetch at pc {pc:#010x} outside instruction memory")]
    FetchOutOfBounds {
        /// Program counter at the time of the fetch.
        pc: u32,
    },

    /// The program does not fit in instruction memory.
    #[error("program has {len} instructions but instruction memory holds {capacity}")]
    ProgramTooLarge {
        /// Number of instructions in the program.
        len: usize,
        /// Configured instruction memory capacity.
        capacity: usize,
    },

    /// A run to completion exceeded the configured cycle watchdog.
    #[error("program did not reach EOP within {limit} cycles")]
    CycleLimit {
        /// Configured limit.
        limit: u64,
    },
}
