//! Instruction Set Architecture (ISA) definitions.
//!
//! This module defines the instruction set executed by the pipeline. It provides:
//! 1. **Opcodes:** The fixed 16-value opcode enumeration and its classification predicates.
//! 2. **Instructions:** The decoded instruction record carried through the pipeline latches.
//! 3. **Disassembly:** Human-readable rendering of opcodes and instructions.

/// Disassembly (`Display` implementations).
pub mod disasm;

/// Decoded instruction records.
pub mod instruction;

/// Opcode enumeration and classification.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::{InstClass, Opcode, ParseOpcodeError};
