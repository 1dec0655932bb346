//! Program images.
//!
//! A `Program` is the ordered list of decoded instructions plus the address
//! the first one is loaded at. Branch displacements are already resolved.

use crate::isa::Instruction;

/// A decoded program ready to be loaded into instruction memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    base_address: u32,
}

impl Program {
    /// Creates a program from decoded instructions.
    pub const fn new(instructions: Vec<Instruction>, base_address: u32) -> Self {
        Self {
            instructions,
            base_address,
        }
    }

    /// Decoded instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Address of the first instruction.
    pub const fn base_address(&self) -> u32 {
        self.base_address
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
