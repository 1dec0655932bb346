//! Branch Resolution Unit (BRU).
//!
//! Branch outcomes are resolved in order in the Execute stage; there is no
//! prediction. Comparisons other than equality treat the operand as a signed
//! 32-bit value.

use crate::isa::Opcode;

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Decides whether a branch or jump is taken.
    ///
    /// # Arguments
    ///
    /// * `op` - The opcode being executed
    /// * `a`  - Value of the tested register (ignored by `JUMP`)
    ///
    /// # Returns
    ///
    /// `true` for a taken conditional branch and for `JUMP`; `false` for every
    /// opcode that is not a branch.
    pub const fn is_taken(op: Opcode, a: u32) -> bool {
        let signed = a as i32;
        match op {
            Opcode::Beqz => a == 0,
            Opcode::Bnez => a != 0,
            Opcode::Bgtz => signed > 0,
            Opcode::Bgez => signed >= 0,
            Opcode::Bltz => signed < 0,
            Opcode::Blez => signed <= 0,
            Opcode::Jump => true,
            _ => false,
        }
    }
}
