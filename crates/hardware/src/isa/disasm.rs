//! Instruction disassembly.
//!
//! Renders opcodes and instructions in the assembly syntax accepted by the loader,
//! so traces and dumps can be pasted back into a program file. Branch and jump
//! targets are shown as signed byte displacements since labels are gone after
//! loading.

use std::fmt;

use crate::isa::instruction::Instruction;
use crate::isa::opcode::{InstClass, Opcode};

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Register operand (`R7`), or `R?` when undefined.
struct Reg(Option<usize>);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(r) => write!(f, "R{r}"),
            None => f.write_str("R?"),
        }
    }
}

/// Signed immediate, or `?` when undefined.
struct Imm(Option<u32>);

impl fmt::Display for Imm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v as i32),
            None => f.write_str("?"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode;
        match op.class() {
            InstClass::Nop | InstClass::Eop => write!(f, "{op}"),
            InstClass::RegReg => write!(
                f,
                "{op} {} {} {}",
                Reg(self.dest),
                Reg(self.src1),
                Reg(self.src2)
            ),
            InstClass::RegImm => write!(
                f,
                "{op} {} {} {}",
                Reg(self.dest),
                Reg(self.src1),
                Imm(self.immediate)
            ),
            InstClass::Load => write!(
                f,
                "{op} {} {}({})",
                Reg(self.dest),
                Imm(self.immediate),
                Reg(self.src1)
            ),
            InstClass::Store => write!(
                f,
                "{op} {} {}({})",
                Reg(self.src2),
                Imm(self.immediate),
                Reg(self.src1)
            ),
            InstClass::Branch if op == Opcode::Jump => {
                write!(f, "{op} {:+}", self.immediate.unwrap_or(0) as i32)
            }
            InstClass::Branch => write!(
                f,
                "{op} {} {:+}",
                Reg(self.src1),
                self.immediate.unwrap_or(0) as i32
            ),
        }
    }
}
