//! Register and memory dumps.
//!
//! Both dumps are `Display` adaptors so they can be printed, logged or written
//! into any buffer.

use std::fmt;

use super::Cpu;
use crate::common::SimError;
use crate::core::arch::{SpRegister, Stage};

/// Special-purpose registers per stage followed by the general-purpose
/// registers. Undefined values are omitted, and so is `COND`.
///
/// ```text
/// Special purpose registers:
/// Stage: IF
/// PC = 8 / 0x8
/// ...
/// General purpose registers:
/// R1 = 5 / 0x5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RegisterDump<'a> {
    cpu: &'a Cpu,
}

impl fmt::Display for RegisterDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Special purpose registers:")?;
        for stage in Stage::ALL {
            writeln!(f, "Stage: {stage}")?;
            for reg in SpRegister::ALL.into_iter().filter(|&reg| reg != SpRegister::Cond) {
                if let Some(value) = self.cpu.get_sp_register(reg, stage) {
                    writeln!(f, "{reg} = {value} / {value:#x}")?;
                }
            }
        }

        writeln!(f, "General purpose registers:")?;
        for (idx, value) in self.cpu.regs.iter() {
            if let Some(value) = value {
                writeln!(f, "R{idx} = {} / {value:#x}", value as i32)?;
            }
        }
        Ok(())
    }
}

/// A hex dump of data memory, four bytes per row.
///
/// ```text
/// data_memory[0x00000000:0x00000008]
/// 0x00000000: 44 33 22 11
/// 0x00000004: ff ff ff ff
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MemoryDump<'a> {
    start: u32,
    end: u32,
    bytes: &'a [u8],
}

impl fmt::Display for MemoryDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "data_memory[0x{:08x}:0x{:08x}]", self.start, self.end)?;
        for (addr, byte) in (self.start..).zip(self.bytes) {
            if addr % 4 == 0 {
                write!(f, "0x{addr:08x}:")?;
            }
            write!(f, " {byte:02x}")?;
            if addr % 4 == 3 {
                writeln!(f)?;
            }
        }
        if self.end % 4 != 0 && !self.bytes.is_empty() {
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Cpu {
    /// Returns a printable dump of every defined register.
    pub const fn register_dump(&self) -> RegisterDump<'_> {
        RegisterDump { cpu: self }
    }

    /// Returns a printable dump of data memory in `start..end`.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` if the range does not lie within data memory.
    pub fn memory_dump(&self, start: u32, end: u32) -> Result<MemoryDump<'_>, SimError> {
        let bytes = self.data_memory.range(start, end)?;
        Ok(MemoryDump { start, end, bytes })
    }
}
