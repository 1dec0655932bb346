//! General-Purpose Register File.
//!
//! This module implements the 32-entry register file. It performs the following:
//! 1. **Storage:** Maintains 32 word registers, each either defined or undefined.
//! 2. **Index Checking:** Rejects register indices outside `[0, 31]`.
//! 3. **Reset:** Returns every register to the undefined state.
//!
//! `R0` is an ordinary register here; it starts undefined like every other one.

use crate::common::{NUM_GPRS, SimError};

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [Option<u32>; NUM_GPRS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with every register undefined.
    pub const fn new() -> Self {
        Self {
            regs: [None; NUM_GPRS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The register value, or `None` if it has never been written since reset.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidRegister` when `idx` is out of range.
    pub fn read(&self, idx: usize) -> Result<Option<u32>, SimError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(SimError::InvalidRegister(idx))
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidRegister` when `idx` is out of range.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<(), SimError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::InvalidRegister(idx))?;
        *slot = Some(val);
        Ok(())
    }

    /// Returns every register to the undefined state.
    pub fn reset(&mut self) {
        self.regs = [None; NUM_GPRS];
    }

    /// Iterates over `(index, value)` pairs in register order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<u32>)> + '_ {
        self.regs.iter().copied().enumerate()
    }
}
