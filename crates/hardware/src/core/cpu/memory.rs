//! Data Memory.
//!
//! A flat, byte-addressed array. Words are 32-bit little-endian and must be
//! 4-byte aligned. A reset fills every byte with `0xFF`, so a word never
//! written reads back as `0xFFFFFFFF`.

use crate::common::SimError;
use crate::common::constants::{MEMORY_RESET_BYTE, WORD_SIZE};

/// Byte-addressed data memory.
#[derive(Clone, PartialEq, Eq)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for DataMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataMemory")
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl DataMemory {
    /// Creates `size` bytes of memory in the reset state.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![MEMORY_RESET_BYTE; size],
        }
    }

    /// Capacity in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Refills every byte with `0xFF`.
    pub fn reset(&mut self) {
        self.bytes.fill(MEMORY_RESET_BYTE);
    }

    /// Validates a word access at `addr` and returns its byte offset.
    fn word_offset(&self, addr: u32) -> Result<usize, SimError> {
        let start = addr as usize;
        match start.checked_add(WORD_SIZE) {
            Some(end) if end <= self.bytes.len() => {}
            _ => {
                return Err(SimError::MemoryOutOfBounds {
                    addr,
                    size: self.bytes.len(),
                });
            }
        }
        if start % WORD_SIZE != 0 {
            return Err(SimError::MisalignedAccess { addr });
        }
        Ok(start)
    }

    /// Reads the little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` or `SimError::MisalignedAccess`.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        let start = self.word_offset(addr)?;
        let mut word = [0; WORD_SIZE];
        word.copy_from_slice(&self.bytes[start..start + WORD_SIZE]);
        Ok(u32::from_le_bytes(word))
    }

    /// Writes `value` as a little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` or `SimError::MisalignedAccess`.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        let start = self.word_offset(addr)?;
        self.bytes[start..start + WORD_SIZE].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Returns the bytes in the half-open range `start..end`.
    ///
    /// # Errors
    ///
    /// `SimError::MemoryOutOfBounds` if `end` is past the end of memory or
    /// precedes `start`.
    pub fn range(&self, start: u32, end: u32) -> Result<&[u8], SimError> {
        let size = self.bytes.len();
        if start > end || end as usize > size {
            return Err(SimError::MemoryOutOfBounds { addr: end, size });
        }
        Ok(&self.bytes[start as usize..end as usize])
    }
}
