//! System-wide constants.

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Width of one instruction in bytes; the program counter advances by this amount.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Width of one data memory word in bytes.
pub const WORD_SIZE: usize = 4;

/// Value every data memory byte holds after reset, so an unwritten word
/// reads as `0xFFFF_FFFF`.
pub const MEMORY_RESET_BYTE: u8 = 0xFF;
