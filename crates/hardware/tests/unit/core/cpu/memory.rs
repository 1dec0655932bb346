//! Data Memory Tests.

use pipesim_core::SimError;
use pipesim_core::core::cpu::memory::DataMemory;
use proptest::prelude::*;

const SIZE: usize = 256;

#[test]
fn test_reset_state_reads_all_ones() {
    let mem = DataMemory::new(SIZE);
    assert_eq!(mem.size(), SIZE);
    assert_eq!(mem.read_word(0), Ok(0xFFFF_FFFF));
    assert!(mem.range(0, SIZE as u32).unwrap().iter().all(|&b| b == 0xFF));
}

#[test]
fn test_words_are_little_endian() {
    let mut mem = DataMemory::new(SIZE);
    mem.write_word(8, 0x1122_3344).unwrap();
    assert_eq!(mem.range(8, 12).unwrap(), &[0x44, 0x33, 0x22, 0x11]);
    assert_eq!(mem.read_word(8), Ok(0x1122_3344));
}

#[test]
fn test_last_word_is_addressable() {
    let mut mem = DataMemory::new(SIZE);
    mem.write_word(SIZE as u32 - 4, 7).unwrap();
    assert_eq!(mem.read_word(SIZE as u32 - 4), Ok(7));
}

#[test]
fn test_out_of_bounds() {
    let mut mem = DataMemory::new(SIZE);
    let oob = SimError::MemoryOutOfBounds {
        addr: SIZE as u32,
        size: SIZE,
    };
    assert_eq!(mem.read_word(SIZE as u32), Err(oob.clone()));
    assert_eq!(mem.write_word(SIZE as u32, 1), Err(oob));
    assert!(matches!(
        mem.read_word(u32::MAX),
        Err(SimError::MemoryOutOfBounds { .. })
    ));
}

#[test]
fn test_misaligned() {
    let mut mem = DataMemory::new(SIZE);
    assert_eq!(mem.read_word(2), Err(SimError::MisalignedAccess { addr: 2 }));
    assert_eq!(
        mem.write_word(5, 0),
        Err(SimError::MisalignedAccess { addr: 5 })
    );
}

#[test]
fn test_range_bounds() {
    let mem = DataMemory::new(SIZE);
    assert_eq!(mem.range(4, 4).unwrap().len(), 0);
    assert!(mem.range(8, 4).is_err());
    assert!(mem.range(0, SIZE as u32 + 1).is_err());
}

#[test]
fn test_reset_restores_pattern() {
    let mut mem = DataMemory::new(SIZE);
    mem.write_word(0, 0).unwrap();
    mem.reset();
    assert_eq!(mem, DataMemory::new(SIZE));
}

proptest! {
    #[test]
    fn property_write_read_round_trip(slot in 0u32..(SIZE as u32 / 4), value in any::<u32>()) {
        let mut mem = DataMemory::new(SIZE);
        let addr = slot * 4;
        mem.write_word(addr, value).unwrap();
        prop_assert_eq!(mem.read_word(addr), Ok(value));
        // Neighbors keep the reset pattern.
        if addr >= 4 {
            prop_assert_eq!(mem.read_word(addr - 4), Ok(0xFFFF_FFFF));
        }
    }
}
