//! Branch condition truth table. Conditions compare the operand as a signed
//! 32-bit value.

use pipesim_core::core::units::bru::Bru;
use pipesim_core::isa::Opcode;
use rstest::rstest;

const NEG: u32 = -5i32 as u32;
const INT_MIN: u32 = 0x8000_0000;

#[rstest]
//                        zero   positive  negative
#[case(Opcode::Beqz,     true,  false,    false)]
#[case(Opcode::Bnez,     false, true,     true)]
#[case(Opcode::Bltz,     false, false,    true)]
#[case(Opcode::Bgtz,     false, true,     false)]
#[case(Opcode::Blez,     true,  false,    true)]
#[case(Opcode::Bgez,     true,  true,     false)]
#[case(Opcode::Jump,     true,  true,     true)]
fn test_truth_table(
    #[case] op: Opcode,
    #[case] zero: bool,
    #[case] positive: bool,
    #[case] negative: bool,
) {
    assert_eq!(Bru::is_taken(op, 0), zero, "{op} on 0");
    assert_eq!(Bru::is_taken(op, 5), positive, "{op} on 5");
    assert_eq!(Bru::is_taken(op, NEG), negative, "{op} on -5");
}

#[test]
fn test_high_bit_is_negative() {
    assert!(Bru::is_taken(Opcode::Bltz, INT_MIN));
    assert!(!Bru::is_taken(Opcode::Bgtz, INT_MIN));
    assert!(Bru::is_taken(Opcode::Bgtz, 0x7FFF_FFFF));
}

#[test]
fn test_non_branches_are_never_taken() {
    for op in Opcode::ALL.into_iter().filter(|op| !op.is_branch()) {
        assert!(!Bru::is_taken(op, 0), "{op}");
    }
}
