//! ALU Operation Tests.
//!
//! Arithmetic wraps at 32 bits; loads and stores compute `A + IMM`; every
//! branch and the jump compute `NPC + IMM`; `NOP` and `EOP` have no ALU
//! operation.

use pipesim_core::SimError;
use pipesim_core::core::units::alu::Alu;
use pipesim_core::isa::Opcode;
use proptest::prelude::*;
use rstest::rstest;

const NEG1: u32 = -1i32 as u32;

/// Execute with all four inputs named. Thin wrapper to keep case lines short.
fn alu(op: Opcode, a: u32, b: u32, imm: u32, npc: u32) -> u32 {
    Alu::execute(op, a, b, imm, npc).unwrap()
}

#[rstest]
#[case(Opcode::Add, 2, 3, 0, 5)]
#[case(Opcode::Add, u32::MAX, 1, 0, 0)]
#[case(Opcode::Sub, 10, 3, 0, 7)]
#[case(Opcode::Sub, 0, 2, 0, 0xFFFF_FFFE)]
#[case(Opcode::Xor, 0xFF00, 0x0FF0, 0, 0xF0F0)]
#[case(Opcode::Addi, 5, 99, 7, 12)]
#[case(Opcode::Addi, 5, 0, NEG1, 4)]
#[case(Opcode::Subi, 0, 99, 2, 0xFFFF_FFFE)]
#[case(Opcode::Lw, 0x100, 0xAA, 8, 0x108)]
#[case(Opcode::Sw, 0x100, 0xAA, NEG1, 0xFF)]
fn test_data_operations(
    #[case] op: Opcode,
    #[case] a: u32,
    #[case] b: u32,
    #[case] imm: u32,
    #[case] expected: u32,
) {
    assert_eq!(alu(op, a, b, imm, 0x4000), expected);
}

#[rstest]
#[case(Opcode::Beqz)]
#[case(Opcode::Bnez)]
#[case(Opcode::Bltz)]
#[case(Opcode::Bgtz)]
#[case(Opcode::Blez)]
#[case(Opcode::Bgez)]
#[case(Opcode::Jump)]
fn test_branch_target_is_npc_plus_imm(#[case] op: Opcode) {
    assert_eq!(alu(op, 77, 88, 8, 0x20), 0x28);
    assert_eq!(alu(op, 77, 88, -12i32 as u32, 0x20), 0x14);
}

#[rstest]
#[case(Opcode::Nop)]
#[case(Opcode::Eop)]
fn test_markers_have_no_alu_operation(#[case] op: Opcode) {
    assert_eq!(
        Alu::execute(op, 1, 2, 3, 4),
        Err(SimError::InvalidInstruction { opcode: op })
    );
}

proptest! {
    #[test]
    fn property_sub_inverts_add(a in any::<u32>(), b in any::<u32>()) {
        let sum = alu(Opcode::Add, a, b, 0, 0);
        prop_assert_eq!(alu(Opcode::Sub, sum, b, 0, 0), a);
    }

    #[test]
    fn property_xor_with_self_is_zero(a in any::<u32>()) {
        prop_assert_eq!(alu(Opcode::Xor, a, a, 0, 0), 0);
    }

    #[test]
    fn property_immediate_forms_match_register_forms(a in any::<u32>(), v in any::<u32>()) {
        prop_assert_eq!(alu(Opcode::Addi, a, 0, v, 0), alu(Opcode::Add, a, v, 0, 0));
        prop_assert_eq!(alu(Opcode::Subi, a, 0, v, 0), alu(Opcode::Sub, a, v, 0, 0));
    }

    #[test]
    fn property_arithmetic_ignores_npc(
        op in prop::sample::select(vec![
            Opcode::Add,
            Opcode::Addi,
            Opcode::Sub,
            Opcode::Subi,
            Opcode::Xor,
        ]),
        a in any::<u32>(),
        b in any::<u32>(),
        imm in any::<u32>(),
        npc in any::<u32>(),
    ) {
        prop_assert_eq!(alu(op, a, b, imm, npc), alu(op, a, b, imm, 0));
    }
}
