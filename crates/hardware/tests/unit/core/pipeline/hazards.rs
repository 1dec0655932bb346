//! Data Hazard Detection Tests.
//!
//! Exercises `need_stall_raw` directly on hand-built latches, then checks the
//! end-to-end effect of a read-after-write dependency on a running program.

use pipesim_core::config::{Config, HazardScope};
use pipesim_core::core::pipeline::hazards::need_stall_raw;
use pipesim_core::core::pipeline::latches::{ExMem, IdEx, MemWb};
use pipesim_core::isa::{Instruction, Opcode};
use rstest::rstest;

use crate::common::harness::TestContext;
use crate::common::programs;

fn id_ex(inst: Instruction) -> IdEx {
    IdEx {
        inst,
        ..IdEx::default()
    }
}

fn ex_mem(inst: Instruction) -> ExMem {
    ExMem {
        inst,
        ..ExMem::default()
    }
}

fn mem_wb(inst: Instruction) -> MemWb {
    MemWb {
        inst,
        ..MemWb::default()
    }
}

const PRODUCE_R1: Instruction = Instruction::reg_imm(Opcode::Addi, 1, 0, 5);

// ══════════════════════════════════════════════════════════
// 1. Detection scope
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::addi_src1(Instruction::reg_imm(Opcode::Addi, 2, 1, 0), true)]
#[case::subi_src1(Instruction::reg_imm(Opcode::Subi, 2, 1, 0), true)]
#[case::add_src1(Instruction::reg_reg(Opcode::Add, 2, 1, 3), true)]
#[case::sub_src2(Instruction::reg_reg(Opcode::Sub, 2, 3, 1), true)]
#[case::xor_unrelated(Instruction::reg_reg(Opcode::Xor, 2, 3, 4), false)]
#[case::dest_only(Instruction::reg_imm(Opcode::Addi, 1, 3, 0), false)]
#[case::load_base(Instruction::load(2, 1, 0), false)]
#[case::store_data(Instruction::store(1, 3, 0), false)]
#[case::branch_src(Instruction::branch(Opcode::Bnez, 1, 0), false)]
#[case::nop(Instruction::NOP, false)]
fn test_arithmetic_scope(#[case] consumer: Instruction, #[case] stalls: bool) {
    let scope = HazardScope::Arithmetic;
    assert_eq!(
        need_stall_raw(&id_ex(consumer), &ex_mem(PRODUCE_R1), &MemWb::default(), scope),
        stalls,
        "producer in EX/MEM"
    );
    assert_eq!(
        need_stall_raw(&id_ex(consumer), &ExMem::default(), &mem_wb(PRODUCE_R1), scope),
        stalls,
        "producer in MEM/WB"
    );
}

#[rstest]
#[case::load_base(Instruction::load(2, 1, 0), true)]
#[case::store_base(Instruction::store(3, 1, 0), true)]
#[case::store_data(Instruction::store(1, 3, 0), true)]
#[case::branch_src(Instruction::branch(Opcode::Bnez, 1, 0), true)]
#[case::jump(Instruction::jump(0), false)]
#[case::add_src2(Instruction::reg_reg(Opcode::Add, 2, 3, 1), true)]
fn test_all_sources_scope(#[case] consumer: Instruction, #[case] stalls: bool) {
    assert_eq!(
        need_stall_raw(
            &id_ex(consumer),
            &ex_mem(PRODUCE_R1),
            &MemWb::default(),
            HazardScope::AllSources
        ),
        stalls
    );
}

#[test]
fn test_store_and_branch_producers_write_nothing() {
    let consumer = id_ex(Instruction::reg_reg(Opcode::Add, 2, 1, 1));
    let store = ex_mem(Instruction::store(1, 1, 0));
    let branch = mem_wb(Instruction::branch(Opcode::Beqz, 1, 0));
    assert!(!need_stall_raw(
        &consumer,
        &store,
        &branch,
        HazardScope::AllSources
    ));
}

// ══════════════════════════════════════════════════════════
// 2. Stall accounting on a running program
// ══════════════════════════════════════════════════════════

#[test]
fn test_raw_hazard_stalls_once_and_reads_produced_value() {
    let mut tc = TestContext::new()
        .load_asm(programs::RAW_HAZARD)
        .with_reg(0, 0);

    tc.run_to_end();

    assert_eq!(tc.get_reg(1), Some(5));
    assert_eq!(tc.get_reg(2), Some(10), "ADD must see the written-back R1");
    assert_eq!(tc.stalls(), 1);
    assert_eq!(tc.executed(), 2);
    assert_eq!(tc.cycles(), 8);
}

#[test]
fn test_held_instruction_has_no_operands_while_stalled() {
    let mut tc = TestContext::new()
        .load_asm(programs::RAW_HAZARD)
        .with_reg(0, 0);

    // Cycle 3 decodes ADD while ADDI is in EX/MEM.
    tc.run(3);
    assert!(tc.cpu().stall);
    assert_eq!(tc.cpu().id_ex.inst, Instruction::reg_reg(Opcode::Add, 2, 1, 1));
    assert_eq!(tc.cpu().id_ex.a, None);
    assert_eq!(tc.cpu().id_ex.npc, None);
    assert_eq!(tc.stalls(), 0, "detection cycle is not a stall cycle");

    // Cycle 4: ADDI in MEM/WB, a bubble behind it.
    tc.run(1);
    assert!(tc.cpu().stall);
    assert_eq!(tc.cpu().ex_mem.inst.opcode, Opcode::Nop);
    assert_eq!(tc.stalls(), 1);

    // Cycle 5: ADDI wrote back, ADD is released with fresh operands.
    tc.run(1);
    assert!(!tc.cpu().stall);
    assert_eq!(tc.cpu().id_ex.a, Some(5));
    assert_eq!(tc.cpu().id_ex.b, Some(5));
    assert_eq!(tc.cpu().id_ex.npc, Some(8));
    assert_eq!(tc.stalls(), 1);
}

#[test]
fn test_pc_holds_during_stall() {
    let mut tc = TestContext::new()
        .load_asm(
            "
            ADDI R1 R0 5
            ADD  R2 R1 R1
            ADDI R3 R0 1
            EOP
            ",
        )
        .with_reg(0, 0);

    tc.run(3);
    let held_pc = tc.cpu().pc;
    assert_eq!(held_pc, Some(8));
    tc.run(1);
    assert_eq!(tc.cpu().pc, held_pc, "fetch must not advance while stalled");

    tc.run_to_end();
    assert_eq!(tc.get_reg(3), Some(1));
    assert_eq!(tc.executed(), 3);
}

#[test]
fn test_all_sources_scope_stalls_store_on_fresh_base() {
    let mut config = Config::default();
    config.pipeline.hazard_scope = HazardScope::AllSources;
    let mut tc = TestContext::with_config(&config)
        .load_asm(programs::STORE_LOAD)
        .with_reg(0, 0)
        .with_reg(2, 0x1122_3344);

    tc.run_to_end();

    assert_eq!(tc.stalls(), 1);
    assert_eq!(tc.get_reg(3), Some(0x1122_3344));
    assert_eq!(tc.cycles(), 9);
}
