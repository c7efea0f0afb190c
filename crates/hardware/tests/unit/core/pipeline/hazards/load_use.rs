//! Load-Use Hazard Tests.
//!
//! A load's value is only available after MEM, so an instruction that
//! consumes it in the very next slot must wait one cycle in Decode and then
//! pick the value up from MEM/WB.

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;
use mipsim_core::config::Processor;
use pretty_assertions::assert_eq;

const DATA: u32 = 0x100;

// ══════════════════════════════════════════════════════════
// 1. Scalar pipeline
// ══════════════════════════════════════════════════════════

#[test]
fn dependent_add_stalls_one_cycle() {
    let program = [asm().lw(1, DATA as i32, 0).build(), asm().add(2, 1, 1).build()];
    let mut tc = TestContext::new(Processor::Pipelined, &program).with_word(DATA, 7);
    let summary = tc.run();

    assert_eq!(tc.get_reg(2), 14, "add must see the loaded value");
    assert_eq!(tc.stats().stalls_data, 1);
    assert_eq!(summary.cycles, 8, "two instructions, four fill cycles, halt, one bubble");
    assert_eq!(summary.instructions, 2);
}

#[test]
fn independent_instruction_hides_the_load_latency() {
    let program = [
        asm().lw(1, DATA as i32, 0).build(),
        asm().addi(3, 0, 1).build(),
        asm().add(2, 1, 1).build(),
    ];
    let mut tc = TestContext::new(Processor::Pipelined, &program).with_word(DATA, 7);
    let _ = tc.run();

    assert_eq!(tc.get_reg(2), 14);
    assert_eq!(tc.get_reg(3), 1);
    assert_eq!(tc.stats().stalls_data, 0, "one instruction of distance needs no stall");
}

#[test]
fn store_of_loaded_value_stalls() {
    let program = [
        asm().lw(1, DATA as i32, 0).build(),
        asm().sw(1, DATA as i32 + 4, 0).build(),
    ];
    let mut tc = TestContext::new(Processor::Pipelined, &program).with_word(DATA, 7);
    let _ = tc.run();

    assert_eq!(tc.word(DATA + 4), 7);
    assert_eq!(tc.stats().stalls_data, 1, "store data is a consumed source");
}

#[test]
fn load_base_register_dependency_stalls() {
    let program = [
        asm().lw(1, DATA as i32, 0).build(),
        asm().lw(2, 0, 1).build(),
    ];
    let mut tc = TestContext::new(Processor::Pipelined, &program)
        .with_word(DATA, 0x200)
        .with_word(0x200, 0x55);
    let _ = tc.run();

    assert_eq!(tc.get_reg(2), 0x55);
    assert_eq!(tc.stats().stalls_data, 1);
}

#[test]
fn load_into_zero_never_stalls() {
    let program = [asm().lw(0, DATA as i32, 0).build(), asm().add(2, 0, 0).build()];
    let mut tc = TestContext::new(Processor::Pipelined, &program).with_word(DATA, 7);
    let _ = tc.run();

    assert_eq!(tc.get_reg(0), 0);
    assert_eq!(tc.get_reg(2), 0);
    assert_eq!(tc.stats().stalls_data, 0);
}

#[test]
fn stalled_cycle_issues_nothing() {
    let program = [asm().lw(1, DATA as i32, 0).build(), asm().add(2, 1, 1).build()];
    let mut tc = TestContext::new(Processor::Pipelined, &program).with_word(DATA, 7);
    let _ = tc.run();

    // Issued: lw, bubble, add, halt marker; the remaining cycles have an empty IF/ID.
    let issued = tc.stats().issued_lanes;
    assert_eq!(issued[1], 3);
    assert_eq!(issued[0] + issued[1] + issued[2], tc.stats().cycles - 1);
}

// ══════════════════════════════════════════════════════════
// 2. Dual-issue pipeline
// ══════════════════════════════════════════════════════════

#[test]
fn superscalar_bundle_waits_on_lane_then_on_load() {
    let program = [asm().lw(1, DATA as i32, 0).build(), asm().add(2, 1, 1).build()];
    let mut tc = TestContext::new(Processor::Superscalar, &program).with_word(DATA, 7);
    let summary = tc.run();

    assert_eq!(tc.get_reg(2), 14);
    assert_eq!(tc.stats().stalls_inter_lane, 1, "add held behind lw in its own bundle");
    assert_eq!(tc.stats().stalls_data, 1, "then held while lw is in EX");
    assert_eq!(summary.cycles, 7);
}
