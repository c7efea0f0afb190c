//! Cross-Engine Scenario Tests.
//!
//! Every engine must reach the same architectural state on the same program;
//! they differ only in cycle counts and statistics. This module checks:
//! 1. **Scenarios:** Small programs run on every implemented processor.
//! 2. **Sub-word memory:** Byte and halfword loads and stores.
//! 3. **Faults:** Illegal instructions, out-of-range fetches and data accesses,
//!    and the cycle limit.
//! 4. **Equivalence:** Random straight-line programs compared against the
//!    single-cycle engine.

use crate::common::builder::instruction::asm;
use crate::common::harness::{TEST_MAX_CYCLES, TEST_MEMORY_WORDS, TestContext, run_program};
use mipsim_core::common::{Fault, SimError};
use mipsim_core::config::{Config, Processor};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

const ILLEGAL: u32 = 0xFC00_0000;

// ══════════════════════════════════════════════════════════
// 1. Scenarios
// ══════════════════════════════════════════════════════════

#[rstest]
fn straight_line_arithmetic(
    #[values(
        Processor::SingleCycle,
        Processor::Pipelined,
        Processor::Speculative,
        Processor::Superscalar
    )]
    processor: Processor,
) {
    let program = [
        asm().addi(1, 0, 5).build(),
        asm().addi(2, 0, 7).build(),
        asm().add(3, 1, 2).build(),
        asm().sub(4, 1, 2).build(),
        asm().slt(5, 4, 0).build(),
        asm().sltu(6, 4, 0).build(),
        asm().nor(7, 0, 0).build(),
        asm().sll(8, 1, 4).build(),
        asm().srl(9, 7, 28).build(),
        asm().andi(10, 7, 0xF0F0).build(),
        asm().ori(11, 0, 0x8000).build(),
        asm().slti(12, 4, -1).build(),
        asm().sltiu(13, 1, -1).build(),
    ];
    let tc = run_program(processor, &program);

    assert_eq!(tc.get_reg(3), 12);
    assert_eq!(tc.get_reg(4), (-2_i32) as u32);
    assert_eq!(tc.get_reg(5), 1, "signed -2 < 0");
    assert_eq!(tc.get_reg(6), 0, "unsigned 0xFFFFFFFE > 0");
    assert_eq!(tc.get_reg(7), u32::MAX);
    assert_eq!(tc.get_reg(8), 80);
    assert_eq!(tc.get_reg(9), 0xF);
    assert_eq!(tc.get_reg(10), 0xF0F0, "andi zero-extends");
    assert_eq!(tc.get_reg(11), 0x8000, "ori zero-extends");
    assert_eq!(tc.get_reg(12), 1);
    assert_eq!(tc.get_reg(13), 1, "sltiu compares against 0xFFFFFFFF");
    assert_eq!(tc.stats().instructions_retired, 13);
}

#[rstest]
fn call_and_return(
    #[values(
        Processor::SingleCycle,
        Processor::Pipelined,
        Processor::Speculative,
        Processor::Superscalar
    )]
    processor: Processor,
) {
    let program = [
        asm().jal(16).build(),
        asm().addi(5, 0, 1).build(),
        asm().addi(2, 0, 5).build(),
        asm().j(24).build(),
        asm().addi(1, 0, 7).build(),
        asm().jr(31).build(),
    ];
    let tc = run_program(processor, &program);

    assert_eq!(tc.get_reg(1), 7);
    assert_eq!(tc.get_reg(2), 5);
    assert_eq!(tc.get_reg(5), 0);
    assert_eq!(tc.get_reg(31), 8);
    assert_eq!(tc.stats().instructions_retired, 5);
}

#[rstest]
fn summation_loop(
    #[values(
        Processor::SingleCycle,
        Processor::Pipelined,
        Processor::Speculative,
        Processor::Superscalar
    )]
    processor: Processor,
) {
    // $2 = 10 + 9 + ... + 1, stored to 0x300 and reloaded into $3.
    let program = [
        asm().addi(1, 0, 10).build(),
        asm().add(2, 2, 1).build(),
        asm().addi(1, 1, -1).build(),
        asm().bne(1, 0, -3).build(),
        asm().sw(2, 0x300, 0).build(),
        asm().lw(3, 0x300, 0).build(),
    ];
    let tc = run_program(processor, &program);

    assert_eq!(tc.get_reg(2), 55);
    assert_eq!(tc.get_reg(3), 55);
    assert_eq!(tc.word(0x300), 55);
    assert_eq!(tc.stats().inst_branch, 10);
}

#[test]
fn single_cycle_cpi_is_one() {
    let program = [
        asm().addi(1, 0, 5).build(),
        asm().addi(2, 0, 7).build(),
        asm().add(3, 1, 2).build(),
    ];
    let mut tc = TestContext::new(Processor::SingleCycle, &program);
    let summary = tc.run();

    assert_eq!(tc.get_reg(3), 12);
    assert_eq!(summary.cycles, 3);
    assert!((summary.cpi - 1.0).abs() < f64::EPSILON);

    let mut tc = TestContext::new(Processor::Pipelined, &program);
    assert_eq!(tc.run().cycles, 8);
}

#[test]
fn single_cycle_collects_no_pipeline_stats() {
    let program = [
        asm().lw(1, 0x100, 0).build(),
        asm().add(2, 1, 1).build(),
        asm().beq(0, 0, 0).build(),
    ];
    let mut tc = TestContext::new(Processor::SingleCycle, &program).with_word(0x100, 4);
    let _ = tc.run();

    let stats = tc.stats();
    assert_eq!(tc.get_reg(2), 8);
    assert_eq!(stats.stalls_data, 0);
    assert_eq!(stats.flushes, 0);
    assert_eq!(stats.branch_predictions + stats.branch_mispredictions, 0);
}

#[test]
fn single_cycle_empty_program_runs_no_cycles() {
    let mut tc = TestContext::new(Processor::SingleCycle, &[]);
    let summary = tc.run();
    assert_eq!(summary.cycles, 0);
    assert_eq!(summary.instructions, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Sub-word memory
// ══════════════════════════════════════════════════════════

#[rstest]
fn byte_and_halfword_access(
    #[values(
        Processor::SingleCycle,
        Processor::Pipelined,
        Processor::Speculative,
        Processor::Superscalar
    )]
    processor: Processor,
) {
    let program = [
        asm().lui(1, 0x1122).build(),
        asm().ori(1, 1, 0x3344).build(),
        asm().sw(1, 0x100, 0).build(),
        asm().addi(2, 0, 0xAB).build(),
        asm().sb(2, 0x101, 0).build(),
        asm().lw(3, 0x100, 0).build(),
        asm().lb(4, 0x101, 0).build(),
        asm().lbu(5, 0x101, 0).build(),
        asm().addi(6, 0, -2).build(),
        asm().sh(6, 0x102, 0).build(),
        asm().lw(7, 0x100, 0).build(),
        asm().lh(8, 0x102, 0).build(),
        asm().lhu(9, 0x102, 0).build(),
    ];
    let tc = run_program(processor, &program);

    assert_eq!(tc.get_reg(3), 0x11AB_3344, "sb replaces one byte lane");
    assert_eq!(tc.get_reg(4), 0xFFFF_FFAB, "lb sign-extends");
    assert_eq!(tc.get_reg(5), 0xAB, "lbu zero-extends");
    assert_eq!(tc.get_reg(7), 0x11AB_FFFE, "sh replaces the low halfword");
    assert_eq!(tc.get_reg(8), 0xFFFF_FFFE);
    assert_eq!(tc.get_reg(9), 0xFFFE);
    assert_eq!(tc.word(0x100), 0x11AB_FFFE);
}

// ══════════════════════════════════════════════════════════
// 3. Faults
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(Processor::SingleCycle)]
#[case(Processor::Pipelined)]
#[case(Processor::Superscalar)]
fn committed_illegal_instruction_stops_the_run(#[case] processor: Processor) {
    let program = [asm().addi(1, 0, 1).build(), ILLEGAL, asm().addi(2, 0, 1).build()];
    let mut tc = TestContext::new(processor, &program);

    let err = tc.try_run().unwrap_err();
    assert!(
        matches!(
            err,
            SimError::Fault(Fault::IllegalInstruction { pc: 4, inst: ILLEGAL })
        ),
        "got {err:?}"
    );
    assert_eq!(tc.get_reg(1), 1, "older instruction committed");
    assert_eq!(tc.get_reg(2), 0, "younger instruction did not");
}

#[test]
fn unsupported_funct_is_illegal() {
    let program = [asm().funct(0x3F).build()];
    let mut tc = TestContext::new(Processor::Pipelined, &program);
    assert!(matches!(
        tc.try_run(),
        Err(SimError::Fault(Fault::IllegalInstruction { pc: 0, .. }))
    ));
}

#[rstest]
#[case(Processor::SingleCycle)]
#[case(Processor::Pipelined)]
#[case(Processor::Superscalar)]
fn squashed_illegal_instruction_is_harmless(#[case] processor: Processor) {
    let program = [asm().j(8).build(), ILLEGAL, asm().addi(1, 0, 3).build()];
    let tc = run_program(processor, &program);
    assert_eq!(tc.get_reg(1), 3);
}

#[rstest]
#[case(Processor::SingleCycle)]
#[case(Processor::Pipelined)]
#[case(Processor::Superscalar)]
fn permissive_decode_runs_unknown_encodings_as_nops(#[case] processor: Processor) {
    let mut config = Config::for_processor(processor);
    config.memory.words = TEST_MEMORY_WORDS;
    config.general.max_cycles = Some(TEST_MAX_CYCLES);
    config.general.strict_decode = false;

    let program = [asm().addi(1, 0, 1).build(), ILLEGAL, asm().add(2, 1, 1).build()];
    let mut tc = TestContext::with_config(&config, &program);
    let summary = tc.run();

    assert_eq!(tc.get_reg(2), 2);
    assert_eq!(summary.instructions, 3, "the no-op still retires");
}

#[rstest]
#[case(Processor::SingleCycle)]
#[case(Processor::Pipelined)]
#[case(Processor::Superscalar)]
fn jump_outside_memory_faults_on_fetch(#[case] processor: Processor) {
    let program = [asm().j(0x8000).build()];
    let mut tc = TestContext::new(processor, &program);
    assert!(matches!(
        tc.try_run(),
        Err(SimError::Fault(Fault::FetchOutOfBounds { pc: 0x8000 }))
    ));
}

#[rstest]
#[case(Processor::SingleCycle)]
#[case(Processor::Pipelined)]
#[case(Processor::Superscalar)]
fn load_outside_memory_is_an_error(#[case] processor: Processor) {
    let program = [asm().lw(1, 0x7FF0, 0).build()];
    let mut tc = TestContext::new(processor, &program);
    assert!(matches!(
        tc.try_run(),
        Err(SimError::MemoryOutOfBounds { addr: 0x7FF0 })
    ));
}

#[rstest]
#[case(Processor::SingleCycle)]
#[case(Processor::Pipelined)]
#[case(Processor::Superscalar)]
fn infinite_loop_hits_the_cycle_limit(#[case] processor: Processor) {
    let program = [asm().beq(0, 0, -1).build()];
    let mut tc = TestContext::new(processor, &program);
    assert!(matches!(
        tc.try_run(),
        Err(SimError::CycleLimit { cycles: TEST_MAX_CYCLES })
    ));
    assert_eq!(tc.stats().cycles, TEST_MAX_CYCLES);
}

// ══════════════════════════════════════════════════════════
// 4. Equivalence with the single-cycle engine
// ══════════════════════════════════════════════════════════

const DATA_BASE: u32 = 0x400;
const DATA_WORDS: u32 = 16;

/// Straight-line instruction over `$0`-`$7` and a small data window.
fn arb_instruction() -> impl Strategy<Value = u32> {
    let reg = 0u32..8;
    let offset = (0..DATA_WORDS).prop_map(|w| (DATA_BASE + w * 4) as i32);
    prop_oneof![
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| asm().add(d, s, t).build()),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| asm().sub(d, s, t).build()),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| asm().and(d, s, t).build()),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| asm().or(d, s, t).build()),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| asm().slt(d, s, t).build()),
        (reg.clone(), reg.clone(), 0u32..32).prop_map(|(d, t, sh)| asm().sll(d, t, sh).build()),
        (reg.clone(), reg.clone(), any::<i16>())
            .prop_map(|(t, s, imm)| asm().addi(t, s, i32::from(imm)).build()),
        (reg.clone(), any::<u16>()).prop_map(|(t, imm)| asm().lui(t, i32::from(imm)).build()),
        (reg.clone(), offset.clone()).prop_map(|(t, off)| asm().lw(t, off, 0).build()),
        (reg, offset).prop_map(|(t, off)| asm().sw(t, off, 0).build()),
    ]
}

fn final_state(processor: Processor, program: &[u32]) -> (Vec<u32>, Vec<u32>, u64) {
    let tc = run_program(processor, program);
    let regs = tc.cpu().regs.snapshot().to_vec();
    let data = (0..DATA_WORDS).map(|w| tc.word(DATA_BASE + w * 4)).collect();
    (regs, data, tc.stats().instructions_retired)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pipelines_match_single_cycle(program in prop::collection::vec(arb_instruction(), 1..40)) {
        let reference = final_state(Processor::SingleCycle, &program);
        for processor in [Processor::Pipelined, Processor::Speculative, Processor::Superscalar] {
            let state = final_state(processor, &program);
            prop_assert_eq!(&state, &reference, "{} diverged", processor);
        }
    }
}
