//! Configuration Tests.
//!
//! Verifies JSON parsing with defaults, processor-derived pipeline settings,
//! explicit overrides, and validation errors.

use mipsim_core::common::SimError;
use mipsim_core::config::{BranchPredictor, Config, Processor};
use rstest::rstest;

#[test]
fn empty_json_gives_defaults() {
    let c = Config::from_json("{}").unwrap();
    assert_eq!(c.general.processor, Processor::Pipelined);
    assert!(c.general.strict_decode);
    assert!(!c.general.trace_cycles);
    assert_eq!(c.general.max_cycles, None);
    assert_eq!(c.memory.words, 65536);
    assert_eq!(c.pipeline.history_bits, 8);
    assert_eq!(c.width(), 1);
    assert_eq!(c.branch_predictor(), BranchPredictor::Static);
}

#[test]
fn full_json_is_parsed() {
    let json = r#"{
        "general": { "processor": "superscalar", "trace_cycles": true, "max_cycles": 500,
                     "strict_decode": false },
        "memory": { "words": 1024 },
        "pipeline": { "width": 1, "branch_predictor": "Static", "history_bits": 4 }
    }"#;
    let c = Config::from_json(json).unwrap();
    assert_eq!(c.general.processor, Processor::Superscalar);
    assert!(c.general.trace_cycles);
    assert_eq!(c.general.max_cycles, Some(500));
    assert!(!c.general.strict_decode);
    assert_eq!(c.memory.words, 1024);
    assert_eq!(c.width(), 1, "explicit width overrides the processor");
    assert_eq!(c.branch_predictor(), BranchPredictor::Static);
    assert_eq!(c.pipeline.history_bits, 4);
}

#[rstest]
#[case(Processor::SingleCycle, 1, BranchPredictor::Static)]
#[case(Processor::Pipelined, 1, BranchPredictor::Static)]
#[case(Processor::Speculative, 1, BranchPredictor::GShare)]
#[case(Processor::Superscalar, 2, BranchPredictor::GShare)]
fn processor_derives_pipeline(
    #[case] processor: Processor,
    #[case] width: usize,
    #[case] bp: BranchPredictor,
) {
    let c = Config::for_processor(processor);
    assert_eq!(c.width(), width);
    assert_eq!(c.branch_predictor(), bp);
}

#[test]
fn in_order_superscalar_selector_is_accepted() {
    assert_eq!("io-superscalar".parse::<Processor>().unwrap(), Processor::Superscalar);
    let c = Config::from_json(r#"{"general": {"processor": "io-superscalar"}}"#).unwrap();
    assert_eq!(c.general.processor, Processor::Superscalar);
    assert_eq!(c.width(), 2);
}

#[rstest]
#[case(r#"{"pipeline": {"width": 3}}"#)]
#[case(r#"{"pipeline": {"width": 0}}"#)]
#[case(r#"{"pipeline": {"history_bits": 0}}"#)]
#[case(r#"{"pipeline": {"history_bits": 17}}"#)]
#[case(r#"{"memory": {"words": 0}}"#)]
fn out_of_range_values_are_rejected(#[case] json: &str) {
    assert!(matches!(
        Config::from_json(json),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        Config::from_json(r#"{"general": {"processor": "vliw"}}"#),
        Err(SimError::Json(_))
    ));
}
