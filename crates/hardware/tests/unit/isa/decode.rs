//! Instruction Decoder Tests.
//!
//! Verifies the main control table for every implemented instruction class
//! and the handling of unsupported encodings in strict and permissive mode.

use mipsim_core::common::Fault;
use mipsim_core::core::pipeline::signals::{AluOpClass, MemWidth, OpBSrc, RegDest};
use mipsim_core::core::pipeline::latches::dest_reg;
use mipsim_core::isa::decode::{Decoded, decode, decode_instruction, decode_or_nop};
use mipsim_core::isa::instruction::{InstructionBits, branch_target, jump_target};
use mipsim_core::isa::mips32::opcodes as op;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::asm;

fn decoded(inst: u32) -> Decoded {
    decode_instruction(0, inst).expect("implemented instruction")
}

// ══════════════════════════════════════════════════════════
// 1. Main control
// ══════════════════════════════════════════════════════════

#[test]
fn rtype_writes_rd_from_registers() {
    let c = decode(op::OP_RTYPE).unwrap();
    assert_eq!(c.reg_dest, RegDest::Rd);
    assert_eq!(c.alu_src, OpBSrc::Reg);
    assert_eq!(c.alu_op, AluOpClass::RType);
    assert!(c.reg_write);
    assert!(!c.mem_read && !c.mem_write && !c.branch && !c.jump);
}

#[rstest]
#[case(op::OP_LB, MemWidth::Byte, true)]
#[case(op::OP_LBU, MemWidth::Byte, false)]
#[case(op::OP_LH, MemWidth::Half, true)]
#[case(op::OP_LHU, MemWidth::Half, false)]
#[case(op::OP_LW, MemWidth::Word, false)]
fn loads(#[case] opcode: u32, #[case] width: MemWidth, #[case] signed: bool) {
    let c = decode(opcode).unwrap();
    assert!(c.mem_read && c.mem_to_reg && c.reg_write);
    assert_eq!(c.reg_dest, RegDest::Rt);
    assert_eq!(c.alu_op, AluOpClass::MemAddr);
    assert_eq!((c.width, c.signed_load), (width, signed));
}

#[rstest]
#[case(op::OP_SB, MemWidth::Byte)]
#[case(op::OP_SH, MemWidth::Half)]
#[case(op::OP_SW, MemWidth::Word)]
fn stores(#[case] opcode: u32, #[case] width: MemWidth) {
    let c = decode(opcode).unwrap();
    assert!(c.mem_write);
    assert!(!c.reg_write);
    assert_eq!(c.alu_src, OpBSrc::Imm);
    assert_eq!(c.width, width);
}

#[test]
fn branches_compare_registers() {
    let beq = decode(op::OP_BEQ).unwrap();
    let bne = decode(op::OP_BNE).unwrap();
    for c in [beq, bne] {
        assert!(c.branch && !c.reg_write);
        assert_eq!(c.alu_src, OpBSrc::Reg);
        assert_eq!(c.alu_op, AluOpClass::Branch);
    }
    assert!(!beq.branch_not_equal);
    assert!(bne.branch_not_equal);
}

#[test]
fn jumps() {
    let j = decode(op::OP_J).unwrap();
    assert!(j.jump && !j.reg_write && !j.jump_link);
    let jal = decode(op::OP_JAL).unwrap();
    assert!(jal.jump && jal.reg_write && jal.jump_link);
    assert_eq!(dest_reg(&jal, asm().jal(0x40).build()), 31);
}

#[test]
fn jr_writes_nothing() {
    let d = decoded(asm().jr(31).build());
    assert!(d.alu.jump_reg);
    assert!(!d.ctrl.reg_write);
}

#[test]
fn lui_takes_the_upper_immediate_path() {
    let d = decoded(asm().lui(4, 0x1234).build());
    assert!(d.ctrl.load_upper_imm && d.ctrl.reg_write);
}

#[test]
fn alu_op_class_encoding() {
    assert_eq!(AluOpClass::MemAddr.bits(), 0b00);
    assert_eq!(AluOpClass::Branch.bits(), 0b01);
    assert_eq!(AluOpClass::RType.bits(), 0b10);
    assert_eq!(AluOpClass::Immediate.bits(), 0b11);
}

// ══════════════════════════════════════════════════════════
// 2. Unsupported encodings
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::bad_opcode(0xFC00_0000)]
#[case::bad_funct(0x0000_003F)]
#[case::coprocessor(0x4400_0000)]
fn strict_decode_reports_the_fault(#[case] inst: u32) {
    assert_eq!(
        decode_instruction(0x40, inst),
        Err(Fault::IllegalInstruction { pc: 0x40, inst })
    );
}

#[test]
fn permissive_decode_yields_a_nop() {
    let d = decode_or_nop(0, 0xFC00_0000);
    assert_eq!(d, Decoded::default());
    assert!(!d.ctrl.reg_write && !d.ctrl.mem_write);
    assert!(!d.ctrl.jump && !d.ctrl.branch);
}

// ══════════════════════════════════════════════════════════
// 3. Fields and targets
// ══════════════════════════════════════════════════════════

#[test]
fn field_extraction() {
    let inst = asm().addi(9, 17, -3).build();
    assert_eq!(inst.opcode(), op::OP_ADDI);
    assert_eq!(inst.rs(), 17);
    assert_eq!(inst.rt(), 9);
    assert_eq!(inst.imm16(), 0xFFFD);
    assert_eq!(inst.imm_sext(), (-3_i32) as u32);
    assert_eq!(inst.imm_zext(), 0xFFFD);
}

#[test]
fn branch_and_jump_targets() {
    assert_eq!(branch_target(0x10, asm().beq(0, 0, -2).build()), 0x0C);
    assert_eq!(branch_target(0x10, asm().beq(0, 0, 3).build()), 0x20);
    assert_eq!(jump_target(0x1000_0000, asm().j(0x40).build()), 0x1000_0040);
}
