//! Instruction Decoder.
//!
//! Maps the primary opcode to a control-signal vector, then combines it with
//! the ALU control to produce everything downstream stages need. It provides:
//! 1. **Main control:** `decode`, a pure opcode → [`ControlSignals`] table.
//! 2. **Full decode:** `decode_instruction`, which also resolves the ALU
//!    operation from `funct` and reports unsupported encodings.

use crate::common::error::Fault;
use crate::core::pipeline::signals::{AluOpClass, ControlSignals, MemWidth, OpBSrc, RegDest};
use crate::core::units::alu::{AluControl, compute_control};
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::opcodes as op;

/// An instruction after decode: main control plus ALU control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Main control vector.
    pub ctrl: ControlSignals,
    /// ALU operation and modifier flags.
    pub alu: AluControl,
}

/// Generates the main control vector for an opcode.
///
/// Every implemented I-type or J-type opcode starts from "immediate operand,
/// write `rt`" and then overrides what differs. R-type selects `rd` and
/// defers the operation to `funct`.
///
/// # Arguments
///
/// * `opcode` - The 6-bit primary opcode.
///
/// # Returns
///
/// The control vector, or `None` if the opcode is not implemented.
pub fn decode(opcode: u32) -> Option<ControlSignals> {
    let mut c = ControlSignals::default();

    if opcode == op::OP_RTYPE {
        c.reg_dest = RegDest::Rd;
        c.alu_op = AluOpClass::RType;
        c.alu_src = OpBSrc::Reg;
        c.reg_write = true;
        return Some(c);
    }

    c.alu_src = OpBSrc::Imm;
    c.reg_write = true;

    match opcode {
        op::OP_J => {
            c.jump = true;
            c.reg_write = false;
        }
        op::OP_JAL => {
            c.jump = true;
            c.jump_link = true;
        }
        op::OP_BEQ | op::OP_BNE => {
            c.branch = true;
            c.branch_not_equal = opcode == op::OP_BNE;
            c.alu_op = AluOpClass::Branch;
            c.alu_src = OpBSrc::Reg;
            c.reg_write = false;
        }
        op::OP_ADDI | op::OP_ADDIU | op::OP_SLTI | op::OP_SLTIU | op::OP_ANDI | op::OP_ORI => {}
        op::OP_LUI => c.load_upper_imm = true,
        op::OP_LB | op::OP_LH | op::OP_LW | op::OP_LBU | op::OP_LHU => {
            c.mem_read = true;
            c.mem_to_reg = true;
            c.alu_op = AluOpClass::MemAddr;
            (c.width, c.signed_load) = match opcode {
                op::OP_LB => (MemWidth::Byte, true),
                op::OP_LBU => (MemWidth::Byte, false),
                op::OP_LH => (MemWidth::Half, true),
                op::OP_LHU => (MemWidth::Half, false),
                _ => (MemWidth::Word, false),
            };
        }
        op::OP_SB | op::OP_SH | op::OP_SW => {
            c.mem_write = true;
            c.alu_op = AluOpClass::MemAddr;
            c.reg_write = false;
            c.width = match opcode {
                op::OP_SB => MemWidth::Byte,
                op::OP_SH => MemWidth::Half,
                _ => MemWidth::Word,
            };
        }
        _ => return None,
    }

    Some(c)
}

/// Fully decodes an instruction word.
///
/// `jr` is an R-type encoding but writes nothing, so its `reg_write` is
/// cleared here rather than in the opcode table.
///
/// # Arguments
///
/// * `pc` - Address of the instruction, used for the fault report.
/// * `inst` - Raw 32-bit encoding.
///
/// # Returns
///
/// The decoded instruction, or `Fault::IllegalInstruction` if either the
/// opcode or the R-type `funct` is unsupported.
pub fn decode_instruction(pc: u32, inst: u32) -> Result<Decoded, Fault> {
    let illegal = || Fault::IllegalInstruction { pc, inst };
    let mut ctrl = decode(inst.opcode()).ok_or_else(illegal)?;
    let alu = compute_control(ctrl.alu_op, inst.funct(), inst.opcode()).ok_or_else(illegal)?;
    if alu.jump_reg {
        ctrl.reg_write = false;
    }
    Ok(Decoded { ctrl, alu })
}

/// Decodes permissively: unsupported encodings become a no-op.
///
/// The no-op writes nothing and its ALU result is zero.
pub fn decode_or_nop(pc: u32, inst: u32) -> Decoded {
    decode_instruction(pc, inst).unwrap_or_default()
}
