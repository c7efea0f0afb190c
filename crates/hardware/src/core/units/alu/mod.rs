//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage and by
//! the single-cycle core. It provides:
//! 1. **ALU control:** `compute_control` turns the decoder's ALU-op class,
//!    `funct` and opcode into a concrete [`AluOp`] plus modifier flags.
//! 2. **Operand selection:** `select_operands` applies the shift-amount and
//!    immediate-extension rules.
//! 3. **Execution:** `Alu::execute` returns the result and the zero flag.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Nor, Slt
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, nor, slt).
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::core::pipeline::signals::{AluOp, AluOpClass, ControlSignals, OpBSrc};
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{funct as f, opcodes as op};

/// Output of the ALU control: the operation and its modifier flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluControl {
    /// Operation to perform.
    pub op: AluOp,
    /// Comparison is unsigned (`sltu`, `sltiu`, and the `u` arithmetic forms).
    pub unsigned: bool,
    /// Instruction is `jr`.
    pub jump_reg: bool,
    /// Operand A is `shamt` instead of `rs`.
    pub shift: bool,
    /// Immediate is zero-extended (`andi`, `ori`).
    pub zero_extend: bool,
}

/// ALU result plus the zero flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// 32-bit result.
    pub result: u32,
    /// Set when `result` is zero; branches compare with a subtraction.
    pub zero: bool,
}

/// Computes the ALU control for an instruction.
///
/// # Arguments
///
/// * `class` - ALU-op class from the main decoder.
/// * `funct` - The R-type function field.
/// * `opcode` - The primary opcode.
///
/// # Returns
///
/// The ALU control, or `None` if an R-type `funct` is unsupported.
pub fn compute_control(class: AluOpClass, funct: u32, opcode: u32) -> Option<AluControl> {
    let mut c = AluControl::default();
    match class {
        AluOpClass::MemAddr => c.op = AluOp::Add,
        AluOpClass::Branch => c.op = AluOp::Sub,
        AluOpClass::RType => match funct {
            f::FUNCT_SLL => {
                c.op = AluOp::Sll;
                c.shift = true;
            }
            f::FUNCT_SRL => {
                c.op = AluOp::Srl;
                c.shift = true;
            }
            f::FUNCT_JR => c.jump_reg = true,
            f::FUNCT_ADD => c.op = AluOp::Add,
            f::FUNCT_ADDU => {
                c.op = AluOp::Add;
                c.unsigned = true;
            }
            f::FUNCT_SUB => c.op = AluOp::Sub,
            f::FUNCT_SUBU => {
                c.op = AluOp::Sub;
                c.unsigned = true;
            }
            f::FUNCT_AND => c.op = AluOp::And,
            f::FUNCT_OR => c.op = AluOp::Or,
            f::FUNCT_NOR => c.op = AluOp::Nor,
            f::FUNCT_SLT => c.op = AluOp::Slt,
            f::FUNCT_SLTU => {
                c.op = AluOp::Slt;
                c.unsigned = true;
            }
            _ => return None,
        },
        AluOpClass::Immediate => match opcode {
            op::OP_ADDI => c.op = AluOp::Add,
            op::OP_ADDIU => {
                c.op = AluOp::Add;
                c.unsigned = true;
            }
            op::OP_SLTI => c.op = AluOp::Slt,
            op::OP_SLTIU => {
                c.op = AluOp::Slt;
                c.unsigned = true;
            }
            op::OP_ANDI => {
                c.op = AluOp::And;
                c.zero_extend = true;
            }
            op::OP_ORI => {
                c.op = AluOp::Or;
                c.zero_extend = true;
            }
            // Jumps and lui produce their values outside the ALU.
            op::OP_J | op::OP_JAL | op::OP_LUI => {}
            _ => return None,
        },
    }
    Some(c)
}

/// Selects the two ALU inputs for an instruction.
///
/// # Arguments
///
/// * `ctrl` - Main control vector.
/// * `alu`  - ALU control.
/// * `inst` - Raw encoding (for `shamt` and the immediate).
/// * `rv1`  - Value of `rs` (already forwarded).
/// * `rv2`  - Value of `rt` (already forwarded).
///
/// # Returns
///
/// `(a, b)`: `a` is `shamt` for shifts and `rs` otherwise; `b` is the
/// extended immediate when `alu_src` selects it and `rt` otherwise.
pub fn select_operands(
    ctrl: &ControlSignals,
    alu: &AluControl,
    inst: u32,
    rv1: u32,
    rv2: u32,
) -> (u32, u32) {
    let a = if alu.shift { inst.shamt() } else { rv1 };
    let b = match ctrl.alu_src {
        OpBSrc::Reg => rv2,
        OpBSrc::Imm if alu.zero_extend => inst.imm_zext(),
        OpBSrc::Imm => inst.imm_sext(),
    };
    (a, b)
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - ALU control (operation and signedness).
    /// * `a`    - First operand (shift amount for shifts).
    /// * `b`    - Second operand.
    ///
    /// # Returns
    ///
    /// The result and zero flag. Unknown operations yield zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluControl};
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// let add = AluControl { op: AluOp::Add, ..Default::default() };
    /// assert_eq!(Alu::execute(&add, 5, 10).result, 15);
    ///
    /// // beq compares with a subtraction
    /// let sub = AluControl { op: AluOp::Sub, ..Default::default() };
    /// assert!(Alu::execute(&sub, 7, 7).zero);
    ///
    /// // slt is signed unless marked unsigned
    /// let slt = AluControl { op: AluOp::Slt, ..Default::default() };
    /// assert_eq!(Alu::execute(&slt, -5_i32 as u32, 10).result, 1);
    /// ```
    pub const fn execute(ctrl: &AluControl, a: u32, b: u32) -> AluOutput {
        let result = match ctrl.op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(ctrl.op, a, b),
            AluOp::And | AluOp::Or | AluOp::Nor | AluOp::Slt => {
                logic::execute(ctrl.op, a, b, ctrl.unsigned)
            }
            AluOp::Sll | AluOp::Srl => shifts::execute(ctrl.op, a, b),
            AluOp::Nop => 0,
        };
        AluOutput {
            result,
            zero: result == 0,
        }
    }
}
