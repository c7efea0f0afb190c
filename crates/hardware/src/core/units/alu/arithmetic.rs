//! ALU arithmetic operations.
//!
//! Addition and subtraction on 32-bit words. Both wrap on overflow; the
//! signed and unsigned MIPS variants differ only in trapping, which is not
//! modelled.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
