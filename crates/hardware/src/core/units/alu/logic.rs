//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, NOR and set-less-than. The comparison is
//! signed unless the ALU control marks it unsigned (`sltu`, `sltiu`). The
//! result of a comparison is always 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op`       - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`        - First operand.
/// * `b`        - Second operand.
/// * `unsigned` - Compare as unsigned for `Slt`.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32, unsigned: bool) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => {
            if unsigned {
                (a < b) as u32
            } else {
                ((a as i32) < (b as i32)) as u32
            }
        }
        _ => 0,
    }
}
