//! ALU shift operations.
//!
//! Shifts take the amount as the *first* operand (the `shamt` field) and
//! the value as the second (register `rt`), matching the datapath where
//! the shift amount is muxed onto ALU input A.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`     - The ALU operation to perform (must be a shift variant).
/// * `amount` - Shift amount; only the low five bits are used.
/// * `value`  - The value to be shifted.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, amount: u32, value: u32) -> u32 {
    let sh = amount & SHAMT_MASK;
    match op {
        AluOp::Sll => value << sh,
        AluOp::Srl => value >> sh,
        _ => 0,
    }
}
