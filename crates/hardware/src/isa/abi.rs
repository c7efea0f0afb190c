//! MIPS o32 Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register names and the indices the hardware
//! gives special meaning to.

/// Register `$0` (always zero).
pub const REG_ZERO: usize = 0;
/// Register `$29` (stack pointer, `$sp`).
pub const REG_SP: usize = 29;
/// Register `$31` (return address written by `jal`, `$ra`).
pub const REG_RA: usize = 31;

/// Conventional names for `$0`-`$31`.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the conventional name of a register, with the `$` prefix.
pub fn reg_name(idx: usize) -> String {
    REG_NAMES
        .get(idx)
        .map_or_else(|| format!("${idx}"), |name| format!("${name}"))
}
