//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Word size and the default memory capacity.
//! 2. **Register Constants:** Register count and the architecturally special registers.
//! 3. **Instruction Constants:** Instruction size used to advance the PC.

/// Size of a memory word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Size of every instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Default memory capacity in words (256 KiB).
pub const DEFAULT_MEMORY_WORDS: usize = 65536;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Register hardwired to zero.
pub const ZERO_REG: usize = 0;

/// Return-address register written by `jal`.
pub const LINK_REG: usize = 31;
