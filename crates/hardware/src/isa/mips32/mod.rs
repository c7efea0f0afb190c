//! MIPS32 integer subset.
//!
//! Primary opcodes (bits 31-26) and R-type function codes (bits 5-0) for the
//! instructions the simulator implements.

/// R-type function codes (`funct` field when the opcode is zero).
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
