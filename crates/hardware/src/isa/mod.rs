//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the implemented MIPS32 integer subset.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Main control decoding (opcode → control signals).
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// MIPS32 opcode and function-code tables.
pub mod mips32;
