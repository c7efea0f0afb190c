//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) of the implemented subset.

/// Register-register operations; `funct` selects the operation.
pub const OP_RTYPE: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and link (JAL); writes the return address to `$ra`.
pub const OP_JAL: u32 = 0x03;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// Set on less than immediate unsigned (SLTIU).
pub const OP_SLTIU: u32 = 0x0B;

/// AND immediate (ANDI), zero-extended immediate.
pub const OP_ANDI: u32 = 0x0C;

/// OR immediate (ORI), zero-extended immediate.
pub const OP_ORI: u32 = 0x0D;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load byte, sign-extended (LB).
pub const OP_LB: u32 = 0x20;

/// Load halfword, sign-extended (LH).
pub const OP_LH: u32 = 0x21;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Load byte unsigned (LBU).
pub const OP_LBU: u32 = 0x24;

/// Load halfword unsigned (LHU).
pub const OP_LHU: u32 = 0x25;

/// Store byte (SB).
pub const OP_SB: u32 = 0x28;

/// Store halfword (SH).
pub const OP_SH: u32 = 0x29;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;
