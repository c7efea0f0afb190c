//! MIPS32 R-type Function Codes.
//!
//! Values of the `funct` field (bits 5-0) for opcode `OP_RTYPE`.

/// Shift left logical by `shamt`.
pub const FUNCT_SLL: u32 = 0x00;

/// Shift right logical by `shamt`.
pub const FUNCT_SRL: u32 = 0x02;

/// Jump to the address held in `rs`.
pub const FUNCT_JR: u32 = 0x08;

/// Add.
pub const FUNCT_ADD: u32 = 0x20;

/// Add unsigned.
pub const FUNCT_ADDU: u32 = 0x21;

/// Subtract.
pub const FUNCT_SUB: u32 = 0x22;

/// Subtract unsigned.
pub const FUNCT_SUBU: u32 = 0x23;

/// Bitwise AND.
pub const FUNCT_AND: u32 = 0x24;

/// Bitwise OR.
pub const FUNCT_OR: u32 = 0x25;

/// Bitwise NOR.
pub const FUNCT_NOR: u32 = 0x27;

/// Set on less than (signed).
pub const FUNCT_SLT: u32 = 0x2A;

/// Set on less than unsigned.
pub const FUNCT_SLTU: u32 = 0x2B;
