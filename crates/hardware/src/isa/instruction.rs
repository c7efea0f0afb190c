//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the R, I and J instruction formats.
//! Fields are always derived from the raw 32-bit word; nothing is cached.

/// Bit mask for the opcode field (bits 26-31, after shifting).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for any 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the shift amount field (bits 6-10, after shifting).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for the funct field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;
/// Region bits of `PC + 4` kept by J-type jumps.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    ///
    /// Opcode 0 selects the R-type format, where `funct` names the operation.
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source register field (bits 16-20).
    ///
    /// For I-type instructions this is the destination register.
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), not extended.
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump target (bits 0-25).
    fn target26(&self) -> u32;

    /// Returns the immediate sign-extended to 32 bits.
    fn imm_sext(&self) -> u32;

    /// Returns the immediate zero-extended to 32 bits.
    fn imm_zext(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target26(&self) -> u32 {
        self & TARGET_MASK
    }

    /// Sign-extends through `i16` so bit 15 fills the upper half.
    #[inline(always)]
    fn imm_sext(&self) -> u32 {
        (self.imm16() as u16 as i16) as i32 as u32
    }

    #[inline(always)]
    fn imm_zext(&self) -> u32 {
        self.imm16()
    }
}

/// Computes the taken target of a conditional branch.
///
/// # Arguments
///
/// * `pc` - Address of the branch instruction.
/// * `inst` - Raw branch encoding.
///
/// # Returns
///
/// `pc + 4 + (sext(imm16) << 2)`, wrapping.
pub fn branch_target(pc: u32, inst: u32) -> u32 {
    pc.wrapping_add(4).wrapping_add(inst.imm_sext() << 2)
}

/// Computes the target of a `j`/`jal` instruction.
///
/// The upper four bits come from `pc + 4`; the rest is the 26-bit field
/// scaled to a byte address.
pub fn jump_target(pc: u32, inst: u32) -> u32 {
    (pc.wrapping_add(4) & JUMP_REGION_MASK) | (inst.target26() << 2)
}
