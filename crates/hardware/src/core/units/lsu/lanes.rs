//! Byte lanes within a memory word.
//!
//! Lanes are numbered big-endian: byte address `4k` is the most significant
//! byte of word `k`. Halfwords occupy the upper half at offsets 0-1 and the
//! lower half at offsets 2-3; word accesses ignore the offset entirely.

use crate::core::pipeline::signals::MemWidth;

/// Position of a sub-word value inside its containing word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteLane {
    shift: u32,
    mask: u32,
    bits: u32,
}

impl ByteLane {
    /// Computes the lane for an access of `width` at byte address `addr`.
    pub const fn new(addr: u32, width: MemWidth) -> Self {
        let offset = addr & 0b11;
        match width {
            MemWidth::Byte => Self {
                shift: (3 - offset) * 8,
                mask: 0xFF,
                bits: 8,
            },
            MemWidth::Half => Self {
                shift: (2 - (offset & 0b10)) * 8,
                mask: 0xFFFF,
                bits: 16,
            },
            MemWidth::Word => Self {
                shift: 0,
                mask: u32::MAX,
                bits: 32,
            },
        }
    }

    /// Bit position of the lane's least significant bit.
    pub const fn shift(self) -> u32 {
        self.shift
    }

    /// Mask of the lane, aligned to bit 0.
    pub const fn mask(self) -> u32 {
        self.mask
    }

    /// Extracts the lane from `word`, zero- or sign-extending it.
    pub const fn extract(self, word: u32, signed: bool) -> u32 {
        let raw = (word >> self.shift) & self.mask;
        if signed {
            let pad = 32 - self.bits;
            (((raw << pad) as i32) >> pad) as u32
        } else {
            raw
        }
    }

    /// Returns `word` with the lane replaced by the low bits of `value`.
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        let lane = self.mask << self.shift;
        (word & !lane) | ((value & self.mask) << self.shift)
    }
}
