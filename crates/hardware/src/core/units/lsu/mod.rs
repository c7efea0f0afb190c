//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for sub-word memory
//! access on top of the word-addressed memory. It includes:
//! - [`lanes`]: The byte-lane abstraction (offset, width → shift and mask).
//! - [`Lsu`]: Loads with sign/zero extension and read-modify-write stores.

/// Byte-lane arithmetic for sub-word accesses.
pub mod lanes;

pub use self::lanes::ByteLane;

use crate::common::error::SimError;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::memory::Memory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs a load of `width` bytes at `addr`.
    ///
    /// # Arguments
    ///
    /// * `mem`    - Main memory.
    /// * `addr`   - Byte address.
    /// * `width`  - Access width.
    /// * `signed` - Sign-extend sub-word values.
    ///
    /// # Returns
    ///
    /// The extended value, or `SimError::MemoryOutOfBounds`.
    pub fn load(mem: &Memory, addr: u32, width: MemWidth, signed: bool) -> Result<u32, SimError> {
        let word = mem.read_word(addr)?;
        Ok(ByteLane::new(addr, width).extract(word, signed))
    }

    /// Performs a store of the low `width` bytes of `value` at `addr`.
    ///
    /// Byte and halfword stores read the containing word, splice the new lane in,
    /// and write the word back; the other lanes keep their contents.
    ///
    /// # Arguments
    ///
    /// * `mem`   - Main memory.
    /// * `addr`  - Byte address.
    /// * `width` - Access width.
    /// * `value` - Register value; only the low `width` bytes are stored.
    pub fn store(mem: &mut Memory, addr: u32, width: MemWidth, value: u32) -> Result<(), SimError> {
        let word = match width {
            MemWidth::Word => value,
            MemWidth::Half | MemWidth::Byte => {
                ByteLane::new(addr, width).insert(mem.read_word(addr)?, value)
            }
        };
        mem.write_word(addr, word)
    }
}
