//! Physical System Memory.
//!
//! This module implements the flat, word-addressed main memory. It provides:
//! 1. **Storage:** A vector of 32-bit words; byte address `a` lives in word `a / 4`.
//! 2. **Access:** A combined read/write port returning the pre-write value.
//! 3. **Loading:** Placement of program images at a byte offset.
//!
//! Word accesses ignore the two low address bits. Sub-word lanes are
//! handled by the LSU on top of whole-word accesses.

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;

/// Main memory: a flat array of 32-bit words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zero-filled memory of `words` 32-bit words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Size of the memory in words.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Size of the memory in bytes.
    pub fn len_bytes(&self) -> usize {
        self.words.len() * WORD_BYTES as usize
    }

    /// Returns `true` if `addr` falls inside memory.
    pub fn contains(&self, addr: u32) -> bool {
        ((addr / WORD_BYTES) as usize) < self.words.len()
    }

    /// Reads and optionally writes the word containing `addr`.
    ///
    /// The read observes the value *before* the write, so a single call can
    /// serve as a read-modify-write port.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address; the low two bits are ignored.
    /// * `write` - Value to store, if any.
    ///
    /// # Returns
    ///
    /// The previous contents of the word, or `SimError::MemoryOutOfBounds`.
    pub fn access(&mut self, addr: u32, write: Option<u32>) -> Result<u32, SimError> {
        let slot = self
            .words
            .get_mut((addr / WORD_BYTES) as usize)
            .ok_or(SimError::MemoryOutOfBounds { addr })?;
        let old = *slot;
        if let Some(value) = write {
            *slot = value;
        }
        Ok(old)
    }

    /// Reads the word containing `addr`.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        self.words
            .get((addr / WORD_BYTES) as usize)
            .copied()
            .ok_or(SimError::MemoryOutOfBounds { addr })
    }

    /// Writes the word containing `addr`.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        self.access(addr, Some(value)).map(|_| ())
    }

    /// Copies already-assembled words into memory starting at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word-aligned byte address of the first word.
    /// * `data` - Words to store.
    ///
    /// # Returns
    ///
    /// `SimError::ProgramTooLarge` if the image does not fit.
    pub fn load_words(&mut self, addr: u32, data: &[u32]) -> Result<(), SimError> {
        let start = (addr / WORD_BYTES) as usize;
        let end = start + data.len();
        if end > self.words.len() {
            return Err(SimError::ProgramTooLarge {
                bytes: end * WORD_BYTES as usize,
                capacity: self.len_bytes(),
            });
        }
        self.words[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Returns the backing words, e.g. for end-of-run comparisons.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
