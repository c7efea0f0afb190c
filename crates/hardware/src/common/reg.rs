//! Register File Port.
//!
//! This module provides the `RegisterFile` struct, the combinational access port in front of
//! the GPR storage. It provides:
//! 1. **Dual-read / single-write access:** Both reads and an optional write in one call, with
//!    reads reflecting the pre-write state.
//! 2. **Direct access:** Single-register reads and writes for writeback and test setup.
//! 3. **Observability:** Snapshots and dumps of the register state.

use crate::common::constants::NUM_REGS;
use crate::core::arch::gpr::Gpr;

/// Register file with two read ports and one write port.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Performs one combined register-file access.
    ///
    /// # Arguments
    ///
    /// * `read1` - Index for read port 1.
    /// * `read2` - Index for read port 2.
    /// * `write` - Optional `(index, value)` for the write port.
    ///
    /// # Returns
    ///
    /// `(value1, value2)` as they were before the write.
    pub fn access(&mut self, read1: usize, read2: usize, write: Option<(usize, u32)>) -> (u32, u32) {
        let values = (self.gpr.read(read1), self.gpr.read(read2));
        if let Some((idx, val)) = write {
            self.gpr.write(idx, val);
        }
        values
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns a copy of all 32 registers.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.gpr.snapshot()
    }

    /// Dumps the register state to stdout.
    pub fn dump(&self) {
        self.gpr.dump();
    }
}
