//! MIPS General-Purpose Register File.
//!
//! Thirty-two 32-bit registers, `$0` through `$31`. Register `$0` reads as
//! zero regardless of what is written to it; the file also offers a snapshot
//! for comparisons and a paired dump for the CLI.

use crate::common::constants::{NUM_REGS, ZERO_REG};

/// The architectural register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Returns a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads register `idx`. `$0` always yields 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == ZERO_REG { 0 } else { self.regs[idx] }
    }

    /// Writes `val` into register `idx`.
    ///
    /// A write addressed to `$0` is dropped, so wrong-path or nop-like
    /// instructions targeting it never disturb the hardwired zero.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == ZERO_REG {
            return;
        }
        self.regs[idx] = val;
    }

    /// Copies out the whole file.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Prints the register file to stdout, two registers per line.
    pub fn dump(&self) {
        for (row, pair) in self.regs.chunks_exact(2).enumerate() {
            let lo = row * 2;
            println!(
                "${:<2}={:#010x} ${:<2}={:#010x}",
                lo,
                pair[0],
                lo + 1,
                pair[1]
            );
        }
    }
}
