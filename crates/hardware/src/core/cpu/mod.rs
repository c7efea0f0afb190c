//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the architectural state shared by
//! every engine. It coordinates the following:
//! 1. **State Management:** Maintains the register file and program counter.
//! 2. **Memory:** Owns the flat word-addressed main memory.
//! 3. **Termination:** Records the end PC at which the program is considered finished.
//! 4. **Statistics:** Accumulates performance counters for the run.
//!
//! Engines never own architectural state; they borrow the `Cpu` once per cycle.

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Architectural state of the processor.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter of the next fetch.
    pub pc: u32,
    /// Main memory.
    pub mem: Memory,
    /// Address one past the last instruction of the program.
    pub end_pc: u32,
    /// Performance counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory sized from `config`.
    ///
    /// The PC starts at 0, where programs are loaded.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration.
    /// * `end_pc` - First address past the program.
    pub fn new(config: &Config, end_pc: u32) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            mem: Memory::new(config.memory.words),
            end_pc,
            stats: SimStats::default(),
        }
    }

    /// Returns `true` once the PC has reached the end of the program.
    pub const fn at_end(&self) -> bool {
        self.pc == self.end_pc
    }
}
