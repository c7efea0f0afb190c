//! System-on-Chip (SoC) Components.
//!
//! The simulated system is a single flat main memory; there are no devices
//! or interconnect.

/// Main memory.
pub mod memory;

pub use memory::Memory;
