//! Simulation driver and program loading.
//!
//! Provides the loader that turns files into memory images and the
//! simulator that runs them on the configured engine.

/// ELF and raw image loading.
pub mod loader;

/// Top-level simulator and per-cycle snapshots.
pub mod simulator;

pub use loader::Program;
pub use simulator::{CycleSnapshot, RunSummary, Simulator};
