//! Core processor implementation.
//!
//! This module contains the architectural state, the instruction pipeline,
//! the single-cycle reference engine, and the execution units they share.

/// Architecture-specific components (general-purpose registers).
pub mod arch;

/// CPU architectural state.
pub mod cpu;

/// Instruction pipeline implementation (engine, stages, latches, hazards, signals).
pub mod pipeline;

/// Single-cycle reference engine.
pub mod single_cycle;

/// Execution units (ALU, LSU, branch predictor).
pub mod units;

pub use self::cpu::Cpu;
