//! Execution units and functional components.
//!
//! This module contains the functional units shared by every engine: the
//! integer ALU, the branch prediction unit, and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch prediction unit (static and gshare predictors).
pub mod bru;

/// Load/Store Unit for sub-word memory access.
pub mod lsu;
