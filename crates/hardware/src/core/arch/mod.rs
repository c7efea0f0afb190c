//! Architectural state components.
//!
//! Holds the programmer-visible register storage. Memory lives in
//! [`crate::soc::memory`].

/// General-purpose register file (`$0`-`$31`).
pub mod gpr;
