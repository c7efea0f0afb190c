//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word size, register count and special registers.
//! 2. **Error Handling:** Pipeline faults and run-stopping simulation errors.
//! 3. **Register Management:** The register-file access port.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault and error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{Fault, SimError};
pub use reg::RegisterFile;
