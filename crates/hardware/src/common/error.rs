//! Fault and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fault Representation:** Architectural faults detected inside the pipeline and
//!    carried with the offending instruction until it commits.
//! 2. **Simulation Errors:** Everything that stops a run, from unreadable input files to a
//!    committed fault.
//! 3. **Error Handling:** `thiserror`-derived `Display` and `Error` implementations.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Processor;

/// Architectural fault carried through the pipeline.
///
/// A fault is attached to the latch entry of the instruction that caused it.
/// It only becomes a [`SimError`] when that instruction commits, so faults on
/// squashed wrong-path instructions disappear with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The opcode or R-type `funct` is not implemented.
    #[error("illegal instruction {inst:#010x} at pc {pc:#010x}")]
    IllegalInstruction {
        /// Address of the instruction.
        pc: u32,
        /// Raw encoding.
        inst: u32,
    },

    /// The fetch address is outside memory.
    #[error("instruction fetch outside memory at pc {pc:#010x}")]
    FetchOutOfBounds {
        /// Address that could not be fetched.
        pc: u32,
    },
}

/// Errors that stop a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading an input file failed.
    #[error("could not read '{path}': {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The ELF file could not be parsed.
    #[error("malformed ELF file: {0}")]
    Elf(#[from] object::read::Error),

    /// The ELF file has no executable section linked at address zero.
    #[error("no executable section loaded at address 0")]
    MissingTextSection,

    /// The program image does not fit in memory.
    #[error("program of {bytes} bytes does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Bytes required.
        bytes: usize,
        /// Bytes available.
        capacity: usize,
    },

    /// A data access fell outside memory.
    #[error("memory access outside memory at {addr:#010x}")]
    MemoryOutOfBounds {
        /// Faulting byte address.
        addr: u32,
    },

    /// A faulting instruction committed.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The configured cycle limit was reached before the program ended.
    #[error("cycle limit of {cycles} reached before the end of the program")]
    CycleLimit {
        /// Configured limit.
        cycles: u64,
    },

    /// The selected processor variant has no engine.
    #[error("processor '{0}' is not implemented")]
    UnsupportedProcessor(Processor),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON configuration or statistics file could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
