//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-level simulator of a 32-bit MIPS-like CPU with the following:
//! 1. **Core:** A five-stage pipeline (fetch, decode, execute, memory, writeback) of width 1 or 2
//!    with hazard detection, operand forwarding, and branch prediction, plus a single-cycle
//!    reference engine.
//! 2. **Memory:** A flat word-addressed main memory with byte and halfword lanes.
//! 3. **ISA:** Decoding and execution of a MIPS32 integer subset.
//! 4. **Simulation:** Loader, configuration, and statistics collection.
//!
//! # Example
//!
//! ```
//! use mipsim_core::config::{Config, Processor};
//! use mipsim_core::sim::{Program, Simulator};
//!
//! // addi $1, $0, 5 ; addi $2, $0, 7 ; add $3, $1, $2
//! let program = Program::from_words(vec![0x2001_0005, 0x2002_0007, 0x0022_1820]);
//! let config = Config::for_processor(Processor::Pipelined);
//! let mut sim = Simulator::new(&config, &program).unwrap();
//! let summary = sim.run(|_| {}).unwrap();
//! assert_eq!(sim.cpu.regs.read(3), 12);
//! assert_eq!(summary.instructions, 3);
//! ```

/// Common types and constants (errors, faults, register file).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, pipeline, single-cycle engine, units).
pub mod core;
/// Instruction set (decode, instruction fields, opcode tables, disassembly).
pub mod isa;
/// Program loading and the top-level simulator.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state; holds registers, memory and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
