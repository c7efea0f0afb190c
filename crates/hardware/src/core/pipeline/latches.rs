//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five pipeline stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Structures for carrying state between pipeline stages.
//! 2. **Superscalar Support:** Multi-entry latches for dual-issue configurations. Entries are
//!    stored in program order; lane 0 is the oldest. A missing lane is a bubble.
//! 3. **Fault Propagation:** Carrying faults with the instruction until it commits.

use crate::common::constants::LINK_REG;
use crate::common::error::Fault;
use crate::core::pipeline::signals::{ControlSignals, RegDest};
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::AluControl;
use crate::isa::instruction::InstructionBits;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
///
/// Contains the raw encoding fetched from memory and the branch prediction
/// made for it.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Whether the branch predictor predicted this instruction as taken.
    pub pred_taken: bool,
    /// Predictor history the prediction was made with.
    pub pred_history: u32,
    /// Fault that occurred during fetch, if any.
    pub fault: Option<Fault>,
    /// End-of-program marker fetched at the end PC; has no architectural effect.
    pub halt: bool,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains decoded instruction information, including register indices,
/// forwarded operand values, and control signals.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index (rs).
    pub rs: usize,
    /// Second source register index (rt).
    pub rt: usize,
    /// Destination register index, already resolved from `reg_dest`/`jump_link`.
    pub dest: usize,
    /// Value of rs after forwarding.
    pub rv1: u32,
    /// Value of rt after forwarding.
    pub rv2: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// ALU operation and flags.
    pub alu: AluControl,
    /// Whether the branch predictor predicted this instruction as taken.
    pub pred_taken: bool,
    /// Predictor history the prediction was made with; trains the same counter.
    pub pred_history: u32,
    /// Fault that occurred during fetch or decode, if any.
    pub fault: Option<Fault>,
    /// End-of-program marker.
    pub halt: bool,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
///
/// Contains execution results, including ALU outputs and memory operation parameters.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub dest: usize,
    /// ALU result, effective address, `lui` value or link address.
    pub alu: u32,
    /// Data to be stored (for store instructions).
    pub store_data: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Fault carried from an earlier stage, if any.
    pub fault: Option<Fault>,
    /// End-of-program marker.
    pub halt: bool,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
///
/// Contains memory stage results, including loaded data and final register write values.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub dest: usize,
    /// ALU computation result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// Fault carried from an earlier stage, if any.
    pub fault: Option<Fault>,
    /// End-of-program marker.
    pub halt: bool,
}

impl IdExEntry {
    /// Returns `true` if this entry will write a nonzero register.
    pub const fn writes_reg(&self) -> bool {
        self.ctrl.reg_write && self.dest != 0 && self.fault.is_none()
    }
}

impl ExMemEntry {
    /// Returns `true` if this entry will write a nonzero register.
    pub const fn writes_reg(&self) -> bool {
        self.ctrl.reg_write && self.dest != 0 && self.fault.is_none()
    }
}

impl MemWbEntry {
    /// Returns `true` if this entry will write a nonzero register.
    pub const fn writes_reg(&self) -> bool {
        self.ctrl.reg_write && self.dest != 0 && self.fault.is_none()
    }

    /// The value this entry writes back: load data for loads, the ALU value otherwise.
    pub const fn result(&self) -> u32 {
        if self.ctrl.mem_to_reg {
            self.load_data
        } else {
            self.alu
        }
    }
}

/// Resolves the destination register of an instruction.
///
/// `jal` always links into `$ra`; otherwise `reg_dest` picks `rd` or `rt`.
pub fn dest_reg(ctrl: &ControlSignals, inst: u32) -> usize {
    if ctrl.jump_link {
        LINK_REG
    } else {
        match ctrl.reg_dest {
            RegDest::Rd => inst.rd(),
            RegDest::Rt => inst.rt(),
        }
    }
}

macro_rules! latch {
    ($(#[$meta:meta])* $name:ident, $entry:ty) => {
        $(#[$meta])*
        #[derive(Clone, Default, Debug, PartialEq, Eq)]
        pub struct $name {
            /// Entries in program order (lane 0 first).
            pub entries: Vec<$entry>,
        }

        impl PipelineLatch for $name {
            fn flush(&mut self) {
                self.entries.clear();
            }

            fn is_empty(&self) -> bool {
                self.entries.is_empty()
            }

            fn has_fault(&self) -> bool {
                self.entries.iter().any(|e| e.fault.is_some())
            }
        }
    };
}

latch!(
    /// IF/ID latch: fetched instructions awaiting decode (including held, stalled ones).
    IfId,
    IfIdEntry
);
latch!(
    /// ID/EX latch: decoded instructions with forwarded operands.
    IdEx,
    IdExEntry
);
latch!(
    /// EX/MEM latch: executed instructions awaiting memory access.
    ExMem,
    ExMemEntry
);
latch!(
    /// MEM/WB latch: instructions awaiting commit.
    MemWb,
    MemWbEntry
);
