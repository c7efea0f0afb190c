//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Source Analysis:** Which registers an instruction actually consumes.
//! 2. **Hazard Detection:** Load-use hazards against the Execute/Memory boundary, and
//!    inter-lane dependencies inside a dual-issue bundle.
//! 3. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the
//!    register file with the freshest producer, lane by lane.
//!
//! Every check here runs in Decode *after* Writeback, Memory and Execute have
//! produced this cycle's latches, so "fresh" EX/MEM and MEM/WB entries are the
//! instructions one and two steps ahead of the consumer.

use crate::common::constants::ZERO_REG;
use crate::core::pipeline::latches::{ExMem, IdExEntry, MemWb};
use crate::core::pipeline::signals::{ControlSignals, OpBSrc};
use crate::core::units::alu::AluControl;
use crate::isa::instruction::InstructionBits;

/// Register operands an instruction reads this cycle.
///
/// `None` marks an operand field the instruction does not use, so a matching
/// producer is not a dependency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceRegs {
    /// `rs`, if consumed.
    pub rs: Option<usize>,
    /// `rt`, if consumed.
    pub rt: Option<usize>,
}

impl SourceRegs {
    /// Returns `true` if `reg` is a real (nonzero) consumed source.
    pub fn reads(&self, reg: usize) -> bool {
        reg != ZERO_REG && (self.rs == Some(reg) || self.rt == Some(reg))
    }
}

/// Computes which registers an instruction consumes.
///
/// `rs` is read by everything except jumps, `lui` and shifts (which use
/// `shamt`). `rt` is read by R-type and branch instructions (register second
/// operand) and by stores (store data).
///
/// # Arguments
///
/// * `inst` - Raw encoding.
/// * `ctrl` - Main control vector.
/// * `alu`  - ALU control.
pub fn consumed_sources(inst: u32, ctrl: &ControlSignals, alu: &AluControl) -> SourceRegs {
    let uses_rs = !ctrl.jump && !ctrl.load_upper_imm && !alu.shift;
    let uses_rt = ctrl.alu_src == OpBSrc::Reg || ctrl.mem_write;
    SourceRegs {
        rs: uses_rs.then(|| inst.rs()).filter(|&r| r != ZERO_REG),
        rt: uses_rt.then(|| inst.rt()).filter(|&r| r != ZERO_REG),
    }
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in Decode consumes a register
/// that a load which has just left Execute will only produce at the end of
/// Memory. Holding the consumer one cycle lets the value arrive through the
/// MEM/WB forwarding path instead.
///
/// # Arguments
///
/// * `ex_mem` - The freshly produced EX/MEM latch.
/// * `sources` - Registers consumed by the decoding instruction.
///
/// # Returns
///
/// `true` if a stall is required to resolve the load-use hazard, `false` otherwise.
///
/// # Examples
///
/// ```ignore
/// // EX/MEM: lw  $1, 0x100($0)   <- value ready after Memory
/// // IF/ID:  add $2, $1, $1      <- consumes $1 in Decode
/// //
/// // One bubble is inserted; next cycle $1 is forwarded from MEM/WB.
/// ```
pub fn need_stall_load_use(ex_mem: &ExMem, sources: &SourceRegs) -> bool {
    ex_mem
        .entries
        .iter()
        .any(|e| e.ctrl.mem_read && e.writes_reg() && sources.reads(e.dest))
}

/// Checks if a younger lane must wait for an older lane of the same bundle.
///
/// Lanes in one bundle are decoded in the same cycle, so a consumer cannot
/// see a value its older sibling has not computed yet.
///
/// # Arguments
///
/// * `issued` - Older lanes already issued this cycle, in program order.
/// * `sources` - Registers consumed by the younger lane.
pub fn need_stall_inter_lane(issued: &[IdExEntry], sources: &SourceRegs) -> bool {
    issued
        .iter()
        .any(|e| e.writes_reg() && sources.reads(e.dest))
}

/// Where a forwarded operand comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// No in-flight producer; use the register file.
    RegFile,
    /// ALU result of the given EX/MEM lane.
    ExMem(usize),
    /// Writeback value of the given MEM/WB lane (load data for loads).
    MemWb(usize),
}

/// Selects the freshest producer of `reg`.
///
/// Priority is EX/MEM over MEM/WB over the register file. Within a latch the
/// youngest lane wins, which is the program-order last writer. Loads in EX/MEM
/// are skipped: their data does not exist yet, and the load-use stall keeps
/// consumers from needing it.
///
/// # Arguments
///
/// * `reg` - Register to look up.
/// * `ex_mem` - Freshly produced EX/MEM latch.
/// * `mem_wb` - Freshly produced MEM/WB latch.
pub fn select_source(reg: usize, ex_mem: &ExMem, mem_wb: &MemWb) -> ForwardSource {
    if reg == ZERO_REG {
        return ForwardSource::RegFile;
    }
    if let Some(lane) = ex_mem
        .entries
        .iter()
        .rposition(|e| e.writes_reg() && !e.ctrl.mem_read && e.dest == reg)
    {
        return ForwardSource::ExMem(lane);
    }
    if let Some(lane) = mem_wb
        .entries
        .iter()
        .rposition(|e| e.writes_reg() && e.dest == reg)
    {
        return ForwardSource::MemWb(lane);
    }
    ForwardSource::RegFile
}

/// Forwards register values from later pipeline stages to resolve data hazards.
///
/// `entry.rv1`/`entry.rv2` must already hold the register-file values; they
/// are replaced when a fresher in-flight value exists.
///
/// # Arguments
///
/// * `entry` - The ID/EX entry requiring forwarded register values.
/// * `ex_mem` - Freshly produced EX/MEM latch (one instruction ahead).
/// * `mem_wb` - Freshly produced MEM/WB latch (two instructions ahead).
pub fn forward_operands(entry: &mut IdExEntry, ex_mem: &ExMem, mem_wb: &MemWb) {
    let pc = entry.pc;
    for (name, reg, slot) in [
        ("rs", entry.rs, &mut entry.rv1),
        ("rt", entry.rt, &mut entry.rv2),
    ] {
        let value = match select_source(reg, ex_mem, mem_wb) {
            ForwardSource::RegFile => continue,
            ForwardSource::ExMem(lane) => ex_mem.entries[lane].alu,
            ForwardSource::MemWb(lane) => mem_wb.entries[lane].result(),
        };
        tracing::trace!(pc, operand = name, reg, value, "forward");
        *slot = value;
    }
}
