//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Instruction Decoding:** Produces the control vector and ALU control, attaching an
//!    `IllegalInstruction` fault (strict) or substituting a no-op (permissive).
//! 2. **Register Read:** Reads both source operands from the register file.
//! 3. **Hazard Detection:** Holds instructions in IF/ID on load-use and inter-lane
//!    dependencies.
//! 4. **Forwarding:** Replaces register-file values with fresher in-flight results.
//!
//! Decode runs after Writeback, Memory and Execute, so the register file already holds
//! this cycle's commits and the EX/MEM and MEM/WB latches passed in are the ones those
//! stages have just produced.

use crate::core::Cpu;
use crate::core::pipeline::hazards::{
    consumed_sources, forward_operands, need_stall_inter_lane, need_stall_load_use,
};
use crate::core::pipeline::latches::{ExMem, IdEx, IdExEntry, IfId, IfIdEntry, MemWb, dest_reg};
use crate::isa::decode::{decode_instruction, decode_or_nop};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;

/// Result of one decode cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Entries issued to Execute, in program order.
    pub issued: IdEx,
    /// Entries held back in IF/ID, in program order.
    pub held: IfId,
    /// A load-use hazard held an entry this cycle.
    pub load_use_stall: bool,
    /// An inter-lane dependency held an entry this cycle.
    pub inter_lane_stall: bool,
}

/// Builds the ID/EX entry of an instruction that carries no operands.
fn passthrough(entry: &IfIdEntry) -> IdExEntry {
    IdExEntry {
        pc: entry.pc,
        inst: entry.inst,
        fault: entry.fault,
        halt: entry.halt,
        ..IdExEntry::default()
    }
}

/// Executes the instruction decode stage.
///
/// Lanes are processed oldest first. Once a lane is held, every younger lane
/// is held behind it so that instructions leave Decode in program order.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the register file is read.
/// * `if_id` - Instructions fetched last cycle (or held from earlier cycles).
/// * `ex_mem` - EX/MEM latch produced this cycle.
/// * `mem_wb` - MEM/WB latch produced this cycle.
/// * `strict` - Attach a fault to unsupported encodings instead of decoding a no-op.
///
/// # Returns
///
/// The issued and held entries and which stall conditions fired.
pub fn decode_stage(
    cpu: &mut Cpu,
    if_id: &IfId,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    strict: bool,
) -> DecodeOutput {
    let mut out = DecodeOutput::default();

    for entry in &if_id.entries {
        if !out.held.entries.is_empty() {
            out.held.entries.push(entry.clone());
            continue;
        }

        if entry.fault.is_some() || entry.halt {
            out.issued.entries.push(passthrough(entry));
            continue;
        }

        let decoded = if strict {
            match decode_instruction(entry.pc, entry.inst) {
                Ok(d) => d,
                Err(fault) => {
                    tracing::debug!(pc = entry.pc, inst = entry.inst, "ID  illegal instruction");
                    out.issued.entries.push(IdExEntry {
                        fault: Some(fault),
                        ..passthrough(entry)
                    });
                    continue;
                }
            }
        } else {
            decode_or_nop(entry.pc, entry.inst)
        };

        let sources = consumed_sources(entry.inst, &decoded.ctrl, &decoded.alu);

        if need_stall_load_use(ex_mem, &sources) {
            tracing::debug!(pc = entry.pc, "ID  load-use stall");
            out.load_use_stall = true;
            out.held.entries.push(entry.clone());
            continue;
        }
        if need_stall_inter_lane(&out.issued.entries, &sources) {
            tracing::debug!(pc = entry.pc, "ID  inter-lane stall");
            out.inter_lane_stall = true;
            out.held.entries.push(entry.clone());
            continue;
        }

        let (rs, rt) = (entry.inst.rs(), entry.inst.rt());
        let (rv1, rv2) = cpu.regs.access(rs, rt, None);
        let mut issued = IdExEntry {
            pc: entry.pc,
            inst: entry.inst,
            rs,
            rt,
            dest: dest_reg(&decoded.ctrl, entry.inst),
            rv1,
            rv2,
            ctrl: decoded.ctrl,
            alu: decoded.alu,
            pred_taken: entry.pred_taken,
            pred_history: entry.pred_history,
            fault: None,
            halt: false,
        };
        forward_operands(&mut issued, ex_mem, mem_wb);
        tracing::trace!(
            pc = issued.pc,
            asm = %disassemble(issued.inst),
            rv1 = issued.rv1,
            rv2 = issued.rv2,
            "ID"
        );
        out.issued.entries.push(issued);
    }

    out
}
