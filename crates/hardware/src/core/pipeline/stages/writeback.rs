//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the pipeline. Entries commit in
//! lane order: a carried fault stops the run, the halt marker ends it, and
//! everything else writes its result and is counted in the statistics.

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::engine::StepOutcome;
use crate::core::pipeline::latches::MemWb;
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{funct, opcodes};

/// Returns `true` if `inst` encodes `jr`.
pub fn is_jump_register(inst: u32) -> bool {
    inst.opcode() == opcodes::OP_RTYPE && inst.funct() == funct::FUNCT_JR
}

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; registers and statistics are updated.
/// * `mem_wb` - Instructions that completed Memory last cycle.
///
/// # Returns
///
/// `StepOutcome::Halted` when the halt marker commits, or the carried fault
/// as `SimError::Fault`.
pub fn writeback_stage(cpu: &mut Cpu, mem_wb: &MemWb) -> Result<StepOutcome, SimError> {
    for entry in &mem_wb.entries {
        if let Some(fault) = entry.fault {
            tracing::debug!(pc = entry.pc, %fault, "WB  fault committed");
            return Err(fault.into());
        }
        if entry.halt {
            tracing::debug!(pc = entry.pc, cycle = cpu.stats.cycles, "WB  halt");
            return Ok(StepOutcome::Halted);
        }

        if entry.writes_reg() {
            let value = entry.result();
            let _ = cpu.regs.access(0, 0, Some((entry.dest, value)));
            tracing::trace!(pc = entry.pc, dest = entry.dest, value, "WB");
        }
        cpu.stats
            .record_commit(&entry.ctrl, is_jump_register(entry.inst));
    }

    Ok(StepOutcome::Running)
}
