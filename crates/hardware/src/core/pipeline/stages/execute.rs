//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Arithmetic Execution:** Runs the ALU on the forwarded operands.
//! 2. **Special Results:** Produces the `lui` value, the `jal` link address and store data.
//! 3. **Branch Resolution:** Resolves conditional branches, trains the predictor, and
//!    requests a redirect on a misprediction or any jump.
//!
//! [`evaluate`] holds the per-instruction datapath and is shared with the
//! single-cycle engine so both compute results through the same code.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, IdExEntry};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::units::alu::{Alu, AluControl, select_operands};
use crate::core::units::bru::BranchPredictor;
use crate::isa::instruction::{InstructionBits, branch_target, jump_target};

/// Datapath results of one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluated {
    /// Value for the destination register, or the effective address for memory ops.
    pub value: u32,
    /// Data a store writes (the `rt` operand).
    pub store_data: u32,
    /// A conditional branch's actual direction; `false` for everything else.
    pub taken: bool,
    /// Address of the next instruction on the correct path.
    pub next_pc: u32,
}

/// Computes the results of an instruction from its operands.
///
/// # Arguments
///
/// * `ctrl` - Main control vector.
/// * `alu` - ALU control.
/// * `inst` - Raw encoding.
/// * `pc` - Address of the instruction.
/// * `rv1` - Value of `rs`.
/// * `rv2` - Value of `rt`.
pub fn evaluate(
    ctrl: &ControlSignals,
    alu: &AluControl,
    inst: u32,
    pc: u32,
    rv1: u32,
    rv2: u32,
) -> Evaluated {
    let (a, b) = select_operands(ctrl, alu, inst, rv1, rv2);
    let out = Alu::execute(alu, a, b);

    let value = if ctrl.load_upper_imm {
        inst.imm16() << 16
    } else if ctrl.jump_link {
        pc.wrapping_add(2 * INSTRUCTION_SIZE)
    } else {
        out.result
    };

    let taken = ctrl.branch && (out.zero != ctrl.branch_not_equal);
    let next_pc = if alu.jump_reg {
        rv1
    } else if ctrl.jump {
        jump_target(pc, inst)
    } else if taken {
        branch_target(pc, inst)
    } else {
        pc.wrapping_add(INSTRUCTION_SIZE)
    };

    Evaluated {
        value,
        store_data: rv2,
        taken,
        next_pc,
    }
}

/// Result of one execute cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Entries passed on to Memory.
    pub ex_mem: ExMem,
    /// Correct-path fetch address when a control instruction redirects.
    pub redirect: Option<u32>,
    /// Younger lanes of the bundle discarded by the redirect.
    pub squashed: usize,
}

/// Builds the EX/MEM entry of an instruction that produces nothing.
fn passthrough(entry: &IdExEntry) -> ExMemEntry {
    ExMemEntry {
        pc: entry.pc,
        inst: entry.inst,
        fault: entry.fault,
        halt: entry.halt,
        ..ExMemEntry::default()
    }
}

/// Executes the instruction execute stage.
///
/// Lanes are processed oldest first. The first lane that redirects ends the
/// bundle: it is itself passed on, and all younger lanes are squashed.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the prediction counters are updated.
/// * `id_ex` - Instructions decoded last cycle.
/// * `predictor` - Branch predictor, trained on every resolved conditional branch.
pub fn execute_stage<P: BranchPredictor>(
    cpu: &mut Cpu,
    id_ex: &IdEx,
    predictor: &mut P,
) -> ExecuteOutput {
    let mut out = ExecuteOutput::default();

    for (lane, entry) in id_ex.entries.iter().enumerate() {
        if entry.fault.is_some() || entry.halt {
            out.ex_mem.entries.push(passthrough(entry));
            continue;
        }

        let ev = evaluate(
            &entry.ctrl,
            &entry.alu,
            entry.inst,
            entry.pc,
            entry.rv1,
            entry.rv2,
        );
        tracing::trace!(pc = entry.pc, value = ev.value, "EX");

        out.ex_mem.entries.push(ExMemEntry {
            pc: entry.pc,
            inst: entry.inst,
            dest: entry.dest,
            alu: ev.value,
            store_data: ev.store_data,
            ctrl: entry.ctrl,
            fault: None,
            halt: false,
        });

        let redirect = if entry.ctrl.branch {
            predictor.update_branch(entry.pc, ev.taken, entry.pred_history);
            if ev.taken == entry.pred_taken {
                cpu.stats.branch_predictions += 1;
                false
            } else {
                cpu.stats.branch_mispredictions += 1;
                tracing::debug!(pc = entry.pc, taken = ev.taken, "EX  branch mispredicted");
                true
            }
        } else {
            entry.ctrl.jump || entry.alu.jump_reg
        };

        if redirect {
            out.redirect = Some(ev.next_pc);
            out.squashed = id_ex.entries.len() - lane - 1;
            break;
        }
    }

    out
}
