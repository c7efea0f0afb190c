//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It is responsible for fetching instructions from memory using the
//! current Program Counter (PC), emitting the end-of-program marker, and
//! performing branch prediction to determine the next PC.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::Fault;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IfId, IfIdEntry};
use crate::core::units::bru::BranchPredictor;
use crate::isa::instruction::{InstructionBits, branch_target};
use crate::isa::mips32::opcodes as op;

/// Returns `true` for the conditional branches the predictor is consulted on.
pub fn is_conditional_branch(inst: u32) -> bool {
    matches!(inst.opcode(), op::OP_BEQ | op::OP_BNE)
}

/// Executes the instruction fetch stage of the pipeline.
///
/// Appends instructions to `if_id` until it holds `width` entries. Entries
/// already present are ones Decode held back this cycle; they stay ahead of
/// the new ones in program order.
///
/// # Arguments
///
/// * `cpu` - CPU state; `cpu.pc` is read and advanced.
/// * `if_id` - The IF/ID latch being refilled.
/// * `predictor` - Branch predictor, queried but never trained here.
/// * `width` - Pipeline width.
/// * `halted` - Set once the end marker or a fetch fault has been emitted.
///
/// # Behavior
///
/// - At `end_pc` a single halt marker is emitted and fetching stops
/// - An address outside memory produces an entry carrying `FetchOutOfBounds`
/// - A branch predicted taken moves the PC to its target and ends the bundle
pub fn fetch_stage<P: BranchPredictor>(
    cpu: &mut Cpu,
    if_id: &mut IfId,
    predictor: &P,
    width: usize,
    halted: &mut bool,
) {
    while if_id.entries.len() < width && !*halted {
        let pc = cpu.pc;

        if cpu.at_end() {
            tracing::debug!(pc, "IF  end of program, halt marker fetched");
            if_id.entries.push(IfIdEntry {
                pc,
                halt: true,
                ..IfIdEntry::default()
            });
            *halted = true;
            break;
        }

        let Ok(inst) = cpu.mem.read_word(pc) else {
            tracing::debug!(pc, "IF  fetch outside memory");
            if_id.entries.push(IfIdEntry {
                pc,
                fault: Some(Fault::FetchOutOfBounds { pc }),
                ..IfIdEntry::default()
            });
            *halted = true;
            break;
        };

        let pred_taken = is_conditional_branch(inst) && predictor.predict_branch(pc);
        tracing::trace!(pc, inst, pred_taken, "IF");
        if_id.entries.push(IfIdEntry {
            pc,
            inst,
            pred_taken,
            pred_history: predictor.history(),
            fault: None,
            halt: false,
        });

        if pred_taken {
            cpu.pc = branch_target(pc, inst);
            break;
        }
        cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);
    }
}
