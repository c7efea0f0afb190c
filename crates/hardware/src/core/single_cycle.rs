//! Single-cycle reference engine.
//!
//! Executes one whole instruction per cycle with no overlap, so there are no
//! hazards to detect and nothing to forward. It shares the decoder, the
//! execute datapath ([`evaluate`]) and the LSU with the pipelined engine, and
//! serves as the architectural baseline the pipelines are compared against.

use crate::common::error::{Fault, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::engine::StepOutcome;
use crate::core::pipeline::latches::dest_reg;
use crate::core::pipeline::stages::execute::evaluate;
use crate::core::pipeline::stages::writeback::is_jump_register;
use crate::core::units::lsu::Lsu;
use crate::isa::decode::{decode_instruction, decode_or_nop};
use crate::isa::instruction::InstructionBits;

/// One-instruction-per-cycle engine.
#[derive(Clone, Copy, Debug)]
pub struct SingleCycleEngine {
    strict: bool,
}

impl SingleCycleEngine {
    /// Creates the engine from the configuration.
    pub const fn new(config: &Config) -> Self {
        Self {
            strict: config.general.strict_decode,
        }
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// `StepOutcome::Halted` when the PC reaches the end of the program. A PC
    /// already at the end costs no cycle. Faults are raised immediately.
    pub fn step(&self, cpu: &mut Cpu) -> Result<StepOutcome, SimError> {
        if cpu.at_end() {
            return Ok(StepOutcome::Halted);
        }
        cpu.stats.cycles += 1;

        let pc = cpu.pc;
        let inst = cpu
            .mem
            .read_word(pc)
            .map_err(|_| Fault::FetchOutOfBounds { pc })?;
        let decoded = if self.strict {
            decode_instruction(pc, inst)?
        } else {
            decode_or_nop(pc, inst)
        };
        let (ctrl, alu) = (decoded.ctrl, decoded.alu);

        let (rv1, rv2) = cpu.regs.access(inst.rs(), inst.rt(), None);
        let ev = evaluate(&ctrl, &alu, inst, pc, rv1, rv2);

        let result = if ctrl.mem_read {
            Lsu::load(&cpu.mem, ev.value, ctrl.width, ctrl.signed_load)?
        } else {
            if ctrl.mem_write {
                Lsu::store(&mut cpu.mem, ev.value, ctrl.width, ev.store_data)?;
            }
            ev.value
        };

        if ctrl.reg_write {
            let _ = cpu.regs.access(0, 0, Some((dest_reg(&ctrl, inst), result)));
        }
        cpu.stats.record_commit(&ctrl, is_jump_register(inst));
        tracing::trace!(pc, inst, result, next_pc = ev.next_pc, "single-cycle");

        cpu.pc = ev.next_pc;
        Ok(if cpu.at_end() {
            StepOutcome::Halted
        } else {
            StepOutcome::Running
        })
    }
}
