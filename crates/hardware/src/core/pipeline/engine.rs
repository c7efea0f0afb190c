//! Pipelined execution engine and engine dispatch.
//!
//! This module ties the five stages together into a synchronous state machine:
//! 1. **`PipelineEngine`**: the latches, the branch predictor, and the per-cycle
//!    stage ordering with stall and flush control, for widths 1 and 2.
//! 2. **`EngineDispatch`**: enum dispatch between the single-cycle and pipelined
//!    engines so the simulator can store either without a trait object.
//!
//! Stages run in reverse order (WB, MEM, EX, ID, IF) within a cycle. Each stage
//! consumes the latch the previous cycle left for it and produces the next one,
//! which gives every latch "read old, write new" semantics without shadow copies.

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::single_cycle::SingleCycleEngine;
use crate::core::units::bru::BranchPredictorWrapper;

/// Outcome of advancing an engine by one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The program has more work in flight.
    Running,
    /// The end of the program was reached; no further cycles are needed.
    Halted,
}

/// Five-stage in-order pipeline of configurable width.
#[derive(Clone, Debug)]
pub struct PipelineEngine {
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// Direction predictor consulted by Fetch and trained by Execute.
    pub predictor: BranchPredictorWrapper,
    width: usize,
    strict: bool,
    fetch_halted: bool,
}

impl PipelineEngine {
    /// Creates an empty pipeline from the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            predictor: BranchPredictorWrapper::new(config),
            width: config.width(),
            strict: config.general.strict_decode,
            fetch_halted: false,
        }
    }

    /// Number of lanes per stage.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` when no instruction is in flight.
    pub fn is_drained(&self) -> bool {
        self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }

    /// Advances the pipeline by one cycle.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Architectural state.
    ///
    /// # Returns
    ///
    /// `StepOutcome::Halted` once the end-of-program marker commits. Committed
    /// faults and out-of-range data accesses are errors.
    pub fn step(&mut self, cpu: &mut Cpu) -> Result<StepOutcome, SimError> {
        cpu.stats.cycles += 1;

        let mem_wb = std::mem::take(&mut self.mem_wb);
        if writeback_stage(cpu, &mem_wb)? == StepOutcome::Halted {
            return Ok(StepOutcome::Halted);
        }

        let ex_mem = std::mem::take(&mut self.ex_mem);
        let new_mem_wb = memory_stage(cpu, &ex_mem)?;

        let id_ex = std::mem::take(&mut self.id_ex);
        let executed = execute_stage(cpu, &id_ex, &mut self.predictor);

        if let Some(target) = executed.redirect {
            let squashed = self.if_id.entries.len() + executed.squashed;
            tracing::debug!(
                cycle = cpu.stats.cycles,
                target,
                squashed,
                "flush and redirect"
            );
            cpu.stats.flushes += 1;
            cpu.stats.squashed += squashed as u64;
            cpu.stats.record_issue(0);
            self.if_id.flush();
            self.ex_mem = executed.ex_mem;
            self.mem_wb = new_mem_wb;
            cpu.pc = target;
            self.fetch_halted = false;
            return Ok(StepOutcome::Running);
        }

        let if_id = std::mem::take(&mut self.if_id);
        let decoded = decode_stage(cpu, &if_id, &executed.ex_mem, &new_mem_wb, self.strict);
        if decoded.load_use_stall {
            cpu.stats.stalls_data += 1;
        }
        if decoded.inter_lane_stall {
            cpu.stats.stalls_inter_lane += 1;
        }
        cpu.stats.record_issue(decoded.issued.entries.len());

        self.mem_wb = new_mem_wb;
        self.ex_mem = executed.ex_mem;
        self.id_ex = decoded.issued;
        self.if_id = decoded.held;

        fetch_stage(
            cpu,
            &mut self.if_id,
            &self.predictor,
            self.width,
            &mut self.fetch_halted,
        );

        Ok(StepOutcome::Running)
    }
}

/// Engine storage for the simulator.
#[derive(Clone, Debug)]
pub enum EngineDispatch {
    /// One instruction per cycle, no overlap.
    SingleCycle(SingleCycleEngine),
    /// Five-stage pipeline (scalar or dual-issue).
    Pipelined(Box<PipelineEngine>),
}

impl EngineDispatch {
    /// Builds the engine selected by the configuration.
    ///
    /// # Returns
    ///
    /// `SimError::UnsupportedProcessor` for the out-of-order variants.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let processor = config.general.processor;
        if !processor.is_implemented() {
            return Err(SimError::UnsupportedProcessor(processor));
        }
        Ok(if processor.is_pipelined() {
            Self::Pipelined(Box::new(PipelineEngine::new(config)))
        } else {
            Self::SingleCycle(SingleCycleEngine::new(config))
        })
    }

    /// Advances the selected engine by one cycle.
    pub fn step(&mut self, cpu: &mut Cpu) -> Result<StepOutcome, SimError> {
        match self {
            Self::SingleCycle(e) => e.step(cpu),
            Self::Pipelined(p) => p.step(cpu),
        }
    }

    /// Returns the pipeline, if this is a pipelined engine.
    pub fn pipeline(&self) -> Option<&PipelineEngine> {
        match self {
            Self::Pipelined(p) => Some(p),
            Self::SingleCycle(_) => None,
        }
    }
}
