//! Simulator: owns both the CPU and the engine side-by-side.
//!
//! Keeping the engine next to the `Cpu` instead of inside it lets each cycle
//! borrow the architectural state mutably while the engine mutates its latches.

use std::fmt;

use crate::common::constants::NUM_REGS;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::engine::{EngineDispatch, StepOutcome};
use crate::sim::loader::Program;

/// Architectural state observed at the end of a cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleSnapshot {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// Fetch PC after the cycle.
    pub pc: u32,
    /// Register values after the cycle.
    pub regs: [u32; NUM_REGS],
}

impl fmt::Display for CycleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CYCLE{}", self.cycle)?;
        writeln!(f, "PC: {:#x}", self.pc)?;
        for (i, value) in self.regs.iter().enumerate() {
            writeln!(f, "R[{i}]: {}", *value as i32)?;
        }
        Ok(())
    }
}

/// Totals reported at the end of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Cycles elapsed.
    pub cycles: u64,
    /// Instructions committed.
    pub instructions: u64,
    /// Cycles per instruction.
    pub cpi: f64,
}

/// Top-level simulator: CPU architectural state + execution engine.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    /// Engine selected by the configuration.
    pub engine: EngineDispatch,
    max_cycles: Option<u64>,
    halted: bool,
}

impl Simulator {
    /// Creates a simulator with `program` installed at address 0.
    ///
    /// # Returns
    ///
    /// `SimError::InvalidConfig` or `SimError::UnsupportedProcessor` for a
    /// bad configuration, `SimError::ProgramTooLarge` if the program does not fit.
    pub fn new(config: &Config, program: &Program) -> Result<Self, SimError> {
        config.validate()?;
        let engine = EngineDispatch::new(config)?;
        let mut cpu = Cpu::new(config, program.end_pc);
        program.install(&mut cpu.mem)?;
        tracing::info!(
            processor = %config.general.processor,
            width = config.width(),
            end_pc = program.end_pc,
            "simulator ready"
        );
        Ok(Self {
            cpu,
            engine,
            max_cycles: config.general.max_cycles,
            halted: false,
        })
    }

    /// Returns `true` once the program has finished.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Does nothing once the program has halted.
    pub fn tick(&mut self) -> Result<StepOutcome, SimError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }
        let outcome = self.engine.step(&mut self.cpu)?;
        self.halted = outcome == StepOutcome::Halted;
        Ok(outcome)
    }

    /// Captures the current cycle number, PC and registers.
    pub const fn snapshot(&self) -> CycleSnapshot {
        CycleSnapshot {
            cycle: self.cpu.stats.cycles,
            pc: self.cpu.pc,
            regs: self.cpu.regs.snapshot(),
        }
    }

    /// Runs the program to completion.
    ///
    /// # Arguments
    ///
    /// * `on_cycle` - Called after every cycle that advanced the clock.
    ///
    /// # Returns
    ///
    /// The run totals, or the error that stopped it (including
    /// `SimError::CycleLimit` when `max_cycles` is exceeded).
    pub fn run(&mut self, mut on_cycle: impl FnMut(&CycleSnapshot)) -> Result<RunSummary, SimError> {
        while !self.halted {
            let cycles = self.cpu.stats.cycles;
            if let Some(limit) = self.max_cycles.filter(|&limit| cycles >= limit) {
                return Err(SimError::CycleLimit { cycles: limit });
            }
            let before = self.cpu.stats.cycles;
            let _ = self.tick()?;
            if self.cpu.stats.cycles != before {
                on_cycle(&self.snapshot());
            }
        }

        let summary = RunSummary {
            cycles: self.cpu.stats.cycles,
            instructions: self.cpu.stats.instructions_retired,
            cpi: self.cpu.stats.cpi(),
        };
        tracing::info!(
            cycles = summary.cycles,
            instructions = summary.instructions,
            cpi = summary.cpi,
            "run finished"
        );
        Ok(summary)
    }
}
