//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, committed instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Branch prediction:** Correct and incorrect conditional-branch predictions.
//! 4. **Stalls and flushes:** Load-use stall cycles, inter-lane stalls, redirects and
//!    squashed instructions.

use std::time::Instant;

use serde::Serialize;

use crate::core::pipeline::signals::ControlSignals;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions (`j`, `jal`, `jr`) retired.
    pub inst_jump: u64,
    /// Count of ALU instructions retired.
    pub inst_alu: u64,

    /// Number of conditional-branch predictions that were correct.
    pub branch_predictions: u64,
    /// Number of conditional-branch predictions that were wrong.
    pub branch_mispredictions: u64,

    /// Fetch redirects (mispredictions plus jumps); each flushes IF/ID and ID/EX.
    pub flushes: u64,
    /// Wrong-path instructions discarded by flushes.
    pub squashed: u64,
    /// Cycles in which a load-use hazard held an instruction in Decode.
    pub stalls_data: u64,
    /// Cycles in which a younger lane waited on an older lane of its bundle.
    pub stalls_inter_lane: u64,
    /// Cycles in which 0, 1 or 2 lanes left Decode.
    pub issued_lanes: [u64; 3],
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            branch_predictions: 0,
            branch_mispredictions: 0,
            flushes: 0,
            squashed: 0,
            stalls_data: 0,
            stalls_inter_lane: 0,
            issued_lanes: [0; 3],
        }
    }
}

impl SimStats {
    /// Records a committed instruction in the retirement count and the mix.
    pub const fn record_commit(&mut self, ctrl: &ControlSignals, jump_reg: bool) {
        self.instructions_retired += 1;
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
        } else if ctrl.jump || jump_reg {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Records how many lanes Decode issued this cycle.
    pub fn record_issue(&mut self, lanes: usize) {
        self.issued_lanes[lanes.min(self.issued_lanes.len() - 1)] += 1;
    }

    /// Cycles per instruction; `0.0` before anything has committed.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Instructions per cycle; `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Fraction of conditional branches predicted correctly, in percent.
    pub fn branch_accuracy(&self) -> f64 {
        let total = self.branch_predictions + self.branch_mispredictions;
        if total == 0 {
            0.0
        } else {
            self.branch_predictions as f64 / total as f64 * 100.0
        }
    }

    /// Serializes the counters and derived metrics as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Some(map) = value.as_object_mut() {
            let _ = map.insert("cpi".into(), self.cpi().into());
            let _ = map.insert("ipc".into(), self.ipc().into());
        }
        serde_json::to_string_pretty(&value)
    }

    /// Prints selected statistics sections to stdout.
    ///
    /// Recognised sections are `summary`, `instruction_mix`, `branch_predictor`
    /// and `pipeline`; an empty slice prints all of them.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("MIPS PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", self.ipc());
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for (name, count) in [
                ("alu", self.inst_alu),
                ("load", self.inst_load),
                ("store", self.inst_store),
                ("branch", self.inst_branch),
                ("jump", self.inst_jump),
            ] {
                println!(
                    "  op_type.{name:<15} {count} ({:.2}%)",
                    count as f64 / instr as f64 * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("branch_predictor") {
            println!("BRANCH PREDICTION");
            println!("  bp.correct             {}", self.branch_predictions);
            println!("  bp.mispredict          {}", self.branch_mispredictions);
            println!("  bp.accuracy            {:.2}%", self.branch_accuracy());
            println!("----------------------------------------------------------");
        }
        if want("pipeline") {
            println!("PIPELINE");
            println!("  pipeline.flushes       {}", self.flushes);
            println!("  pipeline.squashed      {}", self.squashed);
            println!(
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                self.stalls_data as f64 / cyc as f64 * 100.0
            );
            println!(
                "  stalls.inter_lane      {} ({:.2}%)",
                self.stalls_inter_lane,
                self.stalls_inter_lane as f64 / cyc as f64 * 100.0
            );
            for (lanes, count) in self.issued_lanes.iter().enumerate() {
                println!("  issue.lanes_{lanes}          {count}");
            }
            println!("==========================================================");
        }
    }
}
