//! Static Branch Predictor.
//!
//! Implements a simple "Always Not Taken" prediction policy. Fetch always
//! continues at `PC + 4`, so every taken branch costs a flush. This is the
//! plain pipelined core's behaviour.

use super::BranchPredictor;

/// Static Branch Predictor structure.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    /// Always predicts conditional branches as not taken.
    fn predict_branch(&self, _pc: u32) -> bool {
        false
    }

    /// Does not maintain any direction history.
    fn update_branch(&mut self, _pc: u32, _taken: bool, _history: u32) {}
}
