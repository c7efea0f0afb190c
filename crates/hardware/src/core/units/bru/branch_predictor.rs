//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that all branch prediction
//! implementations must adhere to. Only conditional branches (`beq`, `bne`)
//! are predicted; jumps are resolved in Execute and always redirect.

/// Trait for branch prediction algorithms.
///
/// Defines the interface that all branch prediction implementations
/// must provide for predicting branch directions and training on outcomes.
pub trait BranchPredictor {
    /// Predicts whether a conditional branch will be taken.
    ///
    /// Called from Fetch. Must not change predictor state, so that a
    /// prediction for a wrong-path instruction leaves no trace.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    ///
    /// # Returns
    ///
    /// `true` if the branch is predicted taken.
    fn predict_branch(&self, pc: u32) -> bool;

    /// Global history the next prediction will be made with.
    ///
    /// Fetch records it next to the prediction and hands it back to
    /// [`update_branch`](Self::update_branch), so training reaches the counter
    /// that was read even when other branches resolved in between.
    /// Predictors without history return 0.
    fn history(&self) -> u32 {
        0
    }

    /// Updates the branch predictor with the actual branch outcome.
    ///
    /// Called from Execute when a non-squashed conditional branch resolves.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    /// * `taken` - Whether the branch was actually taken
    /// * `history` - The value of [`history`](Self::history) at prediction time
    fn update_branch(&mut self, pc: u32, taken: bool, history: u32);
}
