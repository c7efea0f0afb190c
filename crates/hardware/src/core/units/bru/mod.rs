//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction predictors available to the
//! pipelined cores: static not-taken and gshare.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait and common functionality.
pub mod branch_predictor;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Static branch predictor (always not-taken).
pub mod static_bp;

use self::{gshare::GSharePredictor, static_bp::StaticPredictor};
use crate::config::{BranchPredictor as BpType, Config};

/// Enum wrapper for static dispatch of Branch Predictors.
/// This avoids vtable lookups in the critical fetch loop.
#[derive(Clone, Debug)]
pub enum BranchPredictorWrapper {
    /// Always not-taken.
    Static(StaticPredictor),
    /// Global-history XOR PC indexed counters.
    GShare(GSharePredictor),
}

impl BranchPredictorWrapper {
    /// Creates a new branch predictor wrapper based on configuration.
    pub fn new(config: &Config) -> Self {
        match config.branch_predictor() {
            BpType::Static => Self::Static(StaticPredictor::new()),
            BpType::GShare => Self::GShare(GSharePredictor::new(config.pipeline.history_bits)),
        }
    }

    /// Returns the gshare state, if this is a gshare predictor.
    pub const fn as_gshare(&self) -> Option<&GSharePredictor> {
        match self {
            Self::GShare(bp) => Some(bp),
            Self::Static(_) => None,
        }
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    #[inline(always)]
    fn predict_branch(&self, pc: u32) -> bool {
        match self {
            Self::Static(bp) => bp.predict_branch(pc),
            Self::GShare(bp) => bp.predict_branch(pc),
        }
    }

    #[inline(always)]
    fn history(&self) -> u32 {
        match self {
            Self::Static(bp) => bp.history(),
            Self::GShare(bp) => bp.history(),
        }
    }

    #[inline(always)]
    fn update_branch(&mut self, pc: u32, taken: bool, history: u32) {
        match self {
            Self::Static(bp) => bp.update_branch(pc, taken, history),
            Self::GShare(bp) => bp.update_branch(pc, taken, history),
        }
    }
}
