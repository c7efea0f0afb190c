//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! The Branch History Table (BHT) holds `2^history_bits` two-bit saturating
//! counters, all starting weakly not-taken. It is indexed with the low bits of
//! the branch's byte address XORed with the Global History Register (GHR). The
//! newest outcome enters the GHR at its most significant bit.
//!
//! # Performance
//!
//! - **Time Complexity:** `predict()` and `update()` are O(1)
//! - **Space Complexity:** O(2^N) where N is the history length (8 bits = 256 counters)
//! - **Best Case:** Loop-closing branches and branches correlated with recent outcomes
//! - **Worst Case:** Data-dependent branches with no history correlation

use super::BranchPredictor;

/// Highest value of a two-bit counter (strongly taken).
pub const COUNTER_MAX: u8 = 3;
/// Counters at or above this value predict taken.
pub const TAKEN_THRESHOLD: u8 = 2;
/// Reset value of every counter (weakly not-taken).
pub const COUNTER_INIT: u8 = 1;
/// Shortest supported global history.
pub const MIN_HISTORY_BITS: usize = 1;
/// Longest supported global history (64 Ki counters).
pub const MAX_HISTORY_BITS: usize = 16;

/// GShare Predictor structure.
#[derive(Clone, Debug)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: u32,
    /// Number of valid bits in the GHR.
    history_bits: u32,
    /// Branch History Table of 2-bit saturating counters.
    bht: Vec<u8>,
}

impl GSharePredictor {
    /// Creates a new GShare Predictor.
    ///
    /// # Arguments
    ///
    /// * `history_bits` - GHR width; the table has `2^history_bits` entries.
    ///   Clamped to `MIN_HISTORY_BITS..=MAX_HISTORY_BITS`.
    pub fn new(history_bits: usize) -> Self {
        let history_bits = history_bits.clamp(MIN_HISTORY_BITS, MAX_HISTORY_BITS);
        Self {
            ghr: 0,
            history_bits: history_bits as u32,
            bht: vec![COUNTER_INIT; 1 << history_bits],
        }
    }

    /// Mask covering the table index and the GHR.
    const fn mask(&self) -> u32 {
        (1 << self.history_bits) - 1
    }

    /// Calculates the index into the Branch History Table.
    ///
    /// Computes the XOR of the low PC bits and the Global History Register.
    pub const fn index(&self, pc: u32) -> usize {
        self.index_with(pc, self.ghr)
    }

    /// Index for `pc` under an earlier GHR value.
    pub const fn index_with(&self, pc: u32, history: u32) -> usize {
        ((pc ^ history) & self.mask()) as usize
    }

    /// Counter that the next prediction for `pc` would consult.
    pub fn counter(&self, pc: u32) -> u8 {
        self.bht[self.index(pc)]
    }

    /// The whole Branch History Table.
    pub fn counters(&self) -> &[u8] {
        &self.bht
    }
}

impl BranchPredictor for GSharePredictor {
    /// Predicts branch direction.
    ///
    /// Returns true if the 2-bit counter at the hashed index is 2 or 3 (Taken).
    fn predict_branch(&self, pc: u32) -> bool {
        self.counter(pc) >= TAKEN_THRESHOLD
    }

    /// Current contents of the Global History Register.
    fn history(&self) -> u32 {
        self.ghr
    }

    /// Updates the predictor with the actual branch outcome.
    ///
    /// Trains the counter the prediction was read from, then shifts the
    /// outcome into the Global History Register.
    fn update_branch(&mut self, pc: u32, taken: bool, history: u32) {
        let idx = self.index_with(pc, history);
        let counter = self.bht[idx];

        if taken && counter < COUNTER_MAX {
            self.bht[idx] += 1;
        } else if !taken && counter > 0 {
            self.bht[idx] -= 1;
        }

        self.ghr = ((self.ghr >> 1) | (u32::from(taken) << (self.history_bits - 1))) & self.mask();
    }
}
