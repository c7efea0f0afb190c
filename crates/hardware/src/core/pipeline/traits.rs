//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage buffers. It provides
//! methods for flushing and status checking, used by the engine on redirects
//! and by tests inspecting pipeline state.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages. They support
/// flushing and status checks.
pub trait PipelineLatch {
    /// Clears all entries in the latch.
    ///
    /// Called when a branch misprediction or jump redirects fetch.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds only bubbles, `false` otherwise.
    fn is_empty(&self) -> bool;

    /// Checks if the latch contains any instruction carrying a fault.
    ///
    /// # Returns
    ///
    /// `true` if any entry in the latch has a pending fault.
    fn has_fault(&self) -> bool;
}
