//! Core trait definition for steppable algorithms.
//!
//! To plug an algorithm into the playback driver, implement
//! [`Algorithm`] for a struct that captures its problem instance
//! (array, graph, strings, bounds).
//!
//! The trait encodes the contract the rest of the crate is built on:
//! - `produce` runs the algorithm synchronously to completion and
//!   returns the full ordered snapshot sequence.
//! - `extract` derives the final user-facing answer from that
//!   sequence (and the instance itself, for backtracking).
//! - `display_array` supplies the fallback 1-D view shown whenever a
//!   step carries no array of its own.
//!
//! The playback driver orchestrates timed replay using only these
//! primitives; it never inspects instance data directly.

use crate::answer::Answer;
use crate::step::{Family, Step};

/// A fixed problem instance that can be executed stepwise.
///
/// Requirements:
/// - `produce` is deterministic and side-effect free: calling it twice
///   on the same instance yields structurally identical sequences.
/// - Every step owns deep copies of its snapshot data; nothing in the
///   returned sequence aliases producer working state.
/// - `produce` never panics for any constructible instance. Degenerate
///   inputs yield a valid, possibly empty, sequence.
/// - `extract` never panics; inputs with no meaningful result map to
///   [`Answer::NotFound`].
pub trait Algorithm {
    /// Human-readable name, used by diagnostics and demos.
    fn name(&self) -> &'static str;

    /// Family tag the renderer dispatches on.
    fn family(&self) -> Family;

    /// Run to completion, recording one step per meaningful event.
    fn produce(&self) -> Vec<Step>;

    /// Derive the final answer from the recorded sequence.
    fn extract(&self, steps: &[Step]) -> Answer;

    /// Fallback 1-D display data for steps without an `array` field.
    fn display_array(&self) -> Vec<i64> {
        Vec::new()
    }
}
