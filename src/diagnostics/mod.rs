//! Diagnostics returned alongside a generated puzzle.
//!
//! [`PuzzleReport`] bundles the [`Puzzle`](crate::types::Puzzle) with a
//! [`GenerationTrace`] describing the input, the placement of the image on
//! the grid canvas, fill statistics and per-stage timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{GenerationTrace, InputDescriptor, PlacementDescriptor, PuzzleReport};
pub use timing::{StageTiming, TimingBreakdown};
