//! Puzzle generator running the full image → grid → clues pipeline.
//!
//! Overview
//! - Validates the image view and fits it into the configured grid size.
//! - Quantizes it into a binary grid ([`crate::quantize`]).
//! - Derives row and column clues ([`crate::clues`]).
//!
//! Every call recomputes everything from scratch. The generator keeps no
//! state between calls beyond its parameters, so changing the image or the
//! grid size simply means calling it again.
//!
//! Modules
//! - [`params`] – configuration consumed by the generator and the CLI.
//! - `pipeline` – the [`PuzzleGenerator`] implementation.

pub mod params;
mod pipeline;

pub use params::PuzzleParams;
pub use pipeline::PuzzleGenerator;
