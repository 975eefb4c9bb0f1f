#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod clues;
pub mod error;
pub mod generator;
pub mod image;
pub mod quantize;
pub mod types;

// Tooling around the core pipeline.
pub mod config;
pub mod diagnostics;
pub mod render;

// --- High-level re-exports -------------------------------------------------

// Main entry points: generator + results.
pub use crate::error::NonogramError;
pub use crate::generator::{PuzzleGenerator, PuzzleParams};
pub use crate::types::{ClueSequence, GridDims, NonogramCell, NonogramGrid, Puzzle};

// Free functions for callers that want a single stage.
pub use crate::clues::{derive_clues, line_clue};
pub use crate::quantize::{quantize, quantize_default, QuantizeOptions};

// Diagnostics returned by the generator.
pub use crate::diagnostics::{GenerationTrace, PuzzleReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use nonogram_forge::prelude::*;
///
/// # fn main() -> Result<(), NonogramError> {
/// let pixels = vec![Rgb::BLACK];
/// let image = ImageRgb8::new(1, 1, &pixels);
/// let puzzle = PuzzleGenerator::new(PuzzleParams {
///     dims: GridDims::new(5, 5)?,
///     ..Default::default()
/// })
/// .generate(image)?;
/// assert!(puzzle.row_clues.iter().all(|c| c.as_slice() == [5]));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, Rgb};
    pub use crate::quantize::{Brightness, QuantizeOptions, Resample};
    pub use crate::{GridDims, NonogramError, Puzzle, PuzzleGenerator, PuzzleParams};
}
