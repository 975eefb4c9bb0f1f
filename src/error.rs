//! Error type shared by the quantizer, the grid constructors and the
//! pipeline.
//!
//! Every variant describes a violated input precondition. Once a value of
//! [`GridDims`](crate::types::GridDims) or
//! [`NonogramGrid`](crate::types::NonogramGrid) exists, the algorithms that
//! consume it cannot fail.
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NonogramError {
    /// Requested grid size is outside the accepted bounds (or zero).
    #[error("grid dimensions {columns}x{rows} outside [{min}, {max}]")]
    InvalidDimensions {
        columns: usize,
        rows: usize,
        min: usize,
        max: usize,
    },
    /// Image has no pixels, or its buffer is shorter than its header claims.
    #[error("degenerate image {width}x{height}")]
    DegenerateImage { width: usize, height: usize },
    /// A grid row does not have the same number of cells as the first row,
    /// or has no cells at all.
    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}
