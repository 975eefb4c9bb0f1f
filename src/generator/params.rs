//! Parameter types configuring the generator.

use crate::quantize::QuantizeOptions;
use crate::types::GridDims;
use serde::{Deserialize, Serialize};

/// Generator-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleParams {
    /// Target grid size. Defaults to 10×10.
    pub dims: GridDims,
    /// Resampling and thresholding knobs.
    pub quantize: QuantizeOptions,
}
