use crate::diagnostics::TimingBreakdown;
use crate::image::{ImageRgb8, ImageView};
use crate::quantize::{Brightness, Placement, QuantizeOptions};
use crate::types::Puzzle;
use serde::Serialize;

/// Result produced by
/// [`PuzzleGenerator::generate_with_report`](crate::PuzzleGenerator::generate_with_report).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleReport {
    pub puzzle: Puzzle,
    pub trace: GenerationTrace,
}

/// What the generator saw and how long each stage took.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationTrace {
    pub input: InputDescriptor,
    pub quantize: QuantizeOptions,
    pub placement: PlacementDescriptor,
    pub filled_cells: usize,
    pub fill_ratio: f32,
    pub blank_rows: usize,
    pub blank_columns: usize,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub columns: usize,
    pub rows: usize,
    /// Mean of `(r + g + b) / 3` over the source image.
    pub mean_brightness: f32,
}

impl InputDescriptor {
    pub fn from_image(image: &ImageRgb8<'_>, columns: usize, rows: usize) -> Self {
        let sum = image.fold_pixels(0.0f64, |acc, p| acc + Brightness::Mean.of(p) as f64);
        let denom = (image.w * image.h).max(1) as f64;
        Self {
            width: image.w,
            height: image.h,
            columns,
            rows,
            mean_brightness: (sum / denom) as f32,
        }
    }
}

/// Serializable copy of the fit-to-box placement.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDescriptor {
    pub scale: f32,
    pub scaled_width: f32,
    pub scaled_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl From<Placement> for PlacementDescriptor {
    fn from(p: Placement) -> Self {
        Self {
            scale: p.scale,
            scaled_width: p.scaled_w,
            scaled_height: p.scaled_h,
            offset_x: p.off_x,
            offset_y: p.off_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    #[test]
    fn mean_brightness_ignores_row_padding() {
        let data = [Rgb::BLACK, Rgb::WHITE, Rgb::gray(7), Rgb::WHITE, Rgb::BLACK];
        let padded = ImageRgb8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let input = InputDescriptor::from_image(&padded, 5, 5);
        assert!((input.mean_brightness - 127.5).abs() < 1e-3);
        assert_eq!((input.width, input.height), (2, 2));
    }
}
