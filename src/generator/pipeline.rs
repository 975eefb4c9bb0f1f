use super::params::PuzzleParams;
use crate::clues::derive_clues;
use crate::diagnostics::{GenerationTrace, InputDescriptor, PuzzleReport, TimingBreakdown};
use crate::error::NonogramError;
use crate::image::ImageRgb8;
use crate::quantize::{quantize, Placement};
use crate::types::{GridDims, Puzzle};
use log::{debug, warn};
use std::time::Instant;

pub struct PuzzleGenerator {
    params: PuzzleParams,
}

impl PuzzleGenerator {
    pub fn new(params: PuzzleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PuzzleParams {
        &self.params
    }

    /// Change the target grid size for subsequent runs.
    pub fn set_dims(&mut self, dims: GridDims) {
        self.params.dims = dims;
    }

    /// Quantize `image` and derive its clues.
    pub fn generate(&self, image: ImageRgb8<'_>) -> Result<Puzzle, NonogramError> {
        let grid = quantize(image, self.params.dims, &self.params.quantize)?;
        Ok(Puzzle::from_grid(grid))
    }

    /// Like [`generate`](Self::generate) but also returns a trace of the run.
    pub fn generate_with_report(
        &self,
        image: ImageRgb8<'_>,
    ) -> Result<PuzzleReport, NonogramError> {
        let started = Instant::now();
        let dims = self.params.dims;
        let mut timings = TimingBreakdown::default();
        let grid = timings.time("quantize", || {
            quantize(image.clone(), dims, &self.params.quantize)
        })?;
        let input = InputDescriptor::from_image(&image, dims.columns(), dims.rows());
        let placement = Placement::fit(image.w, image.h, dims.columns(), dims.rows());

        let filled_cells = grid.filled_count();
        if filled_cells == 0 {
            warn!(
                "PuzzleGenerator: no filled cells at {}x{}; every clue is [0]",
                dims.columns(),
                dims.rows()
            );
        } else if filled_cells == dims.cell_count() {
            warn!(
                "PuzzleGenerator: every cell filled at {}x{}",
                dims.columns(),
                dims.rows()
            );
        }

        let (row_clues, column_clues) = timings.time("clues", || derive_clues(&grid));

        let timings = timings.finish(started);
        debug!(
            "PuzzleGenerator::generate {}x{} image -> {}x{} grid filled={} total={:.3}ms stages={:?}",
            image.w,
            image.h,
            dims.columns(),
            dims.rows(),
            filled_cells,
            timings.total_ms,
            timings.stages
        );

        let trace = GenerationTrace {
            input,
            quantize: self.params.quantize,
            placement: placement.into(),
            filled_cells,
            fill_ratio: grid.fill_ratio(),
            blank_rows: row_clues.iter().filter(|c| c.is_blank()).count(),
            blank_columns: column_clues.iter().filter(|c| c.is_blank()).count(),
            timings,
        };
        Ok(PuzzleReport {
            puzzle: Puzzle {
                grid,
                row_clues,
                column_clues,
            },
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::io::RgbImageU8;
    use crate::image::Rgb;

    #[test]
    fn report_describes_the_run() {
        let img = RgbImageU8::from_fn(8, 4, |x, _| if x < 4 { Rgb::BLACK } else { Rgb::WHITE });
        let generator = PuzzleGenerator::new(PuzzleParams {
            dims: GridDims::new(8, 8).unwrap(),
            ..Default::default()
        });
        let report = generator.generate_with_report(img.as_view()).unwrap();
        let trace = &report.trace;
        assert_eq!((trace.input.width, trace.input.height), (8, 4));
        assert_eq!(trace.placement.offset_y, 2.0);
        assert!((trace.input.mean_brightness - 127.5).abs() < 1e-3);
        assert_eq!(trace.filled_cells, report.puzzle.grid.filled_count());
        assert_eq!(trace.blank_columns, 4);
        assert_eq!(trace.blank_rows, 4);
        assert!(trace.timings.stage_ms("quantize").is_some());
        assert!(trace.timings.stage_ms("clues").is_some());
        assert_eq!(report.puzzle, generator.generate(img.as_view()).unwrap());
    }

    #[test]
    fn changing_dims_regenerates_from_scratch() {
        let img = RgbImageU8::from_fn(1, 1, |_, _| Rgb::BLACK);
        let mut generator = PuzzleGenerator::new(PuzzleParams::default());
        let small = generator.generate(img.as_view()).unwrap();
        assert_eq!(small.dims(), (10, 10));

        generator.set_dims(GridDims::new(7, 12).unwrap());
        let tall = generator.generate(img.as_view()).unwrap();
        assert_eq!(tall.dims(), (7, 12));
        assert_eq!(tall.row_clues.len(), 12);
        assert_eq!(tall.column_clues.len(), 7);
    }
}
