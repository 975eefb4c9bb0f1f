//! Image → binary grid quantization.
//!
//! The image is scaled uniformly to fit a `columns × rows` canvas (one canvas
//! pixel per grid cell), centred, and drawn over a white background with the
//! selected [`Resample`] filter. Each canvas pixel is then reduced to a
//! brightness value and thresholded: cells strictly darker than the
//! threshold (128 by default) are filled. Letterboxed regions therefore read
//! as white and never produce filled cells.
//!
//! Rows are independent, so they are quantized on the rayon pool unless
//! [`QuantizeOptions::parallel`] is off; the result does not depend on it.

pub mod options;
pub mod resample;


pub use options::{Brightness, QuantizeOptions, Resample};
pub use resample::{CanvasSampler, Placement};

use crate::error::NonogramError;
use crate::image::ImageRgb8;
use crate::types::{GridDims, NonogramCell, NonogramGrid};
use log::debug;
use rayon::prelude::*;

/// Quantize `image` into a `dims.rows() × dims.columns()` grid.
///
/// Fails only with [`NonogramError::DegenerateImage`] when the view has no
/// pixels or its buffer is shorter than its declared size.
pub fn quantize(
    image: ImageRgb8<'_>,
    dims: GridDims,
    options: &QuantizeOptions,
) -> Result<NonogramGrid, NonogramError> {
    image.validate()?;
    let (columns, rows) = (dims.columns(), dims.rows());
    let placement = Placement::fit(image.w, image.h, columns, rows);
    debug!(
        "quantize: {}x{} -> {}x{} scale={:.4} offset=({:.2}, {:.2}) filter={:?}",
        image.w,
        image.h,
        columns,
        rows,
        placement.scale,
        placement.off_x,
        placement.off_y,
        options.resample
    );

    let sampler = CanvasSampler::new(&image, &placement, columns, rows, options.resample);
    let fill_row = |(y, row): (usize, &mut [NonogramCell])| {
        for (x, cell) in row.iter_mut().enumerate() {
            let color = sampler.sample(x, y);
            *cell = NonogramCell {
                filled: options.brightness.of(color) < options.threshold,
                source_color: color,
            };
        }
    };

    let mut cells = vec![NonogramCell::EMPTY; dims.cell_count()];
    if options.parallel {
        cells.par_chunks_mut(columns).enumerate().for_each(fill_row);
    } else {
        cells.chunks_mut(columns).enumerate().for_each(fill_row);
    }

    Ok(NonogramGrid::from_cells(dims, cells))
}

/// [`quantize`] with default options: bilinear, unweighted mean, cutoff 128.
pub fn quantize_default(
    image: ImageRgb8<'_>,
    dims: GridDims,
) -> Result<NonogramGrid, NonogramError> {
    quantize(image, dims, &QuantizeOptions::default())
}
