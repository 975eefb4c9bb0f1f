//! I/O helpers for RGB images, puzzle previews and JSON.
//!
//! - `load_rgb_image`: decode a PNG/JPEG/etc. into an owned RGB8 buffer.
//! - `save_grid_png`: draw a puzzle grid as a PNG, one square per cell.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgb8, Rgb};
use crate::types::NonogramGrid;
use image::{ImageBuffer, RgbImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Owned RGB8 buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl RgbImageU8 {
    /// Wrap tightly packed pixels. Returns `None` when `data` does not hold
    /// exactly `width * height` samples.
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8::new(self.width, self.height, &self.data)
    }
}

/// Load an image from disk and convert to 8-bit RGB. Alpha is composited
/// onto white so transparent regions read as background.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            let alpha = a as f32 / 255.0;
            let over = |c: u8| c as f32 * alpha + 255.0 * (1.0 - alpha);
            Rgb::from_f32([over(r), over(g), over(b)])
        })
        .collect();
    Ok(RgbImageU8 {
        width,
        height,
        data,
    })
}

/// Colouring used when drawing a grid preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// Filled cells black, empty cells white.
    #[default]
    Binary,
    /// Each cell painted with the colour it was quantized from.
    Source,
}

const GRID_LINE: Rgb = Rgb::new(160, 160, 160);

/// Render `grid` to a PNG with `cell_px` pixels per cell and 1-px grid lines.
pub fn save_grid_png(
    grid: &NonogramGrid,
    cell_px: usize,
    mode: PreviewMode,
    path: &Path,
) -> Result<(), String> {
    if grid.is_empty() {
        return Err(format!("Refusing to save empty grid to {}", path.display()));
    }
    let step = cell_px.max(1).saturating_add(1);
    let side = |cells: usize| {
        cells
            .checked_mul(step)
            .and_then(|px| px.checked_add(1))
            .and_then(|px| u32::try_from(px).ok())
    };
    let (width, height) = match (side(grid.columns()), side(grid.rows())) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(format!(
                "Failed to size preview for {}: {}x{} cells at {cell_px} px per cell",
                path.display(),
                grid.columns(),
                grid.rows()
            ))
        }
    };
    ensure_parent_dir(path)?;

    let out: RgbImage = ImageBuffer::from_fn(width, height, |px, py| {
        let (px, py) = (px as usize, py as usize);
        let color = if px % step == 0 || py % step == 0 {
            GRID_LINE
        } else {
            match grid.get(px / step, py / step) {
                Some(cell) => match mode {
                    PreviewMode::Binary if cell.filled => Rgb::BLACK,
                    PreviewMode::Binary => Rgb::WHITE,
                    PreviewMode::Source => cell.source_color,
                },
                None => GRID_LINE,
            }
        };
        image::Rgb([color.r, color.g, color.b])
    });
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_buffer_checks_length() {
        assert!(RgbImageU8::new(2, 2, vec![Rgb::WHITE; 3]).is_none());
        let img = RgbImageU8::new(2, 2, vec![Rgb::WHITE; 4]).unwrap();
        assert_eq!(img.as_view().stride, 2);
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = RgbImageU8::from_fn(3, 2, |x, y| Rgb::gray((y * 3 + x) as u8));
        let view = img.as_view();
        assert_eq!(view.get(2, 1), Rgb::gray(5));
        assert_eq!(view.get(0, 1), Rgb::gray(3));
    }

    #[test]
    fn oversized_preview_is_rejected_before_writing() {
        let grid = NonogramGrid::from_bools([[true, false], [false, true]]).unwrap();
        let dir = std::env::temp_dir().join(format!("nonogram_oversized_{}", std::process::id()));
        let path = dir.join("preview.png");
        for cell_px in [usize::MAX, usize::MAX / 2, u32::MAX as usize] {
            let err = save_grid_png(&grid, cell_px, PreviewMode::Binary, &path).unwrap_err();
            assert!(err.starts_with("Failed to size preview"), "{err}");
        }
        assert!(!dir.exists());
    }

    #[test]
    fn empty_grid_is_not_saved() {
        let path = std::env::temp_dir().join("nonogram_empty_preview.png");
        let err = save_grid_png(&NonogramGrid::empty(), 8, PreviewMode::Binary, &path).unwrap_err();
        assert!(err.starts_with("Refusing to save empty grid"), "{err}");
    }
}
