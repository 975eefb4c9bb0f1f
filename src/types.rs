//! Plain data types flowing through the pipeline: grid dimensions, cells,
//! the binary grid, clue sequences and the assembled puzzle.
use crate::error::NonogramError;
use serde::{Deserialize, Serialize};

pub use crate::image::{ImageRgb8, Rgb};

/// Inclusive bounds accepted for either grid dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionLimits {
    pub min: usize,
    pub max: usize,
}

impl DimensionLimits {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Clamp `v` into the bounds; the result is never zero.
    #[inline]
    pub fn clamp(&self, v: usize) -> usize {
        v.clamp(self.min.max(1), self.max.max(self.min).max(1))
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        v >= 1 && v >= self.min && v <= self.max
    }
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self::new(GridDims::MIN, GridDims::MAX)
    }
}

/// Target puzzle size. Only constructible in-range, so the quantizer can
/// rely on both values being positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDims", into = "RawDims")]
pub struct GridDims {
    columns: usize,
    rows: usize,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawDims {
    columns: usize,
    rows: usize,
}

impl TryFrom<RawDims> for GridDims {
    type Error = NonogramError;

    fn try_from(raw: RawDims) -> Result<Self, Self::Error> {
        GridDims::new(raw.columns, raw.rows)
    }
}

impl From<GridDims> for RawDims {
    fn from(dims: GridDims) -> Self {
        RawDims {
            columns: dims.columns,
            rows: dims.rows,
        }
    }
}

impl GridDims {
    /// Smallest side length accepted by default.
    pub const MIN: usize = 5;
    /// Largest side length accepted by default.
    pub const MAX: usize = 50;

    /// Validate against the default `[5, 50]` bounds.
    pub fn new(columns: usize, rows: usize) -> Result<Self, NonogramError> {
        Self::with_limits(columns, rows, DimensionLimits::default())
    }

    /// Validate against caller-chosen bounds. Zero is rejected regardless.
    pub fn with_limits(
        columns: usize,
        rows: usize,
        limits: DimensionLimits,
    ) -> Result<Self, NonogramError> {
        if limits.contains(columns) && limits.contains(rows) {
            Ok(Self { columns, rows })
        } else {
            Err(NonogramError::InvalidDimensions {
                columns,
                rows,
                min: limits.min,
                max: limits.max,
            })
        }
    }

    /// Clamp an arbitrary request into the default bounds.
    pub fn clamped(columns: usize, rows: usize) -> Self {
        Self::clamped_with(columns, rows, DimensionLimits::default())
    }

    pub fn clamped_with(columns: usize, rows: usize, limits: DimensionLimits) -> Self {
        Self {
            columns: limits.clamp(columns),
            rows: limits.clamp(rows),
        }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
        }
    }
}

/// One puzzle cell. `source_color` is the resampled colour the cell was
/// thresholded from; clue derivation ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonogramCell {
    pub filled: bool,
    pub source_color: Rgb,
}

impl NonogramCell {
    pub const EMPTY: NonogramCell = NonogramCell {
        filled: false,
        source_color: Rgb::WHITE,
    };
    pub const FILLED: NonogramCell = NonogramCell {
        filled: true,
        source_color: Rgb::BLACK,
    };
}

/// Rectangular row-major grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonogramGrid {
    columns: usize,
    rows: usize,
    cells: Vec<NonogramCell>,
}

/// Inclusive bounding box of the filled cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellBounds {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl NonogramGrid {
    /// Grid for "no image supplied yet".
    pub fn empty() -> Self {
        Self {
            columns: 0,
            rows: 0,
            cells: Vec::new(),
        }
    }

    /// Wrap row-major cells produced by the quantizer.
    pub(crate) fn from_cells(dims: GridDims, cells: Vec<NonogramCell>) -> Self {
        debug_assert_eq!(cells.len(), dims.cell_count());
        Self {
            columns: dims.columns(),
            rows: dims.rows(),
            cells,
        }
    }

    /// Build from explicit rows; every row must match the first row's length.
    /// Rows without cells are rejected, so a grid with rows always has columns.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, NonogramError>
    where
        R: AsRef<[NonogramCell]>,
    {
        let mut columns = None;
        let mut cells = Vec::new();
        let mut count = 0usize;
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *columns.get_or_insert(row.len().max(1));
            if row.len() != expected {
                return Err(NonogramError::MalformedGrid {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
            count += 1;
        }
        Ok(Self {
            columns: columns.unwrap_or(0),
            rows: count,
            cells,
        })
    }

    /// Build from a boolean mask (`true` = filled). Colours default to
    /// black for filled and white for empty cells.
    pub fn from_bools<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, NonogramError>
    where
        R: AsRef<[bool]>,
    {
        let rows: Vec<Vec<NonogramCell>> = rows
            .into_iter()
            .map(|r| {
                r.as_ref()
                    .iter()
                    .map(|&f| if f { NonogramCell::FILLED } else { NonogramCell::EMPTY })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&NonogramCell> {
        (x < self.columns && y < self.rows).then(|| &self.cells[y * self.columns + x])
    }

    #[inline]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|c| c.filled)
    }

    pub fn row(&self, y: usize) -> &[NonogramCell] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[NonogramCell]> + '_ {
        (0..self.rows).map(move |y| self.row(y))
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = &NonogramCell> + '_ {
        assert!(x < self.columns, "column {x} out of range");
        (0..self.rows).map(move |y| &self.cells[y * self.columns + x])
    }

    pub fn cells(&self) -> &[NonogramCell] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.filled).count()
    }

    /// Fraction of filled cells; `0.0` for an empty grid.
    pub fn fill_ratio(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.filled_count() as f32 / self.cells.len() as f32
    }

    pub fn filled_bounds(&self) -> Option<CellBounds> {
        let mut bounds: Option<CellBounds> = None;
        for y in 0..self.rows {
            for (x, cell) in self.row(y).iter().enumerate() {
                if !cell.filled {
                    continue;
                }
                let b = bounds.get_or_insert(CellBounds {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                });
                b.min_x = b.min_x.min(x);
                b.max_x = b.max_x.max(x);
                b.max_y = y;
            }
        }
        bounds
    }
}

/// Run lengths of filled cells along one line. Never empty: a line with no
/// filled cells is `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClueSequence(Vec<u32>);

impl ClueSequence {
    /// Wrap collected runs, substituting `[0]` for an empty list.
    pub fn from_runs(runs: Vec<u32>) -> Self {
        if runs.is_empty() {
            Self::blank()
        } else {
            debug_assert!(runs.iter().all(|&r| r > 0), "runs must be positive");
            Self(runs)
        }
    }

    pub fn blank() -> Self {
        Self(vec![0])
    }

    /// True for the `[0]` clue of an empty line.
    pub fn is_blank(&self) -> bool {
        self.0 == [0]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of filled cells the clue describes.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl std::fmt::Display for ClueSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for run in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{run}")?;
            first = false;
        }
        Ok(())
    }
}

/// A grid together with its row and column clues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub grid: NonogramGrid,
    pub row_clues: Vec<ClueSequence>,
    pub column_clues: Vec<ClueSequence>,
}

impl Puzzle {
    pub fn from_grid(grid: NonogramGrid) -> Self {
        let (row_clues, column_clues) = crate::clues::derive_clues(&grid);
        Self {
            grid,
            row_clues,
            column_clues,
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.grid.columns(), self.grid.rows())
    }
}
