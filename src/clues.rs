//! Run-length clue derivation.
//!
//! Each row is read left to right and each column top to bottom. A run is
//! closed by the first unfilled cell after it; a run touching the end of the
//! line is flushed at the last cell. Lines without filled cells produce `[0]`.
use crate::types::{ClueSequence, NonogramGrid};
use rayon::prelude::*;

/// Clue for a single line of cells, `true` meaning filled.
pub fn line_clue<I>(cells: I) -> ClueSequence
where
    I: IntoIterator<Item = bool>,
    I::IntoIter: ExactSizeIterator,
{
    let cells = cells.into_iter();
    let last = cells.len().saturating_sub(1);
    let mut runs = Vec::new();
    let mut count = 0u32;
    for (i, filled) in cells.enumerate() {
        if filled {
            count += 1;
            if i == last {
                runs.push(count);
            }
        } else if count > 0 {
            runs.push(count);
            count = 0;
        }
    }
    ClueSequence::from_runs(runs)
}

/// Row clues (top to bottom) and column clues (left to right) for `grid`.
/// An empty grid yields two empty lists.
pub fn derive_clues(grid: &NonogramGrid) -> (Vec<ClueSequence>, Vec<ClueSequence>) {
    let row_clues = (0..grid.rows())
        .into_par_iter()
        .map(|y| line_clue(grid.row(y).iter().map(|c| c.filled)))
        .collect();
    let column_clues = (0..grid.columns())
        .into_par_iter()
        .map(|x| line_clue(grid.column(x).map(|c| c.filled).collect::<Vec<_>>()))
        .collect();
    (row_clues, column_clues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(bits: &str) -> Vec<u32> {
        let cells: Vec<bool> = bits.chars().map(|c| c == '#').collect();
        line_clue(cells).as_slice().to_vec()
    }

    #[test]
    fn runs_in_reading_order() {
        assert_eq!(clue("##.#..###."), vec![2, 1, 3]);
        assert_eq!(clue(".#.#.#"), vec![1, 1, 1]);
    }

    #[test]
    fn trailing_run_is_flushed_at_last_cell() {
        assert_eq!(clue("####"), vec![4]);
        assert_eq!(clue("..##"), vec![2]);
        assert_eq!(clue("#"), vec![1]);
    }

    #[test]
    fn empty_line_is_single_zero() {
        assert_eq!(clue("....."), vec![0]);
        assert_eq!(clue(""), vec![0]);
    }

    #[test]
    fn rows_and_columns() {
        let grid = NonogramGrid::from_bools([
            [true, true, false],
            [false, false, false],
            [true, false, true],
        ])
        .unwrap();
        let (rows, cols) = derive_clues(&grid);
        let rows: Vec<Vec<u32>> = rows.iter().map(|c| c.as_slice().to_vec()).collect();
        let cols: Vec<Vec<u32>> = cols.iter().map(|c| c.as_slice().to_vec()).collect();
        assert_eq!(rows, vec![vec![2], vec![0], vec![1, 1]]);
        assert_eq!(cols, vec![vec![1, 1], vec![1], vec![1]]);
    }

    #[test]
    fn totals_match_filled_counts() {
        let pattern: Vec<Vec<bool>> = (0..13)
            .map(|y| (0..9).map(|x| (x * 7 + y * 3) % 5 < 2).collect())
            .collect();
        let grid = NonogramGrid::from_bools(&pattern).unwrap();
        let (rows, cols) = derive_clues(&grid);
        for (y, clue) in rows.iter().enumerate() {
            let filled = pattern[y].iter().filter(|&&f| f).count() as u32;
            assert_eq!(clue.total(), filled, "row {y}");
            assert!(!clue.is_empty());
        }
        for (x, clue) in cols.iter().enumerate() {
            let filled = pattern.iter().filter(|r| r[x]).count() as u32;
            assert_eq!(clue.total(), filled, "column {x}");
            assert!(!clue.is_empty());
        }
    }

    #[test]
    fn empty_grid_has_no_clues() {
        let (rows, cols) = derive_clues(&NonogramGrid::empty());
        assert!(rows.is_empty());
        assert!(cols.is_empty());
    }
}
