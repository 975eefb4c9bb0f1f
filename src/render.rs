//! Plain-text rendering of a puzzle for terminals and logs.
//!
//! Column clues are stacked above the grid and bottom-aligned; row clues are
//! right-aligned to the left of it. Filled cells print as `#`, empty cells
//! as `.`. Pass `show_solution = false` to get a blank puzzle sheet.
use crate::types::Puzzle;
use std::fmt::Write;

/// Puzzle with its solution filled in.
pub fn render_text(puzzle: &Puzzle) -> String {
    render_with(puzzle, true)
}

pub fn render_with(puzzle: &Puzzle, show_solution: bool) -> String {
    let grid = &puzzle.grid;
    if grid.is_empty() {
        return String::new();
    }

    let cell_w = puzzle
        .row_clues
        .iter()
        .chain(&puzzle.column_clues)
        .flat_map(|c| c.iter())
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(1);
    let row_labels: Vec<String> = puzzle
        .row_clues
        .iter()
        .map(|c| {
            c.iter()
                .map(|n| format!("{n:>cell_w$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let left_w = row_labels.iter().map(String::len).max().unwrap_or(0);
    let depth = puzzle
        .column_clues
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for level in 0..depth {
        let mut line = format!("{:left_w$} ", "");
        for (x, clue) in puzzle.column_clues.iter().enumerate() {
            if x > 0 {
                line.push(' ');
            }
            let pad = depth - clue.len();
            match level.checked_sub(pad).and_then(|i| clue.as_slice().get(i)) {
                Some(n) => {
                    let _ = write!(line, "{n:>cell_w$}");
                }
                None => line.push_str(&" ".repeat(cell_w)),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    for (y, label) in row_labels.iter().enumerate() {
        let mut line = format!("{label:>left_w$} ");
        for (x, cell) in grid.row(y).iter().enumerate() {
            if x > 0 {
                line.push(' ');
            }
            let mark = match (show_solution, cell.filled) {
                (true, true) => '#',
                _ => '.',
            };
            let _ = write!(line, "{mark:>cell_w$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
