mod common;

use common::synthetic_image::{checkerboard_rgb, noise_rgb};
use nonogram_forge::image::io::{save_grid_png, write_json_file, PreviewMode, RgbImageU8};
use nonogram_forge::prelude::*;
use nonogram_forge::types::DimensionLimits;
use nonogram_forge::{derive_clues, line_clue, NonogramGrid};

fn clues_of(seqs: &[nonogram_forge::ClueSequence]) -> Vec<Vec<u32>> {
    seqs.iter().map(|c| c.as_slice().to_vec()).collect()
}

fn generator(columns: usize, rows: usize) -> PuzzleGenerator {
    PuzzleGenerator::new(PuzzleParams {
        dims: GridDims::new(columns, rows).expect("valid dims"),
        ..Default::default()
    })
}

#[test]
fn black_pixel_gives_full_runs() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = RgbImageU8::from_fn(1, 1, |_, _| Rgb::BLACK);
    let puzzle = generator(5, 5).generate(img.as_view()).unwrap();
    assert_eq!(clues_of(&puzzle.row_clues), vec![vec![5]; 5]);
    assert_eq!(clues_of(&puzzle.column_clues), vec![vec![5]; 5]);
}

#[test]
fn white_pixel_gives_zero_clues() {
    let img = RgbImageU8::from_fn(1, 1, |_, _| Rgb::WHITE);
    let puzzle = generator(5, 5).generate(img.as_view()).unwrap();
    assert_eq!(clues_of(&puzzle.row_clues), vec![vec![0]; 5]);
    assert_eq!(clues_of(&puzzle.column_clues), vec![vec![0]; 5]);
    assert_eq!(puzzle.grid.filled_count(), 0);
}

#[test]
fn split_pixel_pair_on_tiny_grid() {
    let data = [Rgb::BLACK, Rgb::WHITE];
    let generator = PuzzleGenerator::new(PuzzleParams {
        dims: GridDims::with_limits(2, 2, DimensionLimits::new(1, 50)).unwrap(),
        quantize: QuantizeOptions::default().with_resample(Resample::Nearest),
    });
    let puzzle = generator.generate(ImageRgb8::new(2, 1, &data)).unwrap();
    assert_eq!(clues_of(&puzzle.row_clues), vec![vec![1], vec![1]]);
    assert_eq!(clues_of(&puzzle.column_clues), vec![vec![2], vec![0]]);
}

#[test]
fn full_row_flushes_trailing_run() {
    let grid = NonogramGrid::from_bools([[true; 4]]).unwrap();
    let (rows, cols) = derive_clues(&grid);
    assert_eq!(clues_of(&rows), vec![vec![4]]);
    assert_eq!(clues_of(&cols), vec![vec![1]; 4]);
    assert_eq!(line_clue([true, true, true, true]).as_slice(), [4]);
}

#[test]
fn clue_totals_match_filled_cells() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (seed, (columns, rows)) in [(7, (5, 5)), (11, (13, 29)), (23, (50, 50)), (42, (37, 8))] {
        let img = noise_rgb(61, 47, seed);
        let puzzle = generator(columns, rows).generate(img.as_view()).unwrap();
        let grid = &puzzle.grid;
        for (y, clue) in puzzle.row_clues.iter().enumerate() {
            let filled = grid.row(y).iter().filter(|c| c.filled).count() as u32;
            assert_eq!(clue.total(), filled, "seed {seed} row {y}");
            assert!(!clue.is_empty());
            assert!(clue.is_blank() || clue.iter().all(|&r| r > 0));
        }
        for (x, clue) in puzzle.column_clues.iter().enumerate() {
            let filled = grid.column(x).filter(|c| c.filled).count() as u32;
            assert_eq!(clue.total(), filled, "seed {seed} column {x}");
            assert!(!clue.is_empty());
        }
    }
}

#[test]
fn pipeline_is_deterministic() {
    let img = checkerboard_rgb(120, 90, 15);
    for filter in [Resample::Nearest, Resample::Bilinear, Resample::Area] {
        let generator = PuzzleGenerator::new(PuzzleParams {
            dims: GridDims::new(16, 12).unwrap(),
            quantize: QuantizeOptions::default().with_resample(filter),
        });
        let first = generator.generate(img.as_view()).unwrap();
        let second = generator.generate(img.as_view()).unwrap();
        assert_eq!(first, second, "filter {filter:?}");
    }
}

#[test]
fn checkerboard_maps_onto_matching_grid() {
    // 8x6 squares of 15 px on a 16x12 grid: each square covers 2x2 cells.
    let img = checkerboard_rgb(120, 90, 15);
    let generator = PuzzleGenerator::new(PuzzleParams {
        dims: GridDims::new(16, 12).unwrap(),
        quantize: QuantizeOptions::default().with_resample(Resample::Area),
    });
    let puzzle = generator.generate(img.as_view()).unwrap();
    assert_eq!(clues_of(&puzzle.row_clues), vec![vec![2, 2, 2, 2]; 12]);
    assert_eq!(clues_of(&puzzle.column_clues), vec![vec![2, 2, 2]; 16]);
    assert!(puzzle.grid.is_filled(0, 0));
    assert!(!puzzle.grid.is_filled(2, 0));
    assert!(puzzle.grid.is_filled(2, 2));
}

#[test]
fn report_serializes_to_json_and_png() {
    let img = checkerboard_rgb(40, 40, 10);
    let report = generator(8, 8)
        .generate_with_report(img.as_view())
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["puzzle"]["rowClues"].as_array().map(Vec::len), Some(8));
    assert_eq!(json["puzzle"]["grid"]["columns"], 8);
    assert_eq!(json["trace"]["input"]["width"], 40);

    let dir = std::env::temp_dir().join(format!("nonogram-forge-e2e-{}", std::process::id()));
    let json_path = dir.join("puzzle.json");
    let png_path = dir.join("puzzle.png");
    write_json_file(&json_path, &report).unwrap();
    save_grid_png(&report.puzzle.grid, 4, PreviewMode::Source, &png_path).unwrap();
    assert!(json_path.exists());
    assert!(png_path.exists());
    let _ = std::fs::remove_dir_all(&dir);
}
