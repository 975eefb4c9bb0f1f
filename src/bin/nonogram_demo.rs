use nonogram_forge::config::{self, OutputFormat};
use nonogram_forge::diagnostics::PuzzleReport;
use nonogram_forge::image::io::{load_rgb_image, save_grid_png, write_json_file};
use nonogram_forge::render::render_with;
use nonogram_forge::PuzzleGenerator;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "nonogram_demo".to_string());
    let config = config::parse_cli(&program)?;

    let rgb = load_rgb_image(&config.input)?;
    let params = config.puzzle_params()?;
    log::info!(
        "Loaded {} ({}x{}), target grid {}x{}",
        config.input.display(),
        rgb.width(),
        rgb.height(),
        params.dims.columns(),
        params.dims.rows()
    );

    let generator = PuzzleGenerator::new(params);
    let report = generator
        .generate_with_report(rgb.as_view())
        .map_err(|e| format!("Failed to generate puzzle: {e}"))?;

    let output = &config.output;
    if output.format.includes_text() {
        print_text_summary(&report, output.blank_sheet);
    }

    if output.format.includes_json() {
        if let Some(path) = &output.json_out {
            write_json_file(path, &report)?;
            if output.format.includes_text() {
                println!("\nJSON report written to {}", path.display());
            } else {
                println!("JSON report written to {}", path.display());
            }
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    if let Some(path) = &output.preview_png {
        save_grid_png(
            &report.puzzle.grid,
            output.cell_px,
            output.preview_mode,
            path,
        )?;
        if output.format.includes_text() {
            println!("Preview written to {}", path.display());
        } else {
            eprintln!("Preview written to {}", path.display());
        }
    }

    Ok(())
}

fn print_text_summary(report: &PuzzleReport, blank_sheet: bool) {
    let trace = &report.trace;
    println!("Puzzle summary");
    println!(
        "  input: {}x{} -> grid {}x{}",
        trace.input.width, trace.input.height, trace.input.columns, trace.input.rows
    );
    println!(
        "  placement: scale={:.4} offset=({:.2}, {:.2}) scaled={:.2}x{:.2}",
        trace.placement.scale,
        trace.placement.offset_x,
        trace.placement.offset_y,
        trace.placement.scaled_width,
        trace.placement.scaled_height
    );
    println!(
        "  quantize: resample={:?} brightness={:?} threshold={:.1}",
        trace.quantize.resample, trace.quantize.brightness, trace.quantize.threshold
    );
    println!(
        "  filled: {} ({:.1}%) blank rows={} blank columns={}",
        trace.filled_cells,
        trace.fill_ratio * 100.0,
        trace.blank_rows,
        trace.blank_columns
    );
    let stages: Vec<String> = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "  timings (ms): {} total={:.3}",
        stages.join(" "),
        trace.timings.total_ms
    );
    println!();
    print!("{}", render_with(&report.puzzle, !blank_sheet));
}
