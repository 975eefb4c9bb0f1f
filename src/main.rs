use nonogram_forge::image::io::RgbImageU8;
use nonogram_forge::image::Rgb;
use nonogram_forge::render::render_text;
use nonogram_forge::{GridDims, PuzzleGenerator, PuzzleParams};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Demo stub: draws a dark ring on a light background and prints the puzzle
    let (w, h) = (96usize, 64usize);
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
    let img = RgbImageU8::from_fn(w, h, |x, y| {
        let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        if (18.0..28.0).contains(&d) {
            Rgb::new(30, 30, 60)
        } else {
            Rgb::new(235, 230, 220)
        }
    });

    let generator = PuzzleGenerator::new(PuzzleParams {
        dims: GridDims::clamped(24, 16),
        ..Default::default()
    });
    match generator.generate_with_report(img.as_view()) {
        Ok(report) => {
            print!("{}", render_text(&report.puzzle));
            println!(
                "filled={} fill_ratio={:.3} latency_ms={:.3}",
                report.trace.filled_cells, report.trace.fill_ratio, report.trace.timings.total_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
