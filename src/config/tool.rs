use crate::generator::PuzzleParams;
use crate::image::io::PreviewMode;
use crate::quantize::QuantizeOptions;
use crate::types::{DimensionLimits, GridDims};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct NonogramToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub quantize: QuantizeOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

impl NonogramToolConfig {
    pub fn puzzle_params(&self) -> Result<PuzzleParams, String> {
        Ok(PuzzleParams {
            dims: self.grid.resolve()?,
            quantize: self.quantize,
        })
    }
}

/// Requested grid size. With `clamp` set, out-of-range values are pulled
/// into `[min, max]` the way an interactive slider would; otherwise they
/// are an error.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub clamp: bool,
    pub min: usize,
    pub max: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        let limits = DimensionLimits::default();
        Self {
            columns: 10,
            rows: 10,
            clamp: true,
            min: limits.min,
            max: limits.max,
        }
    }
}

impl GridConfig {
    pub fn limits(&self) -> DimensionLimits {
        DimensionLimits::new(self.min, self.max)
    }

    pub fn resolve(&self) -> Result<GridDims, String> {
        let limits = self.limits();
        if self.clamp {
            Ok(GridDims::clamped_with(self.columns, self.rows, limits))
        } else {
            GridDims::with_limits(self.columns, self.rows, limits).map_err(|e| e.to_string())
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub json_out: Option<PathBuf>,
    pub preview_png: Option<PathBuf>,
    pub cell_px: usize,
    pub preview_mode: PreviewMode,
    /// Print the text puzzle without the solution.
    pub blank_sheet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            json_out: None,
            preview_png: None,
            cell_px: 16,
            preview_mode: PreviewMode::Binary,
            blank_sheet: false,
        }
    }
}

pub fn load_config(path: &Path) -> Result<NonogramToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<NonogramToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

/// Read the config path from the first CLI argument and load it.
pub fn parse_cli(program: &str) -> Result<NonogramToolConfig, String> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    load_config(Path::new(&path))
}
