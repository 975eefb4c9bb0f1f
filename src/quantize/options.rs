use serde::{Deserialize, Serialize};

/// Filter used to draw the scaled image onto the grid canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resample {
    /// Nearest source pixel, hard edges. A canvas pixel counts as covered
    /// when at least half of it lies inside the drawn rectangle on each axis.
    Nearest,
    /// Bilinear interpolation at the cell centre with antialiased edges.
    #[default]
    Bilinear,
    /// Area-weighted average of every source pixel under the cell.
    Area,
}

/// How a sampled colour is reduced to one brightness value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    /// Unweighted `(r + g + b) / 3`.
    #[default]
    Mean,
    /// ITU-R BT.601 luma, `0.299 r + 0.587 g + 0.114 b`.
    Rec601,
}

impl Brightness {
    #[inline]
    pub fn of(self, c: crate::image::Rgb) -> f32 {
        let [r, g, b] = c.to_f32();
        match self {
            Brightness::Mean => (r + g + b) / 3.0,
            Brightness::Rec601 => 0.299 * r + 0.587 * g + 0.114 * b,
        }
    }
}

/// Options controlling grid quantization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizeOptions {
    pub resample: Resample,
    pub brightness: Brightness,
    /// Cells strictly darker than this are filled.
    pub threshold: f32,
    /// Quantize rows on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

impl QuantizeOptions {
    /// Default brightness cutoff on the 0–255 scale.
    pub const DEFAULT_THRESHOLD: f32 = 128.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resample(mut self, resample: Resample) -> Self {
        self.resample = resample;
        self
    }

    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            resample: Resample::Bilinear,
            brightness: Brightness::Mean,
            threshold: Self::DEFAULT_THRESHOLD,
            parallel: true,
        }
    }
}
