//! Fit-to-box placement of the source image on the grid canvas and the
//! per-axis sampling tables used to resample it.
//!
//! Canvas pixel `x` covers the interval `[x, x + 1)`. The drawn image covers
//! `[off_x, off_x + scaled_w)`; source pixel `i` maps to
//! `[off_x + i·s, off_x + (i + 1)·s)`. The two axes are independent, so every
//! filter is evaluated as a separable product of per-axis tables.
use super::options::Resample;
use crate::image::{ImageRgb8, Rgb};

/// Uniform scale and centring offsets of the image inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub scaled_w: f32,
    pub scaled_h: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl Placement {
    /// Largest aspect-preserving scale that fits `src` inside `canvas`.
    /// Both source dimensions must be non-zero.
    pub fn fit(src_w: usize, src_h: usize, canvas_w: usize, canvas_h: usize) -> Self {
        debug_assert!(src_w > 0 && src_h > 0, "source image must be non-empty");
        let sx = canvas_w as f32 / src_w as f32;
        let sy = canvas_h as f32 / src_h as f32;
        let scale = sx.min(sy);
        let scaled_w = src_w as f32 * scale;
        let scaled_h = src_h as f32 * scale;
        Self {
            scale,
            scaled_w,
            scaled_h,
            off_x: (canvas_w as f32 - scaled_w) * 0.5,
            off_y: (canvas_h as f32 - scaled_h) * 0.5,
        }
    }
}

/// Sampling recipe for one canvas index along one axis.
#[derive(Clone, Debug, Default)]
struct AxisTap {
    /// Fraction of the canvas pixel covered by the drawn image.
    coverage: f32,
    /// Source index nearest the pixel centre.
    nearest: usize,
    /// Bilinear neighbours and weight of the second one.
    lerp: (usize, usize, f32),
    /// Source indices and overlap weights for the area filter.
    area: Vec<(usize, f32)>,
}

fn axis_taps(
    canvas_len: usize,
    src_len: usize,
    scale: f32,
    offset: f32,
    scaled_len: f32,
    filter: Resample,
) -> Vec<AxisTap> {
    let last = src_len - 1;
    let end = offset + scaled_len;
    (0..canvas_len)
        .map(|i| {
            let lo = i as f32;
            let hi = lo + 1.0;
            let coverage = (hi.min(end) - lo.max(offset)).clamp(0.0, 1.0);

            let centre = (lo + 0.5 - offset) / scale;
            let nearest = (centre.floor().max(0.0) as usize).min(last);

            let u = (centre - 0.5).clamp(0.0, last as f32);
            let i0 = u.floor() as usize;
            let i1 = (i0 + 1).min(last);
            let lerp = (i0, i1, u - i0 as f32);

            let area = if filter == Resample::Area && coverage > 0.0 {
                area_weights(
                    (lo.max(offset) - offset) / scale,
                    (hi.min(end) - offset) / scale,
                    src_len,
                )
            } else {
                Vec::new()
            };

            AxisTap {
                coverage,
                nearest,
                lerp,
                area,
            }
        })
        .collect()
}

/// Overlap of the source-space interval `[a, b)` with each source pixel.
fn area_weights(a: f32, b: f32, src_len: usize) -> Vec<(usize, f32)> {
    let a = a.clamp(0.0, src_len as f32);
    let b = b.clamp(a, src_len as f32);
    let first = a.floor() as usize;
    let last = (b.ceil() as usize).min(src_len).max(first + 1);
    let mut weights: Vec<(usize, f32)> = (first..last)
        .filter_map(|i| {
            let w = (b.min(i as f32 + 1.0) - a.max(i as f32)).max(0.0);
            (w > 0.0).then_some((i, w))
        })
        .collect();
    if weights.is_empty() {
        // Sliver narrower than float resolution: take the pixel it falls in.
        weights.push((first.min(src_len - 1), 1.0));
    }
    weights
}

/// Precomputed sampler drawing one image onto one canvas.
pub struct CanvasSampler<'a> {
    image: &'a ImageRgb8<'a>,
    filter: Resample,
    xs: Vec<AxisTap>,
    ys: Vec<AxisTap>,
}

impl<'a> CanvasSampler<'a> {
    pub fn new(
        image: &'a ImageRgb8<'a>,
        placement: &Placement,
        canvas_w: usize,
        canvas_h: usize,
        filter: Resample,
    ) -> Self {
        let xs = axis_taps(
            canvas_w,
            image.w,
            placement.scale,
            placement.off_x,
            placement.scaled_w,
            filter,
        );
        let ys = axis_taps(
            canvas_h,
            image.h,
            placement.scale,
            placement.off_y,
            placement.scaled_h,
            filter,
        );
        Self {
            image,
            filter,
            xs,
            ys,
        }
    }

    /// Canvas colour at `(x, y)`: the resampled image composited over white.
    pub fn sample(&self, x: usize, y: usize) -> Rgb {
        let tx = &self.xs[x];
        let ty = &self.ys[y];
        match self.filter {
            Resample::Nearest => {
                if tx.coverage >= 0.5 && ty.coverage >= 0.5 {
                    self.image.get(tx.nearest, ty.nearest)
                } else {
                    Rgb::WHITE
                }
            }
            Resample::Bilinear => {
                let alpha = tx.coverage * ty.coverage;
                if alpha <= 0.0 {
                    return Rgb::WHITE;
                }
                over_white(self.bilinear(tx, ty), alpha)
            }
            Resample::Area => {
                let alpha = tx.coverage * ty.coverage;
                if alpha <= 0.0 {
                    return Rgb::WHITE;
                }
                over_white(self.area(tx, ty), alpha)
            }
        }
    }

    fn bilinear(&self, tx: &AxisTap, ty: &AxisTap) -> [f32; 3] {
        let (x0, x1, fx) = tx.lerp;
        let (y0, y1, fy) = ty.lerp;
        let mix = |a: [f32; 3], b: [f32; 3], t: f32| {
            [
                a[0] + (b[0] - a[0]) * t,
                a[1] + (b[1] - a[1]) * t,
                a[2] + (b[2] - a[2]) * t,
            ]
        };
        let top = mix(
            self.image.get(x0, y0).to_f32(),
            self.image.get(x1, y0).to_f32(),
            fx,
        );
        let bottom = mix(
            self.image.get(x0, y1).to_f32(),
            self.image.get(x1, y1).to_f32(),
            fx,
        );
        mix(top, bottom, fy)
    }

    fn area(&self, tx: &AxisTap, ty: &AxisTap) -> [f32; 3] {
        let mut acc = [0.0f32; 3];
        let mut total = 0.0f32;
        for &(sy, wy) in &ty.area {
            for &(sx, wx) in &tx.area {
                let w = wx * wy;
                let c = self.image.get(sx, sy).to_f32();
                acc[0] += c[0] * w;
                acc[1] += c[1] * w;
                acc[2] += c[2] * w;
                total += w;
            }
        }
        if total <= 0.0 {
            return Rgb::WHITE.to_f32();
        }
        [acc[0] / total, acc[1] / total, acc[2] / total]
    }
}

#[inline]
fn over_white(c: [f32; 3], alpha: f32) -> Rgb {
    let alpha = alpha.min(1.0);
    let bg = 255.0 * (1.0 - alpha);
    Rgb::from_f32([c[0] * alpha + bg, c[1] * alpha + bg, c[2] * alpha + bg])
}
