//! Separable box blur over all four channels of a raster.
//!
//! The filter is a mean kernel `1 / (2 * radius + 1)` applied in two strictly
//! ordered passes, horizontal then vertical, on one shared buffer: the
//! horizontal pass's writes are fully visible to the vertical pass, and each
//! sweep reads the samples it has already written. Channel sums accumulate in
//! `f32` and are truncated, not rounded, on write.

use crate::foundation::core::{Raster, Rgba8};

/// Out-of-bounds sampling rule for [`box_blur`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EdgePolicy {
    /// Out-of-bounds samples are fully transparent white. Pulls border alpha
    /// toward transparency, which is the intended softening for shadow masks.
    ZeroExtend,
    /// Out-of-bounds samples reflect back into the raster. The general-purpose
    /// policy: a constant image stays constant everywhere.
    Mirror,
}

const OOB_SAMPLE: Rgba8 = [255, 255, 255, 0];

/// Blur `raster` in place. `radius == 0` degenerates to the 1-sample kernel.
pub fn box_blur(raster: &mut Raster, radius: u32, policy: EdgePolicy) {
    let radius = radius.min(i32::MAX as u32 / 4) as i32;
    let kernel = 1.0f32 / ((radius * 2 + 1) as f32);
    horizontal_pass(raster, radius, kernel, policy);
    vertical_pass(raster, radius, kernel, policy);
}

fn horizontal_pass(raster: &mut Raster, radius: i32, kernel: f32, policy: EdgePolicy) {
    let cols = raster.width as i32;
    let rows = raster.height as i32;
    for row in 0..rows {
        for col in 0..cols {
            let mut sum = [0.0f32; 4];
            for k in (col - radius)..=(col + radius) {
                let px = match resolve(k, cols, policy) {
                    Some(x) => raster.get(x as u32, row as u32),
                    None => OOB_SAMPLE,
                };
                for c in 0..4 {
                    sum[c] += f32::from(px[c]) * kernel;
                }
            }
            raster.set(col as u32, row as u32, truncate(sum));
        }
    }
}

fn vertical_pass(raster: &mut Raster, radius: i32, kernel: f32, policy: EdgePolicy) {
    let cols = raster.width as i32;
    let rows = raster.height as i32;
    for col in 0..cols {
        for row in 0..rows {
            let mut sum = [0.0f32; 4];
            for k in (row - radius)..=(row + radius) {
                let px = match resolve(k, rows, policy) {
                    Some(y) => raster.get(col as u32, y as u32),
                    None => OOB_SAMPLE,
                };
                for c in 0..4 {
                    sum[c] += f32::from(px[c]) * kernel;
                }
            }
            raster.set(col as u32, row as u32, truncate(sum));
        }
    }
}

/// Map an index into `0..n`, or `None` for a zero-extended sample.
fn resolve(i: i32, n: i32, policy: EdgePolicy) -> Option<i32> {
    match policy {
        EdgePolicy::ZeroExtend => {
            if i < 0 || i >= n {
                None
            } else {
                Some(i)
            }
        }
        EdgePolicy::Mirror => {
            let mut i = i;
            if i < 0 {
                i = -i;
            }
            if i >= n {
                i = (n - 1) - (i - n);
            }
            // Reflect once; radii larger than the raster clamp to the far edge.
            Some(i.clamp(0, n - 1))
        }
    }
}

fn truncate(sum: [f32; 4]) -> Rgba8 {
    let mut px = [0u8; 4];
    for c in 0..4 {
        px[c] = sum[c].clamp(0.0, 255.0) as u8;
    }
    px
}

#[cfg(test)]
#[path = "../../tests/unit/effects/box_blur.rs"]
mod tests;
