//! Rect-to-rect blits onto a shadow canvas.
//!
//! Sampling is nearest-neighbor; destination pixels outside the canvas are
//! clipped, and empty rects are skipped (defined behavior, not a fault).

use crate::foundation::core::{AlphaMask, Raster, Rect, Rgb};
use crate::foundation::math::{mul_div255_u8, over_straight};

/// Paint `mask` scaled from `src` into `dest`, tinted `color` at `opacity`.
pub fn blit_mask_tinted(
    canvas: &mut Raster,
    mask: &AlphaMask,
    src: Rect,
    dest: Rect,
    color: Rgb,
    opacity: u8,
) {
    if src.is_empty() || dest.is_empty() || opacity == 0 {
        return;
    }
    let raster = mask.raster();
    let (cw, ch) = (canvas.width as i32, canvas.height as i32);
    for dy in 0..dest.height() {
        let cy = dest.top + dy;
        if cy < 0 || cy >= ch {
            continue;
        }
        let sy = sample_coord(dy, dest.height(), src.top, src.height(), raster.height);
        for dx in 0..dest.width() {
            let cx = dest.left + dx;
            if cx < 0 || cx >= cw {
                continue;
            }
            let sx = sample_coord(dx, dest.width(), src.left, src.width(), raster.width);
            let ma = raster.get(sx, sy)[3];
            let a = mul_div255_u8(u16::from(ma), u16::from(opacity));
            if a == 0 {
                continue;
            }
            let d = canvas.get(cx as u32, cy as u32);
            canvas.set(
                cx as u32,
                cy as u32,
                over_straight(d, [color.r, color.g, color.b, a]),
            );
        }
    }
}

/// Composite `source` scaled from `src` into `dest`, source-over.
pub fn blit_raster(canvas: &mut Raster, source: &Raster, src: Rect, dest: Rect) {
    if src.is_empty() || dest.is_empty() {
        return;
    }
    let (cw, ch) = (canvas.width as i32, canvas.height as i32);
    for dy in 0..dest.height() {
        let cy = dest.top + dy;
        if cy < 0 || cy >= ch {
            continue;
        }
        let sy = sample_coord(dy, dest.height(), src.top, src.height(), source.height);
        for dx in 0..dest.width() {
            let cx = dest.left + dx;
            if cx < 0 || cx >= cw {
                continue;
            }
            let sx = sample_coord(dx, dest.width(), src.left, src.width(), source.width);
            let px = source.get(sx, sy);
            if px[3] == 0 {
                continue;
            }
            let d = canvas.get(cx as u32, cy as u32);
            canvas.set(cx as u32, cy as u32, over_straight(d, px));
        }
    }
}

/// Nearest-neighbor source coordinate for destination offset `d`, clamped
/// into the sampled raster's bounds.
fn sample_coord(d: i32, dest_len: i32, src_origin: i32, src_len: i32, raster_len: u32) -> u32 {
    let s = src_origin as i64 + (d as i64 * src_len as i64) / dest_len as i64;
    s.clamp(0, raster_len as i64 - 1) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
