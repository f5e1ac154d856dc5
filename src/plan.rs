//! Shadow geometry planning.
//!
//! The planner reconciles offset, spread and expansion into concrete canvas
//! dimensions and placement rects. It is the "compile" stage of the pipeline:
//! pure, deterministic, no I/O, recomputed per request.

use crate::foundation::core::Rect;
use crate::foundation::error::{UmbraError, UmbraResult};
use crate::spec::ShadowSpec;

/// Hard ceiling on planned canvas edges, far above any real view.
const MAX_CANVAS_EDGE: i64 = 1 << 20;

/// Concrete raster dimensions and placement rects for one shadow request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlannedGeometry {
    /// Output canvas width in pixels.
    pub canvas_width: u32,
    /// Output canvas height in pixels.
    pub canvas_height: u32,
    /// Sampling window over the source raster (its full bounds).
    pub source_rect: Rect,
    /// First destination rect for the shadow silhouette.
    pub initial_dest_rect: Rect,
    /// Where the unblurred source is painted over the finished shadow.
    pub foreground_rect: Rect,
}

/// Plan the output geometry for `spec` over a `source_width x source_height`
/// raster.
///
/// With `s` the effective size and `ol/ot` the signed offsets:
///
/// - expand: the canvas grows by `2s + 2|offset|` per axis, the shadow lands
///   at `(|ol|, |ot|)` sized `source + 2s`, and the foreground sits inset `s`
///   from the near canvas edge, pushed away from negative offsets so the halo
///   is directional for either offset sign.
/// - no expand: the canvas grows only by the offset padding, the shadow stays
///   inside the source footprint, and the foreground is scaled down by `2s`
///   to leave room for the halo.
pub fn plan(
    source_width: u32,
    source_height: u32,
    spec: &ShadowSpec,
) -> UmbraResult<PlannedGeometry> {
    if source_width == 0 || source_height == 0 {
        return Err(UmbraError::degenerate("source raster has zero area"));
    }

    let w = source_width as i64;
    let h = source_height as i64;
    let s = spec.total_size() as i64;
    let (ol, ot) = (spec.offset_left as i64, spec.offset_top as i64);
    let (aol, aot) = (ol.abs(), ot.abs());

    let (canvas_w, canvas_h) = if spec.expand {
        (w + 2 * s + 2 * aol, h + 2 * s + 2 * aot)
    } else {
        if w <= 2 * s || h <= 2 * s {
            return Err(UmbraError::degenerate(
                "non-expand shadow leaves no foreground area",
            ));
        }
        (w + 2 * aol, h + 2 * aot)
    };
    if canvas_w > MAX_CANVAS_EDGE || canvas_h > MAX_CANVAS_EDGE {
        return Err(UmbraError::validation(
            "planned canvas exceeds the maximum raster edge",
        ));
    }

    let fg_left = s + aol - ol;
    let fg_top = s + aot - ot;
    let (dest, fg) = if spec.expand {
        (
            rect(aol, aot, aol + w + 2 * s, aot + h + 2 * s),
            rect(fg_left, fg_top, fg_left + w, fg_top + h),
        )
    } else {
        (
            rect(aol, aot, aol + w, aot + h),
            rect(fg_left, fg_top, fg_left + (w - 2 * s), fg_top + (h - 2 * s)),
        )
    };

    Ok(PlannedGeometry {
        canvas_width: canvas_w as u32,
        canvas_height: canvas_h as u32,
        source_rect: Rect::from_size(source_width, source_height),
        initial_dest_rect: dest,
        foreground_rect: fg,
    })
}

fn rect(left: i64, top: i64, right: i64, bottom: i64) -> Rect {
    Rect::new(left as i32, top as i32, right as i32, bottom as i32)
}

#[cfg(test)]
#[path = "../tests/unit/plan.rs"]
mod tests;
