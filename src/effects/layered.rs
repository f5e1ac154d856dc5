//! Layered "stacked silhouette" shadow compositor.
//!
//! Simulates a soft shadow without convolution: the alpha mask is composited
//! repeatedly at shrinking destination rects with stepped opacity, then the
//! unblurred source is painted over the accumulated layers so the shadow shows
//! only in the halo.

use crate::effects::composite::{blit_mask_tinted, blit_raster};
use crate::foundation::core::{AlphaMask, Raster};
use crate::foundation::error::UmbraResult;
use crate::plan::PlannedGeometry;
use crate::spec::ShadowSpec;

/// Composite `mask` into a layered shadow per `spec` and `geometry`.
///
/// `mask` is never mutated; a fresh canvas is returned. `layer_count == 0` is
/// normalized to one layer, so the step division cannot fault.
pub fn layered_shadow(
    mask: &AlphaMask,
    source: &Raster,
    spec: &ShadowSpec,
    geometry: &PlannedGeometry,
) -> UmbraResult<Raster> {
    let mut canvas = Raster::new(geometry.canvas_width, geometry.canvas_height)?;

    let layers = spec.layers();
    let step = (spec.total_size() / layers) as i32;
    let mut dest = geometry.initial_dest_rect;
    let mut opacity = i32::from(spec.alpha_initial);

    for _ in 0..layers {
        blit_mask_tinted(
            &mut canvas,
            mask,
            geometry.source_rect,
            dest,
            spec.color,
            opacity as u8,
        );
        // Never wraps: the paint opacity saturates at the ends of the range.
        opacity = (opacity + i32::from(spec.alpha_step)).clamp(0, 255);
        dest = dest.inset(
            if spec.sides.left { step } else { 0 },
            if spec.sides.top { step } else { 0 },
            if spec.sides.right { step } else { 0 },
            if spec.sides.bottom { step } else { 0 },
        );
    }

    blit_raster(&mut canvas, source, geometry.source_rect, geometry.foreground_rect);
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/layered.rs"]
mod tests;
