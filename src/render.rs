//! Synchronous strategy front door.
//!
//! One canonical entry point per strategy family, all driven by a
//! [`ShadowSpec`]: plan the geometry, extract the mask, run the strategy.
//! The worker thread funnels every request through here.

use crate::effects::box_blur::{EdgePolicy, box_blur};
use crate::effects::composite::{blit_mask_tinted, blit_raster};
use crate::effects::gaussian::{GaussianBlurKernel, gaussian_shadow};
use crate::effects::layered::layered_shadow;
use crate::effects::mask::extract_alpha;
use crate::foundation::core::{AlphaMask, Raster};
use crate::foundation::error::{UmbraError, UmbraResult};
use crate::plan::{PlannedGeometry, plan};
use crate::spec::{ShadowSpec, ShadowStrategy};

/// Render the shadowed composition of `source` per `spec` and `strategy`.
///
/// Degenerate inputs are rejected here, before any pixel work. The Gaussian
/// strategy requires the platform's external kernel; without one it surfaces
/// [`UmbraError::BlurServiceUnavailable`] rather than silently degrading.
#[tracing::instrument(skip(source, gaussian), fields(w = source.width, h = source.height))]
pub fn render_shadow(
    source: &Raster,
    spec: &ShadowSpec,
    strategy: ShadowStrategy,
    gaussian: Option<&dyn GaussianBlurKernel>,
) -> UmbraResult<Raster> {
    let geometry = plan(source.width, source.height, spec)?;
    let mask = extract_alpha(source);
    match strategy {
        ShadowStrategy::Layered => layered_shadow(&mask, source, spec, &geometry),
        ShadowStrategy::BoxBlur => box_blur_shadow(&mask, source, spec, &geometry),
        ShadowStrategy::Gaussian => {
            let kernel = gaussian.ok_or_else(|| {
                UmbraError::blur_unavailable("platform exposes no Gaussian compute kernel")
            })?;
            gaussian_shadow(&mask, source, spec, &geometry, kernel)
        }
    }
}

/// Box-blur strategy: paint the tinted silhouette, blur the whole canvas with
/// zero-extension edges, then put the foreground back on top.
fn box_blur_shadow(
    mask: &AlphaMask,
    source: &Raster,
    spec: &ShadowSpec,
    geometry: &PlannedGeometry,
) -> UmbraResult<Raster> {
    let mut canvas = Raster::new(geometry.canvas_width, geometry.canvas_height)?;
    blit_mask_tinted(
        &mut canvas,
        mask,
        geometry.source_rect,
        geometry.initial_dest_rect,
        spec.color,
        255,
    );
    box_blur(&mut canvas, spec.total_size(), EdgePolicy::ZeroExtend);
    blit_raster(&mut canvas, source, geometry.source_rect, geometry.foreground_rect);
    Ok(canvas)
}
