//! Adapter around an external Gaussian blur compute service.
//!
//! The platform supplies the kernel; this module only marshals: build the
//! planned canvas, paint the tinted mask, hand the canvas to the service, then
//! composite the foreground over the blurred result.

use crate::effects::composite::{blit_mask_tinted, blit_raster};
use crate::foundation::core::{AlphaMask, Raster};
use crate::foundation::error::UmbraResult;
use crate::plan::PlannedGeometry;
use crate::spec::ShadowSpec;

/// A radius-parameterized external blur compute kernel.
///
/// Implementations must preserve the raster's dimensions and must be callable
/// from the shadow worker thread.
pub trait GaussianBlurKernel: Send + Sync {
    /// Blur `raster` in place with the given radius.
    fn blur_in_place(&self, raster: &mut Raster, radius: u32) -> UmbraResult<()>;
}

/// Render a Gaussian-blurred shadow through the external `kernel`.
pub fn gaussian_shadow(
    mask: &AlphaMask,
    source: &Raster,
    spec: &ShadowSpec,
    geometry: &PlannedGeometry,
    kernel: &dyn GaussianBlurKernel,
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
    kernel.blur_in_place(&mut canvas, spec.total_size())?;
    blit_raster(&mut canvas, source, geometry.source_rect, geometry.foreground_rect);
    Ok(canvas)
}
