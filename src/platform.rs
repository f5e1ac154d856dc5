//! Seams to the excluded UI layer.
//!
//! Everything the decorator needs from the windowing/widget framework is
//! behind [`ViewPlatform`]: rasterizing an element's background, attaching
//! the finished raster, layout compensation, and capability probes. The
//! native-elevation probe is a typed descriptor, not reflection.

use std::sync::Arc;

use crate::effects::gaussian::GaussianBlurKernel;
use crate::foundation::core::{ElementId, Raster};
use crate::foundation::error::UmbraResult;

/// Typed descriptor for a platform-native elevation shadow.
///
/// When present, the platform draws its own shadow and the raster pipeline is
/// bypassed entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ElevationCapability {
    /// Platform API level the capability is available since.
    pub api_version: u32,
}

/// The UI-layer collaborators consumed by the decorator.
pub trait ViewPlatform {
    /// Current size of the element's background, in pixels.
    fn element_size(&self, element: ElementId) -> (u32, u32);

    /// Rasterize the element's background into a fresh raster.
    fn render_to_raster(&mut self, element: ElementId, width: u32, height: u32)
    -> UmbraResult<Raster>;

    /// Hand the finished shadow raster back as the element's background.
    fn attach_raster_as_background(&mut self, element: ElementId, raster: Raster);

    /// Adjust the element's left/top padding so the grown background does not
    /// shift its content.
    fn apply_padding_adjustment(&mut self, element: ElementId, left: i32, top: i32);

    /// Adjust the element's margins (signed deltas, one per side).
    fn apply_margin_adjustment(
        &mut self,
        element: ElementId,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    );

    /// Probe for a platform-native elevation shadow on this element.
    fn elevation_capability(&self, element: ElementId) -> Option<ElevationCapability>;

    /// Set the native elevation; only meaningful when
    /// [`ViewPlatform::elevation_capability`] returned a descriptor.
    fn set_elevation(&mut self, element: ElementId, elevation: f32);

    /// The platform's Gaussian blur compute kernel, when it has one.
    fn gaussian_kernel(&self) -> Option<Arc<dyn GaussianBlurKernel>> {
        None
    }
}
