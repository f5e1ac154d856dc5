//! umbra synthesizes drop-shadow rasters for UI surfaces.
//!
//! A source raster (a rendered element background) is turned into a shadowed
//! composition through a small CPU pipeline:
//!
//! 1. **Plan**: `ShadowSpec + source dimensions -> PlannedGeometry` (canvas
//!    size, shadow and foreground placement rects)
//! 2. **Mask**: `Raster -> AlphaMask` (the element's silhouette)
//! 3. **Shadow**: one of three strategies: layered silhouettes, a separable
//!    box blur, or an external Gaussian compute kernel
//! 4. **Composite**: the unblurred source is painted back over the halo
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: planning and pixel work are pure and
//!   stable for a given input.
//! - **Serialized pixel work**: one worker thread per decorator, strict FIFO,
//!   completions applied on the owner's event loop behind a liveness token.
//! - **Straight-alpha RGBA8** end-to-end, matching the platform rasters the
//!   pipeline decorates.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod decorator;
pub mod effects;
pub mod plan;
pub mod platform;
pub mod render;
pub mod spec;
pub mod worker;

pub use decorator::ShadowDecorator;
pub use effects::box_blur::{EdgePolicy, box_blur};
pub use effects::gaussian::{GaussianBlurKernel, gaussian_shadow};
pub use effects::layered::layered_shadow;
pub use effects::mask::extract_alpha;
pub use foundation::core::{AlphaMask, ElementId, Raster, Rect, Rgb, Rgba8};
pub use foundation::error::{UmbraError, UmbraResult};
pub use plan::{PlannedGeometry, plan};
pub use platform::{ElevationCapability, ViewPlatform};
pub use render::render_shadow;
pub use spec::{MarginCompensation, ShadowSides, ShadowSpec, ShadowStrategy};
pub use worker::{CompletedShadow, LivenessToken, ShadowJob, ShadowWorker};
