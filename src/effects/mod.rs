//! Pixel-level building blocks of the shadow pipeline: mask extraction,
//! blits, the box blur, the layered compositor and the Gaussian adapter.

pub mod box_blur;
pub mod composite;
pub mod gaussian;
pub mod layered;
pub mod mask;
