//! Canonical shadow request values.
//!
//! Every convenience form (CSS-like `box-shadow`, per-side shadows, compat
//! entry points) reduces to one [`ShadowSpec`] plus a [`ShadowStrategy`];
//! there is no separate algorithm behind any of them.

use std::str::FromStr;

use crate::foundation::core::Rgb;
use crate::foundation::error::UmbraError;

/// Which sides the layered compositor shrinks between layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShadowSides {
    /// Shrink the left bound.
    pub left: bool,
    /// Shrink the top bound.
    pub top: bool,
    /// Shrink the right bound.
    pub right: bool,
    /// Shrink the bottom bound.
    pub bottom: bool,
}

impl ShadowSides {
    /// Shadow on all four sides, the common case.
    pub const ALL: Self = Self {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };
}

impl Default for ShadowSides {
    fn default() -> Self {
        Self::ALL
    }
}

/// Which margins the decorator reduces by the shadow size after attachment,
/// so the grown background does not shift surrounding layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarginCompensation {
    /// Compensate the left margin.
    pub left: bool,
    /// Compensate the top margin.
    pub top: bool,
    /// Compensate the right margin.
    pub right: bool,
    /// Compensate the bottom margin.
    pub bottom: bool,
}

/// One immutable shadow request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShadowSpec {
    /// Blur/halo radius in pixels.
    pub size: u32,
    /// Silhouette layers for the layered strategy; `0` is treated as `1`.
    pub layer_count: u32,
    /// Shadow tint.
    pub color: Rgb,
    /// Paint opacity of the first layer.
    pub alpha_initial: u8,
    /// Signed opacity increment per layer, saturating within `0..=255`.
    pub alpha_step: i16,
    /// Signed horizontal shadow offset in pixels.
    pub offset_left: i32,
    /// Signed vertical shadow offset in pixels.
    pub offset_top: i32,
    /// Extra halo expansion in pixels, folded into the effective size.
    pub spread: u32,
    /// Grow the canvas by the shadow size instead of keeping the source size.
    pub expand: bool,
    /// Sides the layered strategy shrinks.
    #[serde(default)]
    pub sides: ShadowSides,
}

impl ShadowSpec {
    /// A spec with the given size, layer count and color; no offset, no
    /// spread, expanding canvas, default fade.
    pub fn new(size: u32, layer_count: u32, color: Rgb) -> Self {
        Self {
            size,
            layer_count,
            color,
            alpha_initial: 100,
            alpha_step: 10,
            offset_left: 0,
            offset_top: 0,
            spread: 0,
            expand: true,
            sides: ShadowSides::ALL,
        }
    }

    /// CSS-style `box-shadow(horizontal, vertical, blur, spread)` preset.
    ///
    /// Pure parameter remapping: effective size `blur + spread` (negative
    /// spread clamps to zero), one layer per blur pixel (at least one), and an
    /// expanding canvas.
    pub fn box_shadow(horizontal: i32, vertical: i32, blur: u32, spread: i32, color: Rgb) -> Self {
        Self {
            offset_left: horizontal,
            offset_top: vertical,
            spread: spread.max(0) as u32,
            ..Self::new(blur, blur.max(1), color)
        }
    }

    /// Effective shadow size: `size + spread`.
    pub fn total_size(&self) -> u32 {
        self.size.saturating_add(self.spread)
    }

    /// Layer count with the divide-by-zero guard applied.
    pub fn layers(&self) -> u32 {
        self.layer_count.max(1)
    }
}

/// How the shadow halo is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShadowStrategy {
    /// Stacked silhouettes with stepped opacity, no convolution.
    Layered,
    /// Separable box blur with zero-extension edges.
    BoxBlur,
    /// External Gaussian compute kernel supplied by the platform.
    Gaussian,
}

impl FromStr for ShadowStrategy {
    type Err = UmbraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "layered" => Ok(Self::Layered),
            "boxblur" | "box_blur" | "box-blur" => Ok(Self::BoxBlur),
            "gaussian" => Ok(Self::Gaussian),
            other => Err(UmbraError::validation(format!(
                "unknown shadow strategy '{other}'"
            ))),
        }
    }
}
