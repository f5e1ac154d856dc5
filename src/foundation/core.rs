use crate::foundation::error::{UmbraError, UmbraResult};

/// One RGBA8 sample, straight (non-premultiplied) alpha, alpha at index 3.
pub type Rgba8 = [u8; 4];

/// Opaque handle to a UI element owned by the platform layer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// Shadow tint color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque black, the usual shadow tint.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Construct from channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex color.
    pub fn from_hex(s: &str) -> UmbraResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(UmbraError::validation(format!(
                "color must be '#rrggbb', got '{s}'"
            )));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| UmbraError::validation(format!("color must be '#rrggbb', got '{s}'")))
        };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
        })
    }
}

/// Integer pixel rectangle, `left/top` inclusive and `right/bottom` exclusive.
///
/// A rect with non-positive width or height is *empty*; compositing steps skip
/// empty rects instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left bound (inclusive).
    pub left: i32,
    /// Top bound (inclusive).
    pub top: i32,
    /// Right bound (exclusive).
    pub right: i32,
    /// Bottom bound (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Construct from bounds.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The rect `(0, 0, width, height)`.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Width in pixels (may be non-positive for an empty rect).
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels (may be non-positive for an empty rect).
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Return `true` when the rect encloses no pixels.
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Shift both corners by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Move each bound inward by the given per-side amounts.
    pub fn inset(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            self.left + left,
            self.top + top,
            self.right - right,
            self.bottom - bottom,
        )
    }
}

/// A 2D RGBA8 pixel buffer, tightly packed, row-major, straight alpha.
///
/// Rasters are the currency of the pipeline: each stage takes ownership of (or
/// exclusive access to) the raster it transforms, so no buffer is ever aliased
/// across stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels, non-zero for rasters built through [`Raster::new`].
    pub width: u32,
    /// Height in pixels, non-zero for rasters built through [`Raster::new`].
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl Raster {
    /// Allocate a fully transparent raster.
    ///
    /// Zero-area dimensions are a degenerate input and are rejected here,
    /// before any pipeline stage can observe them.
    pub fn new(width: u32, height: u32) -> UmbraResult<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing RGBA8 buffer, validating its length.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> UmbraResult<Self> {
        let len = Self::byte_len(width, height)?;
        if data.len() != len {
            return Err(UmbraError::validation(
                "raster buffer must be width * height * 4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn byte_len(width: u32, height: u32) -> UmbraResult<usize> {
        if width == 0 || height == 0 {
            return Err(UmbraError::degenerate("raster dimensions must be non-zero"));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| UmbraError::validation("raster buffer size overflow"))
    }

    /// Read the sample at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Write the sample at `(x, y)`. Panics when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

/// A [`Raster`] carrying only meaningful alpha: RGB is white, alpha mirrors
/// the source it was extracted from. Same dimensions as its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask(Raster);

impl AlphaMask {
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self(raster)
    }

    /// The backing raster.
    pub fn raster(&self) -> &Raster {
        &self.0
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.0.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.0.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
