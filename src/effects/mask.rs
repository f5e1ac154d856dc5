//! Alpha-mask extraction: a raster's silhouette as seen by the shadow.

use crate::foundation::core::{AlphaMask, Raster};

/// Derive an opacity mask from `source`'s alpha channel.
///
/// The mask has the same dimensions as `source`; RGB is white and only alpha
/// is consumed downstream. Pure, no side effects on `source`.
pub fn extract_alpha(source: &Raster) -> AlphaMask {
    let mut data = vec![255u8; source.data.len()];
    for (m, s) in data.chunks_exact_mut(4).zip(source.data.chunks_exact(4)) {
        m[3] = s[3];
    }
    AlphaMask::from_raster(Raster {
        width: source.width,
        height: source.height,
        data,
    })
}
