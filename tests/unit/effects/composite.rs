use super::*;
use crate::effects::mask::extract_alpha;

fn opaque_mask(width: u32, height: u32) -> AlphaMask {
    let mut src = Raster::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            src.set(x, y, [0, 0, 0, 255]);
        }
    }
    extract_alpha(&src)
}

#[test]
fn tinted_blit_paints_color_at_scaled_opacity() {
    let mut canvas = Raster::new(4, 4).unwrap();
    let mask = opaque_mask(2, 2);

    blit_mask_tinted(
        &mut canvas,
        &mask,
        Rect::from_size(2, 2),
        Rect::new(1, 1, 3, 3),
        Rgb::new(255, 0, 0),
        128,
    );

    assert_eq!(canvas.get(1, 1), [255, 0, 0, 128]);
    assert_eq!(canvas.get(2, 2), [255, 0, 0, 128]);
    assert_eq!(canvas.get(0, 0), [0, 0, 0, 0]);
    assert_eq!(canvas.get(3, 3), [0, 0, 0, 0]);
}

#[test]
fn blit_scales_with_nearest_sampling() {
    let mut src = Raster::new(2, 2).unwrap();
    src.set(0, 0, [0, 0, 0, 40]);
    src.set(1, 0, [0, 0, 0, 80]);
    src.set(0, 1, [0, 0, 0, 120]);
    src.set(1, 1, [0, 0, 0, 160]);
    let mask = extract_alpha(&src);

    let mut canvas = Raster::new(4, 4).unwrap();
    blit_mask_tinted(
        &mut canvas,
        &mask,
        Rect::from_size(2, 2),
        Rect::from_size(4, 4),
        Rgb::BLACK,
        255,
    );

    // Each source sample maps to a 2x2 destination block.
    assert_eq!(canvas.get(0, 0)[3], 40);
    assert_eq!(canvas.get(1, 1)[3], 40);
    assert_eq!(canvas.get(3, 0)[3], 80);
    assert_eq!(canvas.get(0, 3)[3], 120);
    assert_eq!(canvas.get(3, 3)[3], 160);
}

#[test]
fn blit_clips_to_canvas_bounds() {
    let mut canvas = Raster::new(3, 3).unwrap();
    let mask = opaque_mask(2, 2);

    blit_mask_tinted(
        &mut canvas,
        &mask,
        Rect::from_size(2, 2),
        Rect::new(-1, -1, 5, 5),
        Rgb::BLACK,
        255,
    );

    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(canvas.get(x, y)[3], 255);
        }
    }
}

#[test]
fn empty_rects_are_skipped() {
    let mut canvas = Raster::new(3, 3).unwrap();
    let before = canvas.clone();
    let mask = opaque_mask(2, 2);

    blit_mask_tinted(
        &mut canvas,
        &mask,
        Rect::from_size(2, 2),
        Rect::new(2, 2, 2, 5),
        Rgb::BLACK,
        255,
    );
    assert_eq!(canvas, before);

    let src = Raster::new(2, 2).unwrap();
    blit_raster(&mut canvas, &src, Rect::new(1, 1, 1, 1), Rect::from_size(3, 3));
    assert_eq!(canvas, before);
}

#[test]
fn raster_blit_composites_source_over() {
    let mut canvas = Raster::new(2, 1).unwrap();
    canvas.set(0, 0, [0, 0, 255, 255]);
    canvas.set(1, 0, [0, 0, 255, 255]);

    let mut src = Raster::new(2, 1).unwrap();
    src.set(0, 0, [255, 0, 0, 255]);
    // (1, 0) stays fully transparent and must leave the canvas alone.

    blit_raster(&mut canvas, &src, Rect::from_size(2, 1), Rect::from_size(2, 1));
    assert_eq!(canvas.get(0, 0), [255, 0, 0, 255]);
    assert_eq!(canvas.get(1, 0), [0, 0, 255, 255]);
}
