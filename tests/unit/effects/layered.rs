use super::*;
use crate::effects::mask::extract_alpha;
use crate::foundation::core::Rgb;
use crate::plan::plan;
use crate::spec::ShadowSides;

fn opaque_black(width: u32, height: u32) -> Raster {
    let mut r = Raster::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            r.set(x, y, [0, 0, 0, 255]);
        }
    }
    r
}

fn shadow(source: &Raster, spec: &ShadowSpec) -> Raster {
    let geometry = plan(source.width, source.height, spec).unwrap();
    let mask = extract_alpha(source);
    layered_shadow(&mask, source, spec, &geometry).unwrap()
}

#[test]
fn layer_count_0_behaves_as_1() {
    let source = opaque_black(6, 6);
    let mut zero = ShadowSpec::new(3, 0, Rgb::BLACK);
    zero.alpha_initial = 40;
    let mut one = zero;
    one.layer_count = 1;

    assert_eq!(shadow(&source, &zero), shadow(&source, &one));
}

#[test]
fn opacity_saturates_at_255() {
    let source = opaque_black(6, 6);
    let mut spec = ShadowSpec::new(3, 3, Rgb::BLACK);
    spec.alpha_initial = 250;
    spec.alpha_step = 100;

    let out = shadow(&source, &spec);
    // Corner covered by the first layer only; the saturated later layers sit
    // on the shrunken rects. No wrap, no overflow.
    assert_eq!(out.get(0, 0)[3], 250);
    assert_eq!(out.get(1, 1)[3], 255);
}

#[test]
fn negative_step_clamps_at_0() {
    let source = opaque_black(6, 6);
    let mut spec = ShadowSpec::new(3, 3, Rgb::BLACK);
    spec.alpha_initial = 10;
    spec.alpha_step = -20;

    let out = shadow(&source, &spec);
    // Layers after the first paint at opacity 0, leaving only one layer.
    assert_eq!(out.get(0, 0)[3], 10);
    assert_eq!(out.get(1, 1)[3], 10);
}

#[test]
fn deselected_sides_keep_their_bound() {
    let source = opaque_black(8, 8);
    let mut spec = ShadowSpec::new(4, 4, Rgb::BLACK);
    spec.alpha_initial = 20;
    spec.alpha_step = 5;
    spec.sides = ShadowSides {
        left: false,
        top: false,
        right: true,
        bottom: true,
    };

    let out = shadow(&source, &spec);
    // Every layer still covers the top-left corner, so it accumulates all
    // four paints; the bottom-right corner only sees the first layer.
    let tl = out.get(0, 0)[3];
    let br = out.get(out.width - 1, out.height - 1)[3];
    assert_eq!(br, 20);
    assert!(tl > br);
}

#[test]
fn mask_is_not_mutated() {
    let source = opaque_black(6, 6);
    let spec = ShadowSpec::new(2, 2, Rgb::BLACK);
    let geometry = plan(source.width, source.height, &spec).unwrap();
    let mask = extract_alpha(&source);
    let before = mask.clone();

    let _ = layered_shadow(&mask, &source, &spec, &geometry).unwrap();
    assert_eq!(mask, before);
}

#[test]
fn shadow_color_tints_the_halo() {
    let source = opaque_black(6, 6);
    let mut spec = ShadowSpec::new(3, 1, Rgb::new(200, 40, 10));
    spec.alpha_initial = 100;

    let out = shadow(&source, &spec);
    let px = out.get(0, 0);
    assert_eq!((px[0], px[1], px[2]), (200, 40, 10));
    assert_eq!(px[3], 100);
}
