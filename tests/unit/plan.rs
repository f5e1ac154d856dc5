use super::*;
use crate::foundation::core::Rgb;

fn spec(size: u32) -> ShadowSpec {
    ShadowSpec::new(size, 4, Rgb::BLACK)
}

#[test]
fn expand_canvas_grows_by_size_and_offset() {
    let mut s = spec(4);
    s.offset_left = 3;
    s.offset_top = -2;

    let g = plan(10, 20, &s).unwrap();
    assert_eq!(g.canvas_width, 10 + 8 + 6);
    assert_eq!(g.canvas_height, 20 + 8 + 4);
    assert!(g.canvas_width >= 10 && g.canvas_height >= 20);
}

#[test]
fn no_expand_canvas_pads_offsets_only() {
    let mut s = spec(4);
    s.expand = false;
    s.offset_left = 3;
    s.offset_top = 1;

    let g = plan(20, 20, &s).unwrap();
    assert_eq!(g.canvas_width, 20 + 6);
    assert_eq!(g.canvas_height, 20 + 2);
    assert_eq!(g.initial_dest_rect, Rect::new(3, 1, 23, 21));
    // The foreground scales down to keep the halo inside the footprint.
    assert_eq!(g.foreground_rect.width(), 20 - 8);
    assert_eq!(g.foreground_rect.height(), 20 - 8);
}

#[test]
fn concrete_10x10_size_4_expand() {
    let mut s = spec(4);
    s.alpha_initial = 20;
    s.alpha_step = 5;

    let g = plan(10, 10, &s).unwrap();
    assert_eq!((g.canvas_width, g.canvas_height), (18, 18));
    assert_eq!(g.source_rect, Rect::from_size(10, 10));
    assert_eq!(g.initial_dest_rect, Rect::new(0, 0, 18, 18));
    assert_eq!(g.foreground_rect, Rect::new(4, 4, 14, 14));
}

#[test]
fn signed_offsets_shift_shadow_relative_to_foreground() {
    // Doubled center: left + right, so the comparison stays in integers.
    let center_x2 = |r: Rect| r.left + r.right;

    for ol in [-3i32, 0, 3] {
        let mut s = spec(4);
        s.offset_left = ol;
        let g = plan(10, 10, &s).unwrap();
        let shift2 = center_x2(g.initial_dest_rect) - center_x2(g.foreground_rect);
        // The shadow center sits exactly `offset` away from the foreground.
        assert_eq!(shift2, 2 * ol, "offset_left {ol}");
    }
}

#[test]
fn spread_folds_into_effective_size() {
    let mut s = spec(2);
    s.spread = 3;

    let g = plan(10, 10, &s).unwrap();
    assert_eq!(g.canvas_width, 10 + 2 * 5);
    assert_eq!(g.foreground_rect, Rect::new(5, 5, 15, 15));
}

#[test]
fn zero_area_source_is_degenerate() {
    assert!(matches!(
        plan(0, 10, &spec(2)),
        Err(UmbraError::DegenerateInput(_))
    ));
    assert!(matches!(
        plan(10, 0, &spec(2)),
        Err(UmbraError::DegenerateInput(_))
    ));
}

#[test]
fn no_expand_without_foreground_area_is_degenerate() {
    let mut s = spec(5);
    s.expand = false;
    assert!(matches!(
        plan(10, 30, &s),
        Err(UmbraError::DegenerateInput(_))
    ));
    assert!(plan(11, 30, &s).is_ok());
}

#[test]
fn oversized_canvas_is_rejected() {
    let mut s = spec(4);
    s.offset_left = 1 << 20;
    assert!(matches!(plan(10, 10, &s), Err(UmbraError::Validation(_))));
}
