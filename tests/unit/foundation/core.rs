use super::*;

#[test]
fn raster_rejects_zero_area() {
    assert!(matches!(
        Raster::new(0, 4),
        Err(UmbraError::DegenerateInput(_))
    ));
    assert!(matches!(
        Raster::new(4, 0),
        Err(UmbraError::DegenerateInput(_))
    ));
}

#[test]
fn raster_from_rgba8_validates_length() {
    assert!(Raster::from_rgba8(2, 2, vec![0u8; 16]).is_ok());
    assert!(matches!(
        Raster::from_rgba8(2, 2, vec![0u8; 15]),
        Err(UmbraError::Validation(_))
    ));
}

#[test]
fn raster_get_set_round_trip() {
    let mut r = Raster::new(3, 2).unwrap();
    assert_eq!(r.get(2, 1), [0, 0, 0, 0]);
    r.set(2, 1, [9, 8, 7, 6]);
    assert_eq!(r.get(2, 1), [9, 8, 7, 6]);
    assert_eq!(r.get(1, 1), [0, 0, 0, 0]);
}

#[test]
fn rect_empty_semantics() {
    assert!(Rect::new(5, 5, 5, 9).is_empty());
    assert!(Rect::new(5, 5, 4, 9).is_empty());
    assert!(!Rect::new(0, 0, 1, 1).is_empty());
}

#[test]
fn rect_inset_shrinks_per_side() {
    let r = Rect::new(0, 0, 10, 10).inset(1, 2, 3, 4);
    assert_eq!(r, Rect::new(1, 2, 7, 6));
}

#[test]
fn rect_offset_shifts_both_corners() {
    let r = Rect::from_size(4, 3).offset(2, -1);
    assert_eq!(r, Rect::new(2, -1, 6, 2));
}

#[test]
fn rgb_parses_hex() {
    assert_eq!(Rgb::from_hex("#102030").unwrap(), Rgb::new(0x10, 0x20, 0x30));
    assert_eq!(Rgb::from_hex("ff0000").unwrap(), Rgb::new(255, 0, 0));
    assert!(Rgb::from_hex("#12345").is_err());
    assert!(Rgb::from_hex("#12345g").is_err());
}
