use super::*;

#[test]
fn offset_defaults_to_origin() {
    assert_eq!(Offset::default(), Offset::new(0, 0));
}

#[test]
fn region_rejects_unordered_corners() {
    assert!(Region::new(3, 0, 1, 0).unwrap_err().is_invalid_argument());
    assert!(Region::new(0, 3, 0, 1).unwrap_err().is_invalid_argument());
}

#[test]
fn region_extent_is_inclusive() {
    let r = Region::new(1, 1, 3, 3).unwrap();
    assert_eq!((r.width(), r.height()), (3, 3));

    let single = Region::new(2, 2, 2, 2).unwrap();
    assert_eq!((single.width(), single.height()), (1, 1));
}

#[test]
fn region_extent_spans_full_u32_range() {
    let wide = Region::new(0, 0, u32::MAX, 0).unwrap();
    assert_eq!(wide.width(), u64::from(u32::MAX) + 1);
    assert_eq!(wide.height(), 1);

    let full = Region::new(0, 0, u32::MAX, u32::MAX).unwrap();
    assert_eq!((full.width(), full.height()), (1 << 32, 1 << 32));

    let edge = Region::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX).unwrap();
    assert_eq!((edge.width(), edge.height()), (1, 1));
}

#[test]
fn region_deserialize_checks_corner_order() {
    let r: Region = serde_json::from_str(r#"{"x0":1,"y0":2,"x1":3,"y1":4}"#).unwrap();
    assert_eq!(r, Region::new(1, 2, 3, 4).unwrap());

    let err = serde_json::from_str::<Region>(r#"{"x0":5,"y0":0,"x1":1,"y1":0}"#).unwrap_err();
    assert!(err.to_string().contains("corners must be ordered"));

    let back: Region = serde_json::from_str(&serde_json::to_string(&r).unwrap()).unwrap();
    assert_eq!(back, r);
}

#[test]
fn rotate_dir_parses() {
    assert_eq!("left".parse::<RotateDir>().unwrap(), RotateDir::Left);
    assert_eq!(" Right ".parse::<RotateDir>().unwrap(), RotateDir::Right);
    assert_eq!("cw".parse::<RotateDir>().unwrap(), RotateDir::Right);
    assert!("up".parse::<RotateDir>().unwrap_err().is_invalid_argument());
}

#[test]
fn rotate_dir_serde_is_snake_case() {
    let s = serde_json::to_string(&RotateDir::Left).unwrap();
    assert_eq!(s, "\"left\"");
    let d: RotateDir = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(d, RotateDir::Right);
}
