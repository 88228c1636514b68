use super::*;

#[test]
fn exact_fit_is_accepted() {
    check_fits(4, 3, 4, 3, Offset::default()).unwrap();
    check_fits(4, 3, 2, 1, Offset::new(2, 2)).unwrap();
}

#[test]
fn width_overflow_is_reported_first() {
    let err = check_fits(4, 3, 3, 4, Offset::new(2, 0)).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(err.to_string().contains("width"));
}

#[test]
fn height_overflow_is_rejected() {
    let err = check_fits(4, 3, 1, 2, Offset::new(0, 2)).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(err.to_string().contains("height"));
}

#[test]
fn negative_offsets_are_rejected() {
    assert!(
        check_fits(4, 4, 1, 1, Offset::new(-1, 0))
            .unwrap_err()
            .is_out_of_bounds()
    );
    assert!(
        check_fits(4, 4, 1, 1, Offset::new(0, -1))
            .unwrap_err()
            .is_out_of_bounds()
    );
}

#[test]
fn huge_offsets_do_not_overflow() {
    assert!(
        check_fits(4, 4, 1, 1, Offset::new(i64::MAX, 0))
            .unwrap_err()
            .is_out_of_bounds()
    );
}
