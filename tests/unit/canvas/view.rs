use super::*;

#[test]
fn view_accepts_matching_length() {
    let px = [1u32, 2, 3, 4, 5, 6];
    let v = PixelView::new(3, 2, &px).unwrap();
    assert_eq!((v.width(), v.height()), (3, 2));
    assert_eq!(v.row(1), &[4, 5, 6]);
}

#[test]
fn view_rejects_length_mismatch() {
    let px = [0u32; 5];
    let err = PixelView::new(3, 2, &px).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("needs 6"));
}

#[test]
fn view_rejects_zero_dimension() {
    let mut px: [u32; 0] = [];
    assert!(PixelView::new(0, 4, &px).unwrap_err().is_invalid_argument());
    assert!(
        PixelViewMut::new(4, 0, &mut px)
            .unwrap_err()
            .is_invalid_argument()
    );
}

#[test]
fn mut_view_writes_through() {
    let mut px = [0u32; 4];
    {
        let mut v = PixelViewMut::new(2, 2, &mut px).unwrap();
        v.pixels_mut()[3] = 7;
        assert_eq!(&v.pixels()[2..], &[0, 7]);
    }
    assert_eq!(px, [0, 0, 0, 7]);
}

#[test]
fn pixel_count_rejects_empty_and_counts_pixels() {
    assert_eq!(pixel_count(4, 3).unwrap(), 12);
    assert!(pixel_count(0, 3).unwrap_err().is_invalid_argument());
    assert!(pixel_count(3, 0).unwrap_err().is_invalid_argument());
}
