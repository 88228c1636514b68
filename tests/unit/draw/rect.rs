use super::*;
use crate::foundation::pixel::rgb;

const BG: Pixel = 0x1111_11ff;

fn canvas_5x5() -> Vec<Pixel> {
    vec![BG; 25]
}

fn at(px: &[Pixel], x: usize, y: usize) -> Pixel {
    px[y * 5 + x]
}

fn inside(r: Region, x: u32, y: u32) -> bool {
    (r.x0..=r.x1).contains(&x) && (r.y0..=r.y1).contains(&y)
}

fn on_edge(r: Region, x: u32, y: u32) -> bool {
    inside(r, x, y) && (x == r.x0 || x == r.x1 || y == r.y0 || y == r.y1)
}

#[test]
fn fill_only_sets_the_nine_interior_pixels() {
    let c = rgb(200, 0, 0);
    let mut px = canvas_5x5();
    let region = Region::new(1, 1, 3, 3).unwrap();
    draw_rect(
        &mut PixelViewMut::new(5, 5, &mut px).unwrap(),
        region,
        TRANSPARENT,
        c,
    )
    .unwrap();

    for y in 0..5 {
        for x in 0..5 {
            let want = if inside(region, x as u32, y as u32) { c } else { BG };
            assert_eq!(at(&px, x, y), want, "({x},{y})");
        }
    }
    assert_eq!(px.iter().filter(|&&p| p == c).count(), 9);
}

#[test]
fn stroke_covers_border_and_keeps_fill_center() {
    let c = rgb(200, 0, 0);
    let c2 = rgb(0, 0, 200);
    let mut px = canvas_5x5();
    let region = Region::new(1, 1, 3, 3).unwrap();
    draw_rect(&mut PixelViewMut::new(5, 5, &mut px).unwrap(), region, c2, c).unwrap();

    assert_eq!(at(&px, 2, 2), c);
    assert_eq!(px.iter().filter(|&&p| p == c2).count(), 8);
    for y in 0..5u32 {
        for x in 0..5u32 {
            if on_edge(region, x, y) {
                assert_eq!(at(&px, x as usize, y as usize), c2, "({x},{y})");
            } else if !inside(region, x, y) {
                assert_eq!(at(&px, x as usize, y as usize), BG, "({x},{y})");
            }
        }
    }
}

#[test]
fn stroke_only_leaves_interior_alone() {
    let c2 = rgb(0, 200, 0);
    let mut px = canvas_5x5();
    draw_rect(
        &mut PixelViewMut::new(5, 5, &mut px).unwrap(),
        Region::new(0, 0, 4, 4).unwrap(),
        c2,
        TRANSPARENT,
    )
    .unwrap();
    assert_eq!(at(&px, 0, 0), c2);
    assert_eq!(at(&px, 4, 2), c2);
    assert_eq!(at(&px, 2, 2), BG);
    assert_eq!(px.iter().filter(|&&p| p == c2).count(), 16);
}

#[test]
fn both_transparent_is_noop() {
    let mut px = canvas_5x5();
    draw_rect(
        &mut PixelViewMut::new(5, 5, &mut px).unwrap(),
        Region::new(0, 0, 4, 4).unwrap(),
        TRANSPARENT,
        TRANSPARENT,
    )
    .unwrap();
    assert_eq!(px, canvas_5x5());
}

#[test]
fn single_pixel_region_takes_stroke() {
    let mut px = canvas_5x5();
    draw_rect(
        &mut PixelViewMut::new(5, 5, &mut px).unwrap(),
        Region::new(4, 0, 4, 0).unwrap(),
        rgb(1, 2, 3),
        rgb(9, 9, 9),
    )
    .unwrap();
    assert_eq!(at(&px, 4, 0), rgb(1, 2, 3));
    assert_eq!(px.iter().filter(|&&p| p != BG).count(), 1);
}

#[test]
fn region_past_edge_is_rejected_without_writes() {
    let mut px = canvas_5x5();
    let err = draw_rect(
        &mut PixelViewMut::new(5, 5, &mut px).unwrap(),
        Region::new(2, 2, 5, 3).unwrap(),
        rgb(1, 1, 1),
        rgb(2, 2, 2),
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(px, canvas_5x5());
}

#[test]
fn unordered_literal_region_is_rejected() {
    let mut px = canvas_5x5();
    let region = Region {
        x0: 3,
        y0: 0,
        x1: 1,
        y1: 0,
    };
    let err = draw_rect(
        &mut PixelViewMut::new(5, 5, &mut px).unwrap(),
        region,
        rgb(1, 1, 1),
        TRANSPARENT,
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
}
