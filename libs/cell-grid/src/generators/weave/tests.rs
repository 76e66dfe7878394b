use super::*;
use crate::polygon::{bounding_box, signed_area};
use approx::assert_abs_diff_eq;

#[test]
fn test_even_rows_are_horizontal_strips() {
    let cells = weave(&GridParams::new(1, 1, 2.0, Point::ZERO).with_band_ratio(0.5));
    let (min, max) = bounding_box(cells[0].points()).unwrap();
    assert_abs_diff_eq!(min.x, 0.0);
    assert_abs_diff_eq!(max.x, 2.0);
    assert_abs_diff_eq!(min.y, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(max.y, 1.5, epsilon = 1e-12);
}

#[test]
fn test_odd_rows_are_vertical_strips() {
    let cells = weave(&GridParams::new(1, 2, 2.0, Point::ZERO).with_band_ratio(0.5));
    let (min, max) = bounding_box(cells[1].points()).unwrap();
    assert_abs_diff_eq!(min.x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(max.x, 1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(min.y, 2.0);
    assert_abs_diff_eq!(max.y, 4.0);
}

#[test]
fn test_default_ratio_area() {
    let cells = weave(&GridParams::new(3, 3, 1.0, Point::ZERO));
    for cell in &cells {
        assert_abs_diff_eq!(signed_area(cell.points()), 0.6, epsilon = 1e-12);
    }
}

#[test]
fn test_ratio_is_clamped_before_use() {
    let params = GridParams::new(1, 1, 1.0, Point::ZERO).with_band_ratio(5.0);
    let cells = weave(&params);
    assert_abs_diff_eq!(signed_area(cells[0].points()), 0.95, epsilon = 1e-12);
}
