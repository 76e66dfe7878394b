//! # Polygon Math Tests

use super::*;
use approx::assert_abs_diff_eq;

fn rect(x0: f64, y0: f64, w: f64, h: f64, z: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0, z),
        Point::new(x0 + w, y0, z),
        Point::new(x0 + w, y0 + h, z),
        Point::new(x0, y0 + h, z),
    ]
}

#[test]
fn test_centroid_implicit_and_explicit_closure_agree() {
    let open = rect(2.0, 3.0, 4.0, 2.0, 0.0);
    let mut closed = open.clone();
    closed.push(open[0]);

    let a = centroid(&open);
    let b = centroid(&closed);
    assert_abs_diff_eq!(a.x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, 4.0, epsilon = 1e-12);
    assert_eq!(a, b);
}

#[test]
fn test_centroid_independent_of_winding() {
    let ccw = rect(0.0, 0.0, 2.0, 2.0, 0.0);
    let cw: Vec<Point> = ccw.iter().rev().copied().collect();
    assert_abs_diff_eq!(centroid(&ccw).x, centroid(&cw).x, epsilon = 1e-12);
    assert_abs_diff_eq!(centroid(&ccw).y, centroid(&cw).y, epsilon = 1e-12);
}

#[test]
fn test_centroid_is_area_weighted() {
    // L-shape: vertex mean and area centroid differ.
    let l_shape = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(2.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(1.0, 2.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    ];
    let c = centroid(&l_shape);
    // Three unit squares centred at (0.5,0.5), (1.5,0.5), (0.5,1.5).
    assert_abs_diff_eq!(c.x, 2.5 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.y, 2.5 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_centroid_degenerate_falls_back_to_mean() {
    let collinear = vec![
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(3.0, 3.0, 1.0),
    ];
    let c = centroid(&collinear);
    assert_abs_diff_eq!(c.x, 4.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.y, 4.0 / 3.0, epsilon = 1e-12);
    assert_eq!(c.z, 1.0);
}

#[test]
fn test_centroid_carries_first_z() {
    let c = centroid(&rect(0.0, 0.0, 1.0, 1.0, 7.5));
    assert_eq!(c.z, 7.5);
}

#[test]
fn test_centroid_empty_is_origin() {
    assert_eq!(centroid(&[]), Point::ZERO);
}

#[test]
fn test_centroid_single_point() {
    let p = Point::new(3.0, -2.0, 1.0);
    assert_eq!(centroid(&[p]), p);
}

#[test]
fn test_average_edge_length() {
    let r = rect(0.0, 0.0, 4.0, 2.0, 0.0);
    assert_abs_diff_eq!(average_edge_length(&r), 3.0, epsilon = 1e-12);

    let mut closed = r.clone();
    closed.push(r[0]);
    assert_abs_diff_eq!(average_edge_length(&closed), 3.0, epsilon = 1e-12);

    assert_eq!(average_edge_length(&[]), 0.0);
}

#[test]
fn test_signed_area_winding() {
    let ccw = rect(0.0, 0.0, 3.0, 2.0, 0.0);
    let cw: Vec<Point> = ccw.iter().rev().copied().collect();
    assert_abs_diff_eq!(signed_area(&ccw), 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(signed_area(&cw), -6.0, epsilon = 1e-12);
    assert_eq!(signed_area(&ccw[..2]), 0.0);
}

#[test]
fn test_bounding_box() {
    let (min, max) = bounding_box(&rect(-1.0, 2.0, 3.0, 4.0, 0.0)).unwrap();
    assert_eq!(min, Point::new(-1.0, 2.0, 0.0));
    assert_eq!(max, Point::new(2.0, 6.0, 0.0));
    assert!(bounding_box(&[]).is_none());
}

#[test]
fn test_curve_centroid_open_uses_bbox_centre() {
    let open = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(4.0, 2.0, 0.0),
    ];
    assert_eq!(curve_centroid(&open), Point::new(2.0, 1.0, 0.0));

    let mut closed = rect(0.0, 0.0, 2.0, 2.0, 0.0);
    closed.push(closed[0]);
    assert_eq!(curve_centroid(&closed), Point::new(1.0, 1.0, 0.0));
}
