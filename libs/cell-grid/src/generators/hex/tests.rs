use super::*;
use crate::polygon::centroid;
use approx::assert_abs_diff_eq;

#[test]
fn test_single_hex_centroid_matches_center() {
    for size in [0.25, 1.0, 7.0, 120.0] {
        let origin = Point::new(13.0, -4.0, 1.0);
        let cells = hex(&GridParams::new(1, 1, size, origin));
        let c = centroid(cells[0].points());
        assert_abs_diff_eq!(c.x, origin.x, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, origin.y, epsilon = 1e-6);
        assert_eq!(c.z, origin.z);
    }
}

#[test]
fn test_vertices_on_circumcircle() {
    let cell = hexagon(Point::new(2.0, 3.0, 0.0), 1.5);
    assert_eq!(cell.vertex_count(), 6);
    for v in cell.vertices() {
        assert_abs_diff_eq!(v.distance(Point::new(2.0, 3.0, 0.0)), 1.5, epsilon = 1e-12);
    }
}

#[test]
fn test_neighbours_share_an_edge() {
    let cells = hex(&GridParams::new(2, 1, 1.0, Point::ZERO));
    let right_of_first: Vec<_> = cells[0].vertices()[..2].to_vec();
    let left_of_second = [cells[1].vertices()[4], cells[1].vertices()[3]];
    for (a, b) in right_of_first.iter().zip(left_of_second.iter()) {
        assert_abs_diff_eq!(a.distance(*b), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_odd_row_offset() {
    let cells = hex(&GridParams::new(1, 2, 1.0, Point::ZERO));
    let c0 = centroid(cells[0].points());
    let c1 = centroid(cells[1].points());
    assert_abs_diff_eq!(c1.x - c0.x, 3f64.sqrt() / 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c1.y - c0.y, 1.5, epsilon = 1e-9);
}
