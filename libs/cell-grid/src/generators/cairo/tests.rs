use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_pentagon_points() {
    let cells = cairo(&GridParams::new(1, 1, 2.0, Point::new(10.0, 10.0, 3.0)));
    let expected = [
        Point::new(9.0, 8.0, 3.0),
        Point::new(11.0, 8.0, 3.0),
        Point::new(12.0, 10.0, 3.0),
        Point::new(10.0, 12.0, 3.0),
        Point::new(8.0, 10.0, 3.0),
        Point::new(9.0, 8.0, 3.0),
    ];
    assert_eq!(cells[0].points(), &expected);
}

#[test]
fn test_counter_clockwise_and_closed() {
    for cell in cairo(&GridParams::new(3, 3, 1.0, Point::ZERO)) {
        assert!(cell.is_closed());
        assert_eq!(cell.vertex_count(), 5);
        assert!(cell.signed_area() > 0.0);
    }
}

#[test]
fn test_lattice_matches_hex() {
    let params = GridParams::new(2, 2, 1.0, Point::ZERO);
    let pentagons = cairo(&params);
    let hexagons = crate::generators::hex(&params);
    for (p, h) in pentagons.iter().zip(hexagons.iter()) {
        // Bottom edge midpoint sits one size below the shared centre.
        let bottom_mid = (p.points()[0] + p.points()[1]) * 0.5;
        let centre = h.centroid();
        assert_abs_diff_eq!(bottom_mid.x, centre.x, epsilon = 1e-9);
        assert_abs_diff_eq!(bottom_mid.y, centre.y - 1.0, epsilon = 1e-9);
    }
}
