use super::*;
use crate::polygon::centroid;

#[test]
fn test_single_unit_square() {
    let cells = square(&GridParams::new(1, 1, 1.0, Point::ZERO));
    assert_eq!(cells.len(), 1);
    assert_eq!(
        cells[0].points(),
        &[
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
        ]
    );
    assert_eq!(centroid(cells[0].points()), Point::new(0.5, 0.5, 0.0));
}

#[test]
fn test_row_major_order() {
    let cells = square(&GridParams::new(3, 2, 2.0, Point::ZERO));
    // Second cell sits to the right of the first; fourth starts row 1.
    assert_eq!(cells[1].points()[0], Point::new(2.0, 0.0, 0.0));
    assert_eq!(cells[3].points()[0], Point::new(0.0, 2.0, 0.0));
}

#[test]
fn test_origin_offsets_and_z() {
    let origin = Point::new(10.0, -5.0, 3.0);
    let cells = square(&GridParams::new(2, 2, 1.0, origin));
    assert_eq!(cells[0].points()[0], origin);
    assert!(cells.iter().flat_map(|c| c.points()).all(|p| p.z == 3.0));
}

#[test]
fn test_single_column() {
    let cells = square(&GridParams::new(1, 4, 1.0, Point::ZERO));
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[3].points()[0], Point::new(0.0, 3.0, 0.0));
}
