use super::*;

fn unit_square_at(x: f64, y: f64) -> Cell {
    Cell::closed(vec![
        Point::new(x, y, 0.0),
        Point::new(x + 1.0, y, 0.0),
        Point::new(x + 1.0, y + 1.0, 0.0),
        Point::new(x, y + 1.0, 0.0),
    ])
}

#[test]
fn test_reversed_edge_is_duplicate() {
    let mut set = EdgeSet::new();
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(0.0, 1.0, 0.0);
    assert!(set.add_unique(a, b));
    assert!(!set.add_unique(b, a));
    assert_eq!(set.len(), 1);
    assert_eq!(set.segments()[0], Segment::new(a, b));
}

#[test]
fn test_rounding_merges_near_coincident_endpoints() {
    let mut set = EdgeSet::new();
    set.add_unique(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    let inserted = set.add_unique(
        Point::new(1.0 + 1e-9, 0.0, 0.0),
        Point::new(-1e-9, 0.0, 0.0),
    );
    assert!(!inserted);
}

#[test]
fn test_precision_is_configurable() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(1.0, 0.0, 0.0);
    let b_shifted = Point::new(1.004, 0.0, 0.0);

    let mut fine = EdgeSet::new();
    fine.add_unique(a, b);
    assert!(fine.add_unique(a, b_shifted));

    let mut coarse = EdgeSet::with_decimals(2);
    coarse.add_unique(a, b);
    assert!(!coarse.add_unique(a, b_shifted));
}

#[test]
fn test_adjacent_cells_share_one_edge() {
    let mut set = EdgeSet::new();
    set.add_cell(&unit_square_at(0.0, 0.0));
    set.add_cell(&unit_square_at(1.0, 0.0));
    assert_eq!(set.len(), 7);
}

#[test]
fn test_implicitly_closed_cell_adds_closing_edge() {
    let mut set = EdgeSet::new();
    set.add_cell(&Cell::new(vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_short_cells_are_ignored() {
    let mut set = EdgeSet::new();
    set.add_cell(&Cell::new(vec![Point::ZERO]));
    set.add_cell(&Cell::new(Vec::new()));
    assert!(set.is_empty());
}

#[test]
fn test_extend_from_cells_keeps_insertion_order() {
    let cells = [unit_square_at(0.0, 0.0), unit_square_at(0.0, 1.0)];
    let mut set = EdgeSet::default();
    set.extend(cells.iter());
    let segments = set.into_segments();
    assert_eq!(segments.len(), 7);
    assert_eq!(segments[0].start, Point::new(0.0, 0.0, 0.0));
}
