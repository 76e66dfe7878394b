use super::*;
use crate::{kernel::Plane, kernel::Polyline, params::Mode, MotifError};
use cell_grid::{generate, GridInput};

fn grid(pattern: &str, x: i64, y: i64) -> Vec<Cell> {
    generate(&GridInput {
        pattern: Some(pattern.into()),
        x: Some(x),
        y: Some(y),
        ..GridInput::default()
    })
    .unwrap()
    .cells
}

fn input(mode: &str) -> MotifInput {
    MotifInput {
        mode: Some(mode.into()),
        ..MotifInput::default()
    }
}

struct Collapsing;

impl OffsetKernel for Collapsing {
    fn offset(&self, _: &[Point], _: &Plane, _: f64, _: f64) -> Vec<Polyline> {
        Vec::new()
    }
}

#[test]
fn test_concentric_square_grid() {
    let cells = grid("square", 3, 2);
    let out = patternize(&cells, &MotifInput::default()).unwrap();
    assert_eq!(out.centers.len(), 6);
    assert_eq!(out.curves.len(), 12);
    assert_eq!(out.cutouts.len(), 6);
    assert_eq!(out.motif_count, 6);
    assert_eq!(
        out.report,
        "Cells: 6 | Mode: concentric | Inset: 0.2 | Steps: 3 | Rot: 0.0° | Motifs: 6"
    );
}

#[test]
fn test_centers_follow_cell_order() {
    let cells = grid("hex", 4, 4);
    let out = patternize(&cells, &input("spokes")).unwrap();
    let expected: Vec<Point> = cells.iter().map(Cell::centroid).collect();
    assert_eq!(out.centers, expected);
}

#[test]
fn test_curves_follow_cell_order() {
    let cells = grid("square", 5, 5);
    let out = patternize(&cells, &input("star")).unwrap();
    for (cell, curve) in cells.iter().zip(&out.curves) {
        assert_eq!(curve.points()[0], cell.points()[0]);
    }
}

#[test]
fn test_spokes_counts() {
    let cells = grid("tri", 2, 2);
    let out = patternize(&cells, &input("spokes")).unwrap();
    assert_eq!(out.curves.len(), 4 * 6);
    assert!(out.cutouts.is_empty());
    assert_eq!(out.motif_count, 4);
}

#[test]
fn test_passthrough_for_unknown_mode() {
    let cells = grid("cairo", 2, 1);
    let out = patternize(&cells, &input("ripple")).unwrap();
    assert_eq!(out.curves.len(), 2);
    assert_eq!(out.centers.len(), 2);
    assert!(out.cutouts.is_empty());
    assert_eq!(out.motif_count, 0);
    assert!(out.report.contains("Mode: passthrough"));
}

#[test]
fn test_malformed_cells_are_skipped() {
    let mut cells = grid("square", 2, 1);
    cells.insert(1, Cell::new(vec![Point::ZERO, Point::X]));
    let out = patternize(&cells, &input("star")).unwrap();
    assert_eq!(out.centers.len(), 2);
    assert_eq!(out.curves.len(), 2);
    assert!(out.report.starts_with("Cells: 3 |"));
    assert!(out.report.ends_with("Motifs: 2"));
}

#[test]
fn test_collapsing_kernel_still_reports_centers() {
    let cells = grid("square", 2, 2);
    let params = MotifParams::for_mode(Mode::Concentric);
    let out = patternize_with(&cells, &params, &Collapsing);
    assert!(out.curves.is_empty());
    assert!(out.cutouts.is_empty());
    assert_eq!(out.centers.len(), 4);
    assert_eq!(out.motif_count, 4);
}

#[test]
fn test_report_rounding() {
    let cells = grid("square", 1, 1);
    let out = patternize(
        &cells,
        &MotifInput {
            mode: Some("Star".into()),
            inset: Some(0.33333),
            steps: Some(2),
            rotate: Some(12.3456),
            ..MotifInput::default()
        },
    )
    .unwrap();
    assert_eq!(
        out.report,
        "Cells: 1 | Mode: star | Inset: 0.333 | Steps: 2 | Rot: 12.35° | Motifs: 1"
    );
}

#[test]
fn test_empty_input() {
    let out = patternize(&[], &MotifInput::default()).unwrap();
    assert!(out.curves.is_empty());
    assert!(out.centers.is_empty());
    assert!(out.report.starts_with("Cells: 0 |"));
}

#[test]
fn test_invalid_tolerance_propagates() {
    let err = patternize(
        &grid("square", 1, 1),
        &MotifInput {
            tolerance: Some(-1.0),
            ..MotifInput::default()
        },
    )
    .unwrap_err();
    assert_eq!(err, MotifError::InvalidTolerance(-1.0));
}
