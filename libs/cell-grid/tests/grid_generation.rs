//! End-to-end grid generation through the public API.

use approx::assert_abs_diff_eq;
use cell_grid::{generate, polygon, GridInput, IndexValue, Point, Registry};

fn request(pattern: &str, x: i64, y: i64, size: f64) -> GridInput {
    GridInput {
        pattern: Some(pattern.into()),
        x: Some(x),
        y: Some(y),
        size: Some(size),
        ..GridInput::default()
    }
}

#[test]
fn square_grid_edge_count_matches_formula() {
    for (n, m) in [(1, 1), (2, 3), (5, 1), (7, 4), (10, 10)] {
        let out = generate(&request("square", n, m, 1.0)).unwrap();
        let expected = n * (m + 1) + m * (n + 1);
        assert_eq!(out.edges.len() as i64, expected, "{n}x{m}");
    }
}

#[test]
fn every_pattern_emits_closed_cells_on_origin_plane() {
    let origin = Point::new(-3.0, 4.0, 2.5);
    for name in Registry::standard().names() {
        let input = GridInput {
            origin: Some(origin),
            ..request(name, 4, 3, 0.75)
        };
        let out = generate(&input).unwrap();
        assert_eq!(out.cells.len(), 12, "{name}");
        for cell in &out.cells {
            assert!(cell.is_closed(), "{name}");
            assert!(cell.is_polygon(), "{name}");
            assert!(cell.points().iter().all(|p| p.z == 2.5), "{name}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for name in Registry::standard().names() {
        let a = generate(&request(name, 6, 5, 1.3)).unwrap();
        let b = generate(&request(name, 6, 5, 1.3)).unwrap();
        assert_eq!(a, b, "{name}");
    }
}

#[test]
fn hex_centroids_match_lattice() {
    let out = generate(&request("hex", 3, 3, 2.0)).unwrap();
    let pitch_x = 3f64.sqrt() * 2.0;
    for (i, center) in out.centers.iter().enumerate() {
        let (row, col) = (i / 3, i % 3);
        let shift = if row % 2 == 1 { pitch_x / 2.0 } else { 0.0 };
        assert_abs_diff_eq!(center.x, col as f64 * pitch_x + shift, epsilon = 1e-6);
        assert_abs_diff_eq!(center.y, row as f64 * 3.0, epsilon = 1e-6);
    }
}

#[test]
fn hex_neighbours_share_edges() {
    // A single hex has 6 edges; each extra cell in a row shares one.
    let out = generate(&request("hex", 3, 1, 1.0)).unwrap();
    assert_eq!(out.edges.len(), 16);
}

#[test]
fn index_and_name_fallbacks() {
    let by_index = |value: IndexValue| {
        let input = GridInput {
            index: Some(value),
            x: Some(1),
            y: Some(1),
            ..GridInput::default()
        };
        generate(&input).unwrap().pattern
    };
    assert_eq!(by_index(IndexValue::from(-5)), "square");
    assert_eq!(by_index(IndexValue::from(999)), "cairo");
    assert_eq!(by_index(IndexValue::from("not a number")), "square");

    assert_eq!(generate(&request("blob", 1, 1, 1.0)).unwrap().pattern, "square");
    assert_eq!(generate(&request("  Weave", 1, 1, 1.0)).unwrap().pattern, "weave");
}

#[test]
fn weave_cells_keep_their_area() {
    let out = generate(&request("weave", 4, 4, 2.0)).unwrap();
    for cell in &out.cells {
        assert_abs_diff_eq!(polygon::signed_area(cell.points()), 0.6 * 4.0, epsilon = 1e-9);
    }
}

#[test]
fn output_serializes_to_json() {
    let out = generate(&request("tri", 2, 1, 1.0)).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["pattern"], "tri");
    assert_eq!(json["cells"].as_array().unwrap().len(), 2);
    assert_eq!(json["params"]["x"], 2);
}
