//! Star perforations.

use crate::{
    curve::{rotate_points, Curve},
    params::MotifParams,
};
use cell_grid::{Cell, Point};

/// Star polygon alternating cell vertices with points pulled toward the
/// centroid.
///
/// With `n` distinct vertices, `spike = max(1, steps)` and `t` the clamped
/// inset, entry `i` visits vertex `(i · spike) mod n` followed by
/// `c + (v − c)(1 − t)` (keeping the vertex z). The result has `2n + 1`
/// points, closed by repeating the first, and is rotated about the cell
/// centroid. When `spike` shares a factor with `n` some vertices repeat.
///
/// Returns `None` for cells with fewer than three distinct vertices.
pub fn star(cell: &Cell, params: &MotifParams) -> Option<Curve> {
    let vertices = cell.vertices();
    let n = vertices.len();
    if n < 3 {
        return None;
    }

    let center = cell.centroid();
    let keep = 1.0 - params.inset_fraction();
    // Reduced first so `i * spike` stays below `n²` on 32-bit targets.
    let spike = params.steps.max(1) as usize % n;

    let mut points = Vec::with_capacity(2 * n + 1);
    for i in 0..n {
        let v = vertices[(i * spike) % n];
        points.push(v);
        points.push(Point::new(
            center.x + (v.x - center.x) * keep,
            center.y + (v.y - center.y) * keep,
            v.z,
        ));
    }
    points.push(points[0]);

    rotate_points(&mut points, center, params.rotation_radians());
    Some(Curve::polyline(points))
}
