//! # Polygon Math
//!
//! Shoelace-based area centroid with a degenerate fallback, edge-length
//! averaging and small helpers over point slices.
//!
//! All functions accept explicitly closed point sequences (last point equal
//! to the first within [`CLOSURE_EPSILON`]) as well as implicitly closed ones
//! (index `n` wraps back to `0`). Only the XY projection contributes to area
//! terms; z is carried through from the first vertex.

use crate::geometry::Point;
use config::constants::{CLOSURE_EPSILON, DEGENERATE_AREA_EPSILON};

/// Whether the last point repeats the first within [`CLOSURE_EPSILON`].
///
/// # Examples
/// ```
/// use cell_grid::{polygon::is_closed, Point};
///
/// let open = [Point::ZERO, Point::X, Point::Y];
/// assert!(!is_closed(&open));
/// let closed = [Point::ZERO, Point::X, Point::Y, Point::ZERO];
/// assert!(is_closed(&closed));
/// ```
pub fn is_closed(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => first.distance(*last) < CLOSURE_EPSILON,
        _ => false,
    }
}

/// Drops the closing duplicate of an explicitly closed sequence.
pub fn distinct_vertices(points: &[Point]) -> &[Point] {
    if is_closed(points) {
        &points[..points.len() - 1]
    } else {
        points
    }
}

/// Raw shoelace terms: `(Σcross, Σ(x_i+x_{i+1})·cross, Σ(y_i+y_{i+1})·cross)`.
fn shoelace(vertices: &[Point]) -> (f64, f64, f64) {
    let n = vertices.len();
    let mut cross_sum = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cross_sum += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    (cross_sum, cx, cy)
}

/// Signed XY area: positive for counter-clockwise winding.
///
/// # Examples
/// ```
/// use cell_grid::{polygon::signed_area, Point};
///
/// let square = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0),
///     Point::new(2.0, 2.0, 0.0),
///     Point::new(0.0, 2.0, 0.0),
/// ];
/// assert_eq!(signed_area(&square), 4.0);
/// ```
pub fn signed_area(points: &[Point]) -> f64 {
    let vertices = distinct_vertices(points);
    if vertices.len() < 3 {
        return 0.0;
    }
    shoelace(vertices).0 * 0.5
}

/// Area centroid of a polygon.
///
/// Falls back to the arithmetic mean of the distinct vertices when the
/// shoelace sum is below [`DEGENERATE_AREA_EPSILON`] (collinear or repeated
/// points). The result carries the z of the first vertex. An empty slice
/// yields the origin.
///
/// # Examples
/// ```
/// use cell_grid::{polygon::centroid, Point};
///
/// let unit = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 0.0),
/// ];
/// assert_eq!(centroid(&unit), Point::new(0.5, 0.5, 0.0));
/// ```
pub fn centroid(points: &[Point]) -> Point {
    let vertices = distinct_vertices(points);
    let Some(first) = vertices.first() else {
        return Point::ZERO;
    };

    let (cross_sum, cx, cy) = shoelace(vertices);
    if cross_sum.abs() < DEGENERATE_AREA_EPSILON {
        return vertex_mean(vertices, first.z);
    }

    let area = cross_sum * 0.5;
    Point::new(cx / (6.0 * area), cy / (6.0 * area), first.z)
}

fn vertex_mean(vertices: &[Point], z: f64) -> Point {
    let n = vertices.len() as f64;
    let sx: f64 = vertices.iter().map(|p| p.x).sum();
    let sy: f64 = vertices.iter().map(|p| p.y).sum();
    Point::new(sx / n, sy / n, z)
}

/// Mean Euclidean distance between consecutive distinct vertices, wrapping
/// from the last back to the first. Returns `0.0` for an empty slice.
///
/// Used to scale offset distances to the local cell size.
pub fn average_edge_length(points: &[Point]) -> f64 {
    let vertices = distinct_vertices(points);
    let n = vertices.len();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = (0..n)
        .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
        .sum();
    total / n as f64
}

/// Axis-aligned bounds as `(min, max)`, or `None` for an empty slice.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

/// Centre used when transforming an arbitrary curve about itself: the area
/// centroid for closed curves, the bounding-box centre for open ones.
pub fn curve_centroid(points: &[Point]) -> Point {
    if is_closed(points) {
        return centroid(points);
    }
    bounding_box(points)
        .map(|(min, max)| (min + max) * 0.5)
        .unwrap_or(Point::ZERO)
}

#[cfg(test)]
mod tests;
