//! # Sharp-Corner Offset
//!
//! Pure-Rust planar offset for simple polygons, used when no host kernel is
//! injected. Browser-safe.
//!
//! ## Algorithm
//!
//! 1. Project the curve into the plane's local frame and drop vertices
//!    closer than the tolerance to their predecessor
//! 2. Shift every edge along its outward normal by the distance
//! 3. Place each corner at the intersection of its two shifted edge lines
//!    (a sharp miter); parallel neighbours shift the vertex instead
//! 4. Reject the result when any edge reversed or shrank below the
//!    tolerance, or the area vanished or flipped sign
//!
//! Rejection yields no curve at all. Splitting a collapsing polygon into
//! several islands is left to full CAD kernels.

use super::{OffsetKernel, Plane, Polyline};
use cell_grid::{polygon, Point};
use config::constants::{
    CLOSURE_EPSILON, DEFAULT_OFFSET_TOLERANCE, DEGENERATE_AREA_EPSILON, PARALLEL_EPSILON,
};
use glam::DVec2;
use tracing::trace;

/// Built-in offset kernel with sharp (mitered) corners.
///
/// # Examples
/// ```
/// use cell_motif::kernel::{OffsetKernel, Plane, SharpOffsetKernel};
/// use cell_grid::Point;
///
/// let square = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0),
///     Point::new(2.0, 2.0, 0.0),
///     Point::new(0.0, 2.0, 0.0),
/// ];
/// let rings = SharpOffsetKernel.offset(&square, &Plane::world_xy(), -0.5, 1e-3);
/// assert_eq!(rings.len(), 1);
/// assert_eq!(rings[0][0], Point::new(0.5, 0.5, 0.0));
///
/// // Shrinking past the centre collapses the square.
/// assert!(SharpOffsetKernel.offset(&square, &Plane::world_xy(), -1.5, 1e-3).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpOffsetKernel;

impl OffsetKernel for SharpOffsetKernel {
    fn offset(
        &self,
        curve: &[Point],
        plane: &Plane,
        distance: f64,
        tolerance: f64,
    ) -> Vec<Polyline> {
        let local: Vec<DVec2> = polygon::distinct_vertices(curve)
            .iter()
            .map(|p| plane.to_local(*p))
            .collect();

        let Some(ring) = offset_ring(&local, distance, tolerance) else {
            trace!(distance, vertices = local.len(), "offset collapsed");
            return Vec::new();
        };

        let mut points: Vec<Point> = ring.iter().map(|uv| plane.to_world(*uv)).collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        vec![points]
    }
}

/// One edge shifted by the offset distance.
struct ShiftedEdge {
    origin: DVec2,
    dir: DVec2,
    shift: DVec2,
}

/// Offsets an implicitly closed 2D polygon; see the module docs.
///
/// Negative `distance` shrinks the polygon whatever its winding. Returns
/// the offset vertices (implicitly closed, same winding), or `None` when
/// the polygon is degenerate or the offset collapses.
pub fn offset_ring(vertices: &[DVec2], distance: f64, tolerance: f64) -> Option<Vec<DVec2>> {
    let tolerance = if tolerance.is_finite() {
        tolerance.max(CLOSURE_EPSILON)
    } else {
        DEFAULT_OFFSET_TOLERANCE
    };

    let vertices = dedup_within(vertices, tolerance);
    let n = vertices.len();
    if n < 3 {
        return None;
    }

    let area = signed_area_2d(&vertices);
    if area.abs() < DEGENERATE_AREA_EPSILON {
        return None;
    }
    if distance == 0.0 {
        return Some(vertices);
    }
    let orientation = area.signum();

    let edges: Vec<ShiftedEdge> = (0..n)
        .map(|i| {
            let a = vertices[i];
            let dir = vertices[(i + 1) % n] - a;
            // Right-hand normal points outward on counter-clockwise rings.
            let outward = DVec2::new(dir.y, -dir.x).normalize() * orientation;
            let shift = outward * distance;
            ShiftedEdge {
                origin: a + shift,
                dir,
                shift,
            }
        })
        .collect();

    let corners: Vec<DVec2> = (0..n)
        .map(|i| {
            let incoming = &edges[(i + n - 1) % n];
            let outgoing = &edges[i];
            miter(incoming, outgoing).unwrap_or(vertices[i] + outgoing.shift)
        })
        .collect();

    for (i, edge) in edges.iter().enumerate() {
        let moved = corners[(i + 1) % n] - corners[i];
        if moved.dot(edge.dir) <= 0.0 || moved.length() < tolerance {
            return None;
        }
    }

    let offset_area = signed_area_2d(&corners);
    if offset_area * orientation <= DEGENERATE_AREA_EPSILON {
        return None;
    }
    Some(corners)
}

/// Intersection of two shifted edge lines, `None` when parallel.
fn miter(p: &ShiftedEdge, q: &ShiftedEdge) -> Option<DVec2> {
    let denom = p.dir.perp_dot(q.dir);
    if denom.abs() <= PARALLEL_EPSILON * p.dir.length() * q.dir.length() {
        return None;
    }
    let t = (q.origin - p.origin).perp_dot(q.dir) / denom;
    Some(p.origin + p.dir * t)
}

/// Drops vertices within `tolerance` of their predecessor, wrapping.
fn dedup_within(vertices: &[DVec2], tolerance: f64) -> Vec<DVec2> {
    let mut kept: Vec<DVec2> = Vec::with_capacity(vertices.len());
    for &v in vertices {
        if kept.last().map_or(true, |last| last.distance(v) >= tolerance) {
            kept.push(v);
        }
    }
    while kept.len() > 1 && kept[0].distance(kept[kept.len() - 1]) < tolerance {
        kept.pop();
    }
    kept
}

fn signed_area_2d(vertices: &[DVec2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}
