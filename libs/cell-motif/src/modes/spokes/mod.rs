//! Spoke fans.

use crate::{curve::Curve, params::MotifParams};
use cell_grid::{Cell, Point, Segment};

/// Lines from the cell centroid to every vertex, followed by lines to every
/// edge midpoint, each rotated about the centroid.
///
/// A midpoint takes the z of its edge's first endpoint. An `n`-gon yields
/// `2n` lines.
///
/// # Examples
/// ```
/// use cell_grid::{generators::hex::hexagon, Point};
/// use cell_motif::{modes::spokes, MotifParams};
///
/// let lines = spokes(&hexagon(Point::ZERO, 1.0), &MotifParams::default());
/// assert_eq!(lines.len(), 12);
/// ```
pub fn spokes(cell: &Cell, params: &MotifParams) -> Vec<Curve> {
    let center = cell.centroid();
    let radians = params.rotation_radians();

    let to_vertices = cell.vertices().iter().map(|v| Segment::new(center, *v));
    let to_midpoints = cell.edges().map(|(a, b)| {
        Segment::new(
            center,
            Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, a.z),
        )
    });

    to_vertices
        .chain(to_midpoints)
        .map(|segment| Curve::from(segment).rotated(center, radians))
        .collect()
}
