//! Concentric inward offset rings.

use crate::{
    curve::{rotate_points, Curve},
    kernel::{OffsetKernel, Plane, Polyline},
    params::MotifParams,
};
use cell_grid::{polygon, Cell};
use tracing::trace;

/// Repeatedly offsets the cell inward and collects every ring.
///
/// The step distance is `-inset · average_edge_length(cell)`, fixed for the
/// whole cell. Each iteration offsets every curve produced by the previous
/// one, rotates each result about its own centroid, and stops early once an
/// iteration produces nothing. At most `steps` iterations run. Offsetting
/// happens in the kernel's plane for the cell, or world XY when the cell is
/// not planar.
///
/// # Examples
/// ```
/// use cell_grid::{Cell, Point};
/// use cell_motif::{kernel::SharpOffsetKernel, modes::concentric, MotifParams};
///
/// let square = Cell::closed(vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// ]);
/// // 0.2 inset: rings of side 0.6 and 0.2, then collapse.
/// let rings = concentric(&square, &MotifParams::default(), &SharpOffsetKernel);
/// assert_eq!(rings.len(), 2);
/// ```
pub fn concentric<K>(cell: &Cell, params: &MotifParams, kernel: &K) -> Vec<Curve>
where
    K: OffsetKernel + ?Sized,
{
    let distance = -params.inset_fraction() * cell.average_edge_length();
    let plane = kernel
        .try_get_plane(cell.points())
        .unwrap_or_else(Plane::world_xy);
    let radians = params.rotation_radians();
    let tolerance = params.tolerance();

    let mut rings = Vec::new();
    let mut current: Vec<Polyline> = vec![cell.points().to_vec()];
    for step in 0..params.steps {
        let mut next = Vec::new();
        for curve in &current {
            for mut ring in kernel.offset(curve, &plane, distance, tolerance) {
                let center = polygon::curve_centroid(&ring);
                rotate_points(&mut ring, center, radians);
                next.push(ring);
            }
        }
        if next.is_empty() {
            trace!(step, distance, "offset produced no ring");
            break;
        }
        rings.extend(next.iter().cloned().map(Curve::polyline));
        current = next;
    }
    rings
}
