//! # Motif Modes
//!
//! Per-cell motif construction. [`apply`] dispatches on the resolved
//! [`Mode`] and is the unit of work the patternizer runs in parallel.
//!
//! | Mode | Curves | Cutout | Counted |
//! |------|--------|--------|---------|
//! | concentric | every ring | innermost ring | always |
//! | star | the star | the star | always |
//! | spokes | `2n` lines | none | always |
//! | passthrough | the boundary | none | never |

pub mod concentric;
pub mod spokes;
pub mod star;

pub use concentric::concentric;
pub use spokes::spokes;
pub use star::star;

use crate::{
    curve::Curve,
    kernel::OffsetKernel,
    params::{Mode, MotifParams},
};
use cell_grid::{Cell, Point};
use tracing::trace;

/// Everything derived from one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMotif {
    /// Area centroid of the source cell.
    pub center: Point,
    /// Emitted curves in construction order.
    pub curves: Vec<Curve>,
    /// Closed curve suitable for perforation, if the mode yields one.
    pub cutout: Option<Curve>,
    /// Whether the cell counts toward the report's motif total.
    pub counted: bool,
}

/// Builds the motif for `cell`.
///
/// Returns `None` for malformed cells (fewer than three distinct
/// vertices); such cells contribute nothing, not even a centre.
pub fn apply<K>(cell: &Cell, params: &MotifParams, kernel: &K) -> Option<CellMotif>
where
    K: OffsetKernel + ?Sized,
{
    if !cell.is_polygon() {
        trace!(vertices = cell.vertex_count(), "skipping malformed cell");
        return None;
    }
    let center = cell.centroid();

    let motif = match params.mode {
        Mode::Concentric => {
            let curves = concentric(cell, params, kernel);
            let cutout = curves.last().cloned();
            CellMotif {
                center,
                curves,
                cutout,
                counted: true,
            }
        }
        Mode::Star => {
            let star = star(cell, params);
            CellMotif {
                center,
                counted: star.is_some(),
                cutout: star.clone(),
                curves: star.into_iter().collect(),
            }
        }
        Mode::Spokes => CellMotif {
            center,
            curves: spokes(cell, params),
            cutout: None,
            counted: true,
        },
        Mode::Passthrough => CellMotif {
            center,
            curves: vec![passthrough(cell)],
            cutout: None,
            counted: false,
        },
    };
    Some(motif)
}

/// The cell boundary as a polyline, points unchanged.
pub fn passthrough(cell: &Cell) -> Curve {
    Curve::polyline(cell.points().to_vec())
}
