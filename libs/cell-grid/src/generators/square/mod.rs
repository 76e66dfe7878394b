//! Square tiling.

use crate::{
    generators::row_major,
    geometry::{Cell, Point},
    params::GridParams,
};

/// Axis-aligned squares of side `size` on an `x` × `y` grid, no row offset.
///
/// Vertices run counter-clockwise from the lower-left corner.
///
/// # Examples
/// ```
/// use cell_grid::{generators::square, GridParams, Point};
///
/// let cells = square(&GridParams::new(3, 2, 1.0, Point::ZERO));
/// assert_eq!(cells.len(), 6);
/// ```
pub fn square(params: &GridParams) -> Vec<Cell> {
    let s = params.size;
    let o = params.origin;

    row_major(params)
        .map(|(row, col)| {
            let x0 = o.x + col as f64 * s;
            let y0 = o.y + row as f64 * s;
            Cell::closed(vec![
                Point::new(x0, y0, o.z),
                Point::new(x0 + s, y0, o.z),
                Point::new(x0 + s, y0 + s, o.z),
                Point::new(x0, y0 + s, o.z),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests;
