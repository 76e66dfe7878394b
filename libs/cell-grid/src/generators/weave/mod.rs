//! Basket-weave strip tiling.

use crate::{
    generators::row_major,
    geometry::{Cell, Point},
    params::GridParams,
};

/// Alternating horizontal and vertical strips, one per module.
///
/// Strip thickness is `band_ratio · size`. Even rows hold horizontal strips
/// centred on the module's mid-height; odd rows hold vertical strips centred
/// on its mid-width. Strips of neighbouring modules do not overlap.
pub fn weave(params: &GridParams) -> Vec<Cell> {
    let s = params.size;
    let half = params.band_ratio * s / 2.0;
    let o = params.origin;

    row_major(params)
        .map(|(row, col)| {
            let x0 = o.x + col as f64 * s;
            let y0 = o.y + row as f64 * s;
            let (min_x, min_y, max_x, max_y) = if row % 2 == 0 {
                let mid = y0 + s / 2.0;
                (x0, mid - half, x0 + s, mid + half)
            } else {
                let mid = x0 + s / 2.0;
                (mid - half, y0, mid + half, y0 + s)
            };
            Cell::closed(vec![
                Point::new(min_x, min_y, o.z),
                Point::new(max_x, min_y, o.z),
                Point::new(max_x, max_y, o.z),
                Point::new(min_x, max_y, o.z),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests;
