//! Equilateral triangle tiling.

use crate::{
    generators::{row_major, row_offset},
    geometry::{Cell, Point},
    params::GridParams,
};

/// Equilateral triangles of side `size` in staggered strips.
///
/// Row height is `size·√3/2` and odd rows shift right by `size/2`. Each
/// `(row, col)` slot holds one triangle standing on its base corner
/// `(x0, y0)`: apex up when `row + col` is even, apex down otherwise.
pub fn tri(params: &GridParams) -> Vec<Cell> {
    let w = params.size;
    let h = params.size * 3f64.sqrt() / 2.0;
    let o = params.origin;

    row_major(params)
        .map(|(row, col)| {
            let x0 = o.x + col as f64 * w + row_offset(row, w);
            let y0 = o.y + row as f64 * h;
            let apex_y = if (row + col) % 2 == 0 { y0 + h } else { y0 - h };
            Cell::closed(vec![
                Point::new(x0, y0, o.z),
                Point::new(x0 + w / 2.0, apex_y, o.z),
                Point::new(x0 + w, y0, o.z),
            ])
        })
        .collect()
}
