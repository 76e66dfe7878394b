//! Cairo-style pentagon tiling.

use crate::{
    generators::{row_major, row_offset},
    geometry::{Cell, Point},
    params::GridParams,
};

/// Irregular pentagons on the hexagon lattice.
///
/// Centres follow [`hex`](super::hex) exactly. Each pentagon has a flat
/// bottom edge of width `size`, side points at `±size` on the centre line
/// and an apex `size` above the centre. The shapes are a stylised Cairo
/// approximation and are not guaranteed to tile without gaps.
pub fn cairo(params: &GridParams) -> Vec<Cell> {
    let s = params.size;
    let pitch_x = 3f64.sqrt() * s;
    let pitch_y = 1.5 * s;
    let a = 0.5 * s;
    let b = s;
    let o = params.origin;

    row_major(params)
        .map(|(row, col)| {
            let cx = o.x + col as f64 * pitch_x + row_offset(row, pitch_x);
            let cy = o.y + row as f64 * pitch_y;
            Cell::closed(vec![
                Point::new(cx - a, cy - b, o.z),
                Point::new(cx + a, cy - b, o.z),
                Point::new(cx + b, cy, o.z),
                Point::new(cx, cy + b, o.z),
                Point::new(cx - b, cy, o.z),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests;
