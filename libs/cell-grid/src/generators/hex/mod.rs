//! Pointy-top hexagon tiling.

use std::f64::consts::PI;

use crate::{
    generators::{row_major, row_offset},
    geometry::{Cell, Point},
    params::GridParams,
};

/// Pointy-top regular hexagons with side (and circumradius) `size`.
///
/// Centres sit on a `√3·size` × `1.5·size` lattice with odd rows shifted by
/// half the horizontal pitch. Vertex `k` lies at angle `60°·k − 30°`.
pub fn hex(params: &GridParams) -> Vec<Cell> {
    let s = params.size;
    let pitch_x = 3f64.sqrt() * s;
    let pitch_y = 1.5 * s;
    let o = params.origin;

    row_major(params)
        .map(|(row, col)| {
            let center = Point::new(
                o.x + col as f64 * pitch_x + row_offset(row, pitch_x),
                o.y + row as f64 * pitch_y,
                o.z,
            );
            hexagon(center, s)
        })
        .collect()
}

/// One pointy-top hexagon around `center`.
pub fn hexagon(center: Point, radius: f64) -> Cell {
    let vertices = (0..6)
        .map(|k| {
            let angle = (60.0 * k as f64 - 30.0) * PI / 180.0;
            let (sin, cos) = angle.sin_cos();
            Point::new(center.x + radius * cos, center.y + radius * sin, center.z)
        })
        .collect();
    Cell::closed(vertices)
}

#[cfg(test)]
mod tests;
