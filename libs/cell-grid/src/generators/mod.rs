//! # Tessellation Generators
//!
//! Five independent pure functions, each mapping [`GridParams`] to
//! `x * y` explicitly closed cells laid out row-major (row `0..y` outer,
//! column `0..x` inner). The origin is the `(0, 0)` grid corner and every
//! point carries the origin's z.
//!
//! Generators never validate: [`GridParams`] guarantees `x, y >= 1` and
//! `size > 0`.

pub mod cairo;
pub mod hex;
pub mod square;
pub mod tri;
pub mod weave;

pub use cairo::cairo;
pub use hex::hex;
pub use square::square;
pub use tri::tri;
pub use weave::weave;

use crate::params::GridParams;

/// Horizontal offset of a staggered row: half a pitch on odd rows.
#[inline]
pub(crate) fn row_offset(row: u32, pitch: f64) -> f64 {
    if row % 2 == 0 {
        0.0
    } else {
        pitch / 2.0
    }
}

/// Iterates `(row, col)` pairs in row-major order.
pub(crate) fn row_major(params: &GridParams) -> impl Iterator<Item = (u32, u32)> {
    let (x, y) = (params.x, params.y);
    (0..y).flat_map(move |row| (0..x).map(move |col| (row, col)))
}
