//! # Info Report
//!
//! One-line human-readable summaries shown next to generated geometry.
//!
//! Numbers follow the host's display convention: rounded to a fixed number
//! of places, trailing zeros dropped, but always at least one decimal
//! (`1.0`, `0.25`, `2.333`).

use std::fmt;

/// Rounds `value` to `places` decimals (half away from zero) and renders it
/// with at least one decimal digit.
///
/// # Examples
/// ```
/// use cell_grid::report::format_rounded;
///
/// assert_eq!(format_rounded(1.0, 3), "1.0");
/// assert_eq!(format_rounded(0.25, 3), "0.25");
/// assert_eq!(format_rounded(2.0 / 3.0, 3), "0.667");
/// assert_eq!(format_rounded(12.5, 2), "12.5");
/// ```
pub fn format_rounded(value: f64, places: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Summary of one grid generation call.
///
/// Renders as
/// `Index: {i} | Pattern: {name} | Cells: {n} | Edges: {m} | Size: {s} | Grid: {X}x{Y}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridInfo<'a> {
    /// Resolved registry position.
    pub index: usize,
    /// Resolved pattern name.
    pub pattern: &'a str,
    /// Number of generated cells.
    pub cells: usize,
    /// Number of unique edges.
    pub edges: usize,
    /// Module size actually used.
    pub size: f64,
    /// Cells along X.
    pub x: u32,
    /// Cells along Y.
    pub y: u32,
}

impl fmt::Display for GridInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Index: {} | Pattern: {} | Cells: {} | Edges: {} | Size: {} | Grid: {}x{}",
            self.index,
            self.pattern,
            self.cells,
            self.edges,
            format_rounded(self.size, 3),
            self.x,
            self.y
        )
    }
}
