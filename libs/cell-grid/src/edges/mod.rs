//! # Edge Canonicalizer
//!
//! Collapses geometrically coincident edges of adjacent cells into a single
//! undirected segment.
//!
//! ## Keys
//!
//! Each endpoint is keyed by its coordinates scaled by `10^decimals` and
//! rounded to integers. The two endpoint keys are ordered lexicographically,
//! so `(a, b)` and `(b, a)` share one key. Output order is insertion order.

use std::collections::HashSet;

use crate::geometry::{Cell, Point, Segment};
use config::constants::{edge_key_scale, EDGE_KEY_DECIMALS};

/// Rounded integer coordinates of one endpoint.
type EndpointKey = [i64; 3];

/// Direction-independent key of one edge.
type EdgeKey = (EndpointKey, EndpointKey);

/// Insertion-ordered set of unique undirected edges.
///
/// # Examples
/// ```
/// use cell_grid::{EdgeSet, Point};
///
/// let a = Point::new(0.0, 0.0, 0.0);
/// let b = Point::new(1.0, 0.0, 0.0);
///
/// let mut edges = EdgeSet::new();
/// assert!(edges.add_unique(a, b));
/// assert!(!edges.add_unique(b, a));
/// assert_eq!(edges.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeSet {
    scale: f64,
    seen: HashSet<EdgeKey>,
    segments: Vec<Segment>,
}

impl EdgeSet {
    /// Creates an empty set keyed at the default precision.
    pub fn new() -> Self {
        Self::with_decimals(EDGE_KEY_DECIMALS)
    }

    /// Creates an empty set keyed at `decimals` digits.
    pub fn with_decimals(decimals: u32) -> Self {
        Self {
            scale: edge_key_scale(decimals),
            seen: HashSet::new(),
            segments: Vec::new(),
        }
    }

    fn endpoint_key(&self, p: Point) -> EndpointKey {
        [
            (p.x * self.scale).round() as i64,
            (p.y * self.scale).round() as i64,
            (p.z * self.scale).round() as i64,
        ]
    }

    fn edge_key(&self, a: Point, b: Point) -> EdgeKey {
        let ka = self.endpoint_key(a);
        let kb = self.endpoint_key(b);
        if ka <= kb {
            (ka, kb)
        } else {
            (kb, ka)
        }
    }

    /// Inserts the segment `a → b` unless an equivalent edge is already
    /// present. Returns `true` when the segment was inserted.
    ///
    /// The stored segment keeps the endpoints of the first insertion.
    pub fn add_unique(&mut self, a: Point, b: Point) -> bool {
        let key = self.edge_key(a, b);
        if !self.seen.insert(key) {
            return false;
        }
        self.segments.push(Segment::new(a, b));
        true
    }

    /// Adds every boundary edge of `cell`, closing it if needed. Cells with
    /// fewer than two points contribute nothing.
    pub fn add_cell(&mut self, cell: &Cell) {
        if cell.points().len() < 2 {
            return;
        }
        for (a, b) in cell.edges() {
            self.add_unique(a, b);
        }
    }

    /// Number of unique edges.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no edge has been inserted.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Unique edges in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes the set, returning the unique edges.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<&'a Cell> for EdgeSet {
    fn extend<I: IntoIterator<Item = &'a Cell>>(&mut self, cells: I) {
        for cell in cells {
            self.add_cell(cell);
        }
    }
}

#[cfg(test)]
mod tests;
