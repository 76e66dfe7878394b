//! Core geometry types: points, cells and segments.
//!
//! Points are `glam::DVec3`. Every cell produced by one generation call
//! shares the origin's z coordinate.

use crate::polygon;
use serde::{Deserialize, Serialize};

/// A 3D location (x, y, z).
pub use glam::DVec3 as Point;

/// One tile's polygon boundary.
///
/// Cells built with [`Cell::closed`] repeat their first point at the end.
/// Cells built with [`Cell::new`] keep the points exactly as given and may
/// be implicitly closed, open or even malformed; consumers check
/// [`Cell::is_polygon`] before treating them as polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    points: Vec<Point>,
}

impl Cell {
    /// Wraps the points unchanged.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds an explicitly closed cell, appending the first point when the
    /// sequence is not already closed.
    ///
    /// # Examples
    /// ```
    /// use cell_grid::{Cell, Point};
    ///
    /// let cell = Cell::closed(vec![
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    /// ]);
    /// assert_eq!(cell.points().len(), 4);
    /// assert_eq!(cell.vertex_count(), 3);
    /// ```
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let Some(&first) = points.first() {
            if !polygon::is_closed(&points) {
                points.push(first);
            }
        }
        Self { points }
    }

    /// All stored points, including a closing duplicate if present.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distinct vertices, without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        polygon::distinct_vertices(&self.points)
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Whether the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        polygon::is_closed(&self.points)
    }

    /// Whether the cell has enough distinct vertices to bound an area.
    pub fn is_polygon(&self) -> bool {
        self.vertex_count() >= 3
    }

    /// Boundary edges as point pairs, wrapping from the last distinct vertex
    /// back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let vertices = self.vertices();
        let n = vertices.len();
        (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
    }

    /// Area centroid; see [`polygon::centroid`].
    pub fn centroid(&self) -> Point {
        polygon::centroid(&self.points)
    }

    /// Mean boundary edge length; see [`polygon::average_edge_length`].
    pub fn average_edge_length(&self) -> f64 {
        polygon::average_edge_length(&self.points)
    }

    /// Signed area in the XY plane (positive for counter-clockwise).
    pub fn signed_area(&self) -> f64 {
        polygon::signed_area(&self.points)
    }

    /// Consumes the cell, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Cell {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// A line segment between two points.
///
/// Used for unique grid edges and for spoke lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Segment {
    /// Creates a segment.
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the two endpoints.
    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }
}
