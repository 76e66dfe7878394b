//! # Curves
//!
//! Output geometry of the patternizer and the rotation applied to it.
//!
//! Rings, stars and passthrough boundaries are polylines; spokes are
//! two-point lines. All rotations turn about the world z axis through a
//! caller-chosen centre, leaving z untouched.

use cell_grid::{polygon, Point, Segment};
use glam::DAffine3;
use serde::{Deserialize, Serialize};

/// Rotation by `radians` about the z axis through `center`.
///
/// # Examples
/// ```
/// use cell_motif::curve::rotation_about;
/// use cell_grid::Point;
/// use std::f64::consts::FRAC_PI_2;
///
/// let t = rotation_about(Point::new(1.0, 1.0, 0.0), FRAC_PI_2);
/// let p = t.transform_point3(Point::new(2.0, 1.0, 5.0));
/// assert!((p - Point::new(1.0, 2.0, 5.0)).length() < 1e-12);
/// ```
pub fn rotation_about(center: Point, radians: f64) -> DAffine3 {
    DAffine3::from_translation(center)
        * DAffine3::from_rotation_z(radians)
        * DAffine3::from_translation(-center)
}

/// Rotates `points` in place. A zero angle leaves them bit-identical.
pub fn rotate_points(points: &mut [Point], center: Point, radians: f64) {
    if radians == 0.0 {
        return;
    }
    let transform = rotation_about(center, radians);
    for p in points.iter_mut() {
        *p = transform.transform_point3(*p);
    }
}

/// A derived curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// Open or closed polyline.
    Polyline {
        /// Vertices in order; closed polylines repeat the first point.
        points: Vec<Point>,
    },
    /// Straight segment.
    Line {
        /// Start point.
        start: Point,
        /// End point.
        end: Point,
    },
}

impl Curve {
    /// Wraps polyline points.
    pub fn polyline(points: Vec<Point>) -> Self {
        Curve::Polyline { points }
    }

    /// Builds a line from two points.
    pub fn line(start: Point, end: Point) -> Self {
        Curve::Line { start, end }
    }

    /// Vertices of the curve in order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Curve::Polyline { points } => points.clone(),
            Curve::Line { start, end } => vec![*start, *end],
        }
    }

    /// Number of stored vertices.
    pub fn point_count(&self) -> usize {
        match self {
            Curve::Polyline { points } => points.len(),
            Curve::Line { .. } => 2,
        }
    }

    /// Whether the curve ends where it starts.
    pub fn is_closed(&self) -> bool {
        match self {
            Curve::Polyline { points } => polygon::is_closed(points),
            Curve::Line { .. } => false,
        }
    }

    /// Area centroid when closed, bounding-box centre otherwise.
    pub fn centroid(&self) -> Point {
        match self {
            Curve::Polyline { points } => polygon::curve_centroid(points),
            Curve::Line { start, end } => Segment::new(*start, *end).midpoint(),
        }
    }

    /// Signed XY area of a closed polyline; zero for anything else.
    pub fn signed_area(&self) -> f64 {
        match self {
            Curve::Polyline { points } if polygon::is_closed(points) => {
                polygon::signed_area(points)
            }
            _ => 0.0,
        }
    }

    /// Rotates the curve in place about `center`.
    pub fn rotate(&mut self, center: Point, radians: f64) {
        match self {
            Curve::Polyline { points } => rotate_points(points, center, radians),
            Curve::Line { start, end } => {
                let mut ends = [*start, *end];
                rotate_points(&mut ends, center, radians);
                *start = ends[0];
                *end = ends[1];
            }
        }
    }

    /// Returns the curve rotated about `center`.
    pub fn rotated(mut self, center: Point, radians: f64) -> Self {
        self.rotate(center, radians);
        self
    }
}

impl From<Segment> for Curve {
    fn from(segment: Segment) -> Self {
        Curve::line(segment.start, segment.end)
    }
}
