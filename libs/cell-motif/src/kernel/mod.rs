//! # Offset Kernels
//!
//! The patternizer never offsets curves itself. It asks an [`OffsetKernel`]
//! so a host CAD kernel can be plugged in, and falls back to the pure-Rust
//! [`SharpOffsetKernel`] otherwise.
//!
//! ## Sign Convention
//!
//! Negative distances move the curve toward its interior, positive ones
//! away from it, independent of winding.

pub mod sharp;

pub use sharp::SharpOffsetKernel;

use cell_grid::{polygon, Point};
use config::constants::{DEGENERATE_AREA_EPSILON, PLANE_FIT_TOLERANCE};
use glam::{DVec2, DVec3};

/// Polyline vertices as returned by offset operations.
pub type Polyline = Vec<Point>;

/// An oriented plane with an orthonormal right-handed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Frame origin.
    pub origin: Point,
    /// Local x direction.
    pub x_axis: DVec3,
    /// Local y direction.
    pub y_axis: DVec3,
    /// Unit normal, `x_axis × y_axis`.
    pub normal: DVec3,
}

impl Plane {
    /// The world XY plane through the origin.
    pub fn world_xy() -> Self {
        Self {
            origin: Point::ZERO,
            x_axis: DVec3::X,
            y_axis: DVec3::Y,
            normal: DVec3::Z,
        }
    }

    /// Plane through `origin` with the given normal.
    ///
    /// The x axis is the world axis least aligned with the normal, projected
    /// into the plane, so a +Z normal reproduces world XY axes. Returns
    /// `None` for a zero or non-finite normal.
    pub fn from_normal(origin: Point, normal: DVec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        let abs = normal.abs();
        let seed = if abs.x <= abs.y && abs.x <= abs.z {
            DVec3::X
        } else if abs.y <= abs.z {
            DVec3::Y
        } else {
            DVec3::Z
        };
        let x_axis = (seed - normal * seed.dot(normal)).try_normalize()?;
        let y_axis = normal.cross(x_axis);
        Some(Self {
            origin,
            x_axis,
            y_axis,
            normal,
        })
    }

    /// Fits a plane to a closed curve.
    ///
    /// The normal comes from Newell's method, so the curve winds
    /// counter-clockwise in the plane's local frame. Returns `None` when the
    /// curve has fewer than three distinct vertices, encloses no area or
    /// strays more than [`PLANE_FIT_TOLERANCE`] from the plane.
    ///
    /// # Examples
    /// ```
    /// use cell_motif::kernel::Plane;
    /// use cell_grid::Point;
    ///
    /// let tri = [
    ///     Point::new(0.0, 0.0, 3.0),
    ///     Point::new(1.0, 0.0, 3.0),
    ///     Point::new(0.0, 1.0, 3.0),
    /// ];
    /// let plane = Plane::fit(&tri).unwrap();
    /// assert_eq!(plane.normal, glam::DVec3::Z);
    ///
    /// let line = [Point::ZERO, Point::X, Point::new(2.0, 0.0, 0.0)];
    /// assert!(Plane::fit(&line).is_none());
    /// ```
    pub fn fit(points: &[Point]) -> Option<Self> {
        let vertices = polygon::distinct_vertices(points);
        if vertices.len() < 3 {
            return None;
        }

        let n = vertices.len();
        let mut newell = DVec3::ZERO;
        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % n];
            newell.x += (a.y - b.y) * (a.z + b.z);
            newell.y += (a.z - b.z) * (a.x + b.x);
            newell.z += (a.x - b.x) * (a.y + b.y);
        }
        if newell.length() < DEGENERATE_AREA_EPSILON {
            return None;
        }

        let plane = Self::from_normal(vertices[0], newell)?;
        vertices
            .iter()
            .all(|p| plane.height(*p).abs() <= PLANE_FIT_TOLERANCE)
            .then_some(plane)
    }

    /// Signed distance of `p` above the plane.
    pub fn height(&self, p: Point) -> f64 {
        (p - self.origin).dot(self.normal)
    }

    /// Coordinates of `p` in the plane's local frame, dropping the height.
    pub fn to_local(&self, p: Point) -> DVec2 {
        let d = p - self.origin;
        DVec2::new(d.dot(self.x_axis), d.dot(self.y_axis))
    }

    /// World point for local coordinates `uv` at zero height.
    pub fn to_world(&self, uv: DVec2) -> Point {
        self.origin + self.x_axis * uv.x + self.y_axis * uv.y
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::world_xy()
    }
}

/// Planar curve offsetting, as provided by a CAD kernel.
///
/// Implementations are shared across rayon workers and must be `Sync`.
pub trait OffsetKernel: Sync {
    /// Offsets a closed curve within `plane` by `distance` using sharp
    /// corners.
    ///
    /// Returns every resulting closed curve; an empty vector means the
    /// offset failed or collapsed.
    fn offset(&self, curve: &[Point], plane: &Plane, distance: f64, tolerance: f64)
        -> Vec<Polyline>;

    /// Plane containing `curve`, if it is planar.
    fn try_get_plane(&self, curve: &[Point]) -> Option<Plane> {
        Plane::fit(curve)
    }
}
