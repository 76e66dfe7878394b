//! # Cell Motif
//!
//! Secondary ornament for tessellated cells: inset rings, star perforations
//! and spoke fans, each optionally rotated about the cell's own centre.
//!
//! ## Architecture
//!
//! ```text
//! cells + MotifInput ─► MotifParams ─► rayon (per cell) ─► modes::apply
//!                                                             │
//!                         concentric ─► OffsetKernel ◄────────┤
//!                         star / spokes / passthrough ◄───────┘
//!                                       │
//!                                       ▼
//!                      MotifOutput { curves, cutouts, centers, report }
//! ```
//!
//! Offsetting is delegated to an [`OffsetKernel`] so a host CAD kernel can
//! be injected; [`SharpOffsetKernel`] is the built-in fallback.
//!
//! ## Usage
//!
//! ```rust
//! use cell_grid::{generate, GridInput};
//! use cell_motif::{patternize, MotifInput};
//!
//! let grid = generate(&GridInput {
//!     pattern: Some("hex".into()),
//!     x: Some(3),
//!     y: Some(3),
//!     ..GridInput::default()
//! })
//! .unwrap();
//!
//! let rings = patternize(&grid.cells, &MotifInput::default()).unwrap();
//! assert_eq!(rings.centers.len(), 9);
//! assert_eq!(rings.cutouts.len(), 9);
//! ```

pub mod curve;
pub mod error;
pub mod kernel;
pub mod modes;
pub mod params;
pub mod patternizer;

pub use curve::Curve;
pub use error::{MotifError, Result};
pub use kernel::{OffsetKernel, Plane, Polyline, SharpOffsetKernel};
pub use modes::CellMotif;
pub use params::{Mode, MotifInput, MotifParams};
pub use patternizer::{patternize, patternize_with, MotifOutput, MotifReport};
