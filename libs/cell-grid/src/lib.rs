//! # Cell Grid
//!
//! Tessellated cell grids for parametric design tooling. A single call turns
//! grid parameters into closed cell polygons, their area centroids and the
//! deduplicated set of edges shared between them.
//!
//! ## Architecture
//!
//! ```text
//! GridInput ─► params (defaulting) ─► Registry ─► generator ─► Vec<Cell>
//!                                                     │
//!                     polygon::centroid ◄─────────────┤
//!                     edges::EdgeSet    ◄─────────────┘
//! ```
//!
//! ## Patterns
//!
//! | Index | Name   | Cell                         |
//! |-------|--------|------------------------------|
//! | 0     | square | axis-aligned square          |
//! | 1     | tri    | equilateral triangle         |
//! | 2     | hex    | pointy-top regular hexagon   |
//! | 3     | weave  | basket-weave strip           |
//! | 4     | cairo  | pentagon                     |
//!
//! ## Usage
//!
//! ```rust
//! use cell_grid::{generate, GridInput};
//!
//! let input = GridInput {
//!     pattern: Some("square".into()),
//!     x: Some(2),
//!     y: Some(2),
//!     ..GridInput::default()
//! };
//! let output = generate(&input).expect("standard registry is never empty");
//! assert_eq!(output.cells.len(), 4);
//! assert_eq!(output.edges.len(), 12);
//! ```

pub mod edges;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod lenient;
pub mod params;
pub mod pipeline;
pub mod polygon;
pub mod registry;
pub mod report;

pub use edges::EdgeSet;
pub use error::{Result, TilingError};
pub use geometry::{Cell, Point, Segment};
pub use params::{GridInput, GridParams, IndexValue};
pub use pipeline::{generate, generate_with, GridOutput};
pub use registry::{IndexPolicy, PatternSelector, Registry, RegistryEntry, Resolution};
