//! # Config Crate
//!
//! Centralized configuration constants for the cell tiling pipeline.
//! Every magic number used by the tessellation generators, the edge
//! canonicalizer and the cell patternizer is defined here so the library
//! crates stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_inset, CLOSURE_EPSILON, DEFAULT_GRID_COUNT};
//!
//! // Two points closer than CLOSURE_EPSILON close a polyline
//! let gap: f64 = 1e-10;
//! assert!(gap < CLOSURE_EPSILON);
//!
//! // Out-of-range grid counts fall back to the default
//! let requested: i64 = 0;
//! let x = if requested < 1 { DEFAULT_GRID_COUNT } else { requested as u32 };
//! assert_eq!(x, 10);
//!
//! // Inset fractions are clamped rather than rejected
//! assert_eq!(clamp_inset(5.0), 0.9);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fail Soft**: Defaults and clamps are data, not scattered branches
//! - **Browser-Safe**: No platform-specific values

pub mod constants;
