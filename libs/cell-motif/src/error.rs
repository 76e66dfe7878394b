//! # Motif Errors
//!
//! Error types for cell patternizing.
//!
//! Geometry never fails here: malformed cells are skipped and a collapsing
//! offset only ends ring growth for its cell. What remains are rejected
//! settings and failures bubbled up from grid generation.

use cell_grid::TilingError;
use thiserror::Error;

/// Errors that can occur while patternizing cells.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotifError {
    /// Grid generation failed upstream.
    #[error(transparent)]
    Tiling(#[from] TilingError),

    /// Offset tolerance is zero, negative or not finite.
    #[error("Invalid offset tolerance: {0} (must be finite and > 0)")]
    InvalidTolerance(f64),
}

/// Result type alias for motif operations.
pub type Result<T> = std::result::Result<T, MotifError>;
