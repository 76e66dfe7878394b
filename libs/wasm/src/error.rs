//! # WASM Errors
//!
//! Failures surfaced to the JavaScript host. Every variant renders to the
//! plain message string thrown on the JS side.

use cell_grid::TilingError;
use cell_motif::MotifError;
use thiserror::Error;

/// Errors returned by the `*_internal` entry points.
#[derive(Debug, Error)]
pub enum WasmError {
    /// The request JSON could not be parsed.
    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),

    /// Grid generation failed.
    #[error(transparent)]
    Tiling(#[from] TilingError),

    /// Patternizing failed.
    #[error(transparent)]
    Motif(#[from] MotifError),
}
