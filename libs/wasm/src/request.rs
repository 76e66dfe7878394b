//! # Requests
//!
//! JSON request bodies accepted from the host.

use cell_grid::{lenient, Cell, GridInput};
use cell_motif::MotifInput;
use serde::{Deserialize, Serialize};

/// Body of a `patternize_cells` call.
///
/// Cells are taken from `cells` when present; otherwise they are generated
/// from `grid`, so a host can go from parameters to motifs in one call.
/// Mistyped sections fall back to their defaults, and a cell entry that
/// cannot be read is kept as an empty cell so it is skipped and counted.
///
/// ```json
/// { "grid": { "pattern": "hex", "x": 4, "y": 4 }, "motif": { "mode": "star" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternizeRequest {
    /// Grid to generate when no cells are supplied.
    #[serde(deserialize_with = "lenient::or_default")]
    pub grid: GridInput,
    /// Pre-built cells, e.g. from an earlier `generate_cells` call.
    #[serde(deserialize_with = "lenient::cells")]
    pub cells: Option<Vec<Cell>>,
    /// Patternizer settings.
    #[serde(deserialize_with = "lenient::or_default")]
    pub motif: MotifInput,
}
