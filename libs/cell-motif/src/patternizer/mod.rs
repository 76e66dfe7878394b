//! # Cell Patternizer
//!
//! Applies one motif mode to every cell of a grid and aggregates the
//! results.
//!
//! ## Ordering
//!
//! Cells are processed on rayon workers, but collection is order
//! preserving: curves, cutouts and centres follow input cell order, and the
//! output is identical to a sequential run.

use crate::{
    curve::Curve,
    error::Result,
    kernel::{OffsetKernel, SharpOffsetKernel},
    modes::{self, CellMotif},
    params::{MotifInput, MotifParams},
};
use cell_grid::{report::format_rounded, Cell, Point};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Aggregated patternizer output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotifOutput {
    /// Every emitted curve, in cell order.
    pub curves: Vec<Curve>,
    /// At most one cutout per cell, in cell order.
    pub cutouts: Vec<Curve>,
    /// One centroid per well-formed cell.
    pub centers: Vec<Point>,
    /// Number of cells that produced a motif.
    pub motif_count: usize,
    /// Human-readable summary line.
    pub report: String,
}

/// Summary of one patternizer call.
///
/// Renders as
/// `Cells: {n} | Mode: {mode} | Inset: {t} | Steps: {s} | Rot: {r}° | Motifs: {m}`
/// with the inset rounded to three places and the rotation to two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifReport {
    /// Number of input cells, malformed ones included.
    pub cells: usize,
    /// Resolved parameters.
    pub params: MotifParams,
    /// Cells that produced a motif.
    pub motifs: usize,
}

impl fmt::Display for MotifReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cells: {} | Mode: {} | Inset: {} | Steps: {} | Rot: {}° | Motifs: {}",
            self.cells,
            self.params.mode.name(),
            format_rounded(self.params.inset, 3),
            self.params.steps,
            format_rounded(self.params.rotation_degrees, 2),
            self.motifs
        )
    }
}

/// Resolves `input` and patternizes `cells` with the built-in
/// [`SharpOffsetKernel`].
///
/// # Errors
/// [`MotifError::InvalidTolerance`](crate::MotifError::InvalidTolerance)
/// for an unusable supplied tolerance.
///
/// # Examples
/// ```
/// use cell_grid::{generate, GridInput};
/// use cell_motif::{patternize, MotifInput};
///
/// let grid = generate(&GridInput {
///     x: Some(2),
///     y: Some(2),
///     ..GridInput::default()
/// })
/// .unwrap();
/// let out = patternize(&grid.cells, &MotifInput {
///     mode: Some("star".into()),
///     ..MotifInput::default()
/// })
/// .unwrap();
/// assert_eq!(out.curves.len(), 4);
/// assert_eq!(out.cutouts.len(), 4);
/// assert!(out.report.starts_with("Cells: 4 | Mode: star"));
/// ```
pub fn patternize(cells: &[Cell], input: &MotifInput) -> Result<MotifOutput> {
    let params = MotifParams::resolve(input)?;
    Ok(patternize_with(cells, &params, &SharpOffsetKernel))
}

/// Patternizes `cells` with resolved parameters and a caller-supplied
/// offset kernel.
pub fn patternize_with<K>(cells: &[Cell], params: &MotifParams, kernel: &K) -> MotifOutput
where
    K: OffsetKernel + ?Sized,
{
    debug!(
        cells = cells.len(),
        mode = params.mode.name(),
        inset = params.inset_fraction(),
        steps = params.steps,
        rotation = params.rotation_degrees,
        "patternizing cells"
    );

    let motifs: Vec<Option<CellMotif>> = cells
        .par_iter()
        .map(|cell| modes::apply(cell, params, kernel))
        .collect();

    let mut output = MotifOutput {
        curves: Vec::new(),
        cutouts: Vec::new(),
        centers: Vec::with_capacity(cells.len()),
        motif_count: 0,
        report: String::new(),
    };
    for motif in motifs.into_iter().flatten() {
        output.centers.push(motif.center);
        output.curves.extend(motif.curves);
        output.cutouts.extend(motif.cutout);
        if motif.counted {
            output.motif_count += 1;
        }
    }

    output.report = MotifReport {
        cells: cells.len(),
        params: *params,
        motifs: output.motif_count,
    }
    .to_string();
    debug!(
        curves = output.curves.len(),
        cutouts = output.cutouts.len(),
        skipped = cells.len() - output.centers.len(),
        "patternized cells"
    );
    output
}

#[cfg(test)]
mod tests;
