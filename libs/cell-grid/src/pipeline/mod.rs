//! # Generation Pipeline
//!
//! Stateless grid generation: defaulting, pattern resolution, cell
//! generation, centroids, edge canonicalization and the info line, in that
//! order. Each call owns its outputs.

use crate::{
    edges::EdgeSet,
    error::Result,
    geometry::{Cell, Point, Segment},
    params::{GridInput, GridParams},
    registry::{PatternSelector, Registry},
    report::GridInfo,
};
use config::constants::TilingConfig;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Everything one generation call produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridOutput {
    /// Resolved registry position.
    pub pattern_index: usize,
    /// Resolved pattern name.
    pub pattern: &'static str,
    /// Parameters after defaulting.
    pub params: GridParams,
    /// Closed cell polygons in row-major order.
    pub cells: Vec<Cell>,
    /// Unique edges in first-insertion order.
    pub edges: Vec<Segment>,
    /// One area centroid per cell, same order as `cells`.
    pub centers: Vec<Point>,
    /// Human-readable summary line.
    pub info: String,
}

/// Generates a grid with the standard registry and default precision.
///
/// # Errors
/// Never fails with the standard registry; the `Result` mirrors
/// [`generate_with`].
pub fn generate(input: &GridInput) -> Result<GridOutput> {
    generate_with(&Registry::standard(), input, &TilingConfig::default())
}

/// Generates a grid against a caller-supplied registry and configuration.
///
/// # Errors
/// - [`TilingError::EmptyRegistry`](crate::TilingError::EmptyRegistry) when
///   `registry` has no entries.
/// - [`TilingError::InvalidConfig`](crate::TilingError::InvalidConfig) when
///   `config` holds out-of-range precision values.
///
/// # Examples
/// ```
/// use cell_grid::{generate_with, GridInput, IndexValue, Registry};
/// use config::constants::TilingConfig;
///
/// let input = GridInput {
///     index: Some(IndexValue::from(2)),
///     x: Some(1),
///     y: Some(1),
///     ..GridInput::default()
/// };
/// let out = generate_with(&Registry::standard(), &input, &TilingConfig::default()).unwrap();
/// assert_eq!(out.pattern, "hex");
/// assert_eq!(out.edges.len(), 6);
/// ```
pub fn generate_with(
    registry: &Registry,
    input: &GridInput,
    config: &TilingConfig,
) -> Result<GridOutput> {
    let config = TilingConfig::new(config.edge_key_decimals, config.offset_tolerance)?;
    let params = GridParams::resolve(input);
    let resolution = registry.resolve(&PatternSelector::new(
        input.pattern.as_deref(),
        input.index.as_ref(),
    ))?;
    debug!(
        pattern = resolution.name(),
        x = params.x,
        y = params.y,
        size = params.size,
        "generating grid"
    );

    let cells = resolution.generate(&params);
    let centers: Vec<Point> = cells.par_iter().map(Cell::centroid).collect();

    let mut edge_set = EdgeSet::with_decimals(config.edge_key_decimals);
    edge_set.extend(cells.iter());
    let edges = edge_set.into_segments();

    let info = GridInfo {
        index: resolution.index,
        pattern: resolution.name(),
        cells: cells.len(),
        edges: edges.len(),
        size: params.size,
        x: params.x,
        y: params.y,
    }
    .to_string();
    debug!(cells = cells.len(), edges = edges.len(), "grid generated");

    Ok(GridOutput {
        pattern_index: resolution.index,
        pattern: resolution.name(),
        params,
        cells,
        edges,
        centers,
        info,
    })
}
