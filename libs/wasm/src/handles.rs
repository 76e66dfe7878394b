//! # Result Handles
//!
//! WASM-friendly wrappers around generation results. Geometry crosses the
//! boundary as flat `f64` buffers (returned to JavaScript as
//! `Float64Array`) plus `u32` offset tables marking where each polyline
//! starts.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! const grid = generate_cells(JSON.stringify({ pattern: "hex", x: 4, y: 3 }));
//! const points = grid.cell_points();   // [x, y, z, x, y, z, ...]
//! const offsets = grid.cell_offsets(); // cell i spans offsets[i]..offsets[i+1]
//! for (let i = 0; i < grid.cell_count; i++) {
//!   const start = offsets[i] * 3, end = offsets[i + 1] * 3;
//!   drawPolyline(points.subarray(start, end));
//! }
//! ```

use cell_grid::{GridOutput, Point};
use cell_motif::{Curve, MotifOutput};
use wasm_bindgen::prelude::*;

/// Curve kind tag for polylines in [`MotifHandle::curve_kinds`].
pub const CURVE_KIND_POLYLINE: u8 = 0;

/// Curve kind tag for lines in [`MotifHandle::curve_kinds`].
pub const CURVE_KIND_LINE: u8 = 1;

/// Polylines packed into one coordinate buffer and an offset table.
#[derive(Debug, Clone, Default, PartialEq)]
struct PackedPolylines {
    coords: Vec<f64>,
    offsets: Vec<u32>,
}

impl PackedPolylines {
    fn new() -> Self {
        Self {
            coords: Vec::new(),
            offsets: vec![0],
        }
    }

    fn push(&mut self, points: &[Point]) {
        self.coords.extend(points.iter().flat_map(|p| p.to_array()));
        let end = self.offsets.last().copied().unwrap_or(0) as usize + points.len();
        self.offsets.push(u32::try_from(end).unwrap_or(u32::MAX));
    }
}

fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| p.to_array()).collect()
}

/// A generated grid, ready for drawing.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct GridHandle {
    cell_count: u32,
    edge_count: u32,
    pattern_index: u32,
    pattern: String,
    info: String,
    cells: PackedPolylines,
    /// Segment endpoints as [x0, y0, z0, x1, y1, z1, ...]
    edges: Vec<f64>,
    /// Cell centroids as [x, y, z, ...]
    centers: Vec<f64>,
}

#[wasm_bindgen]
impl GridHandle {
    /// Number of cells.
    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Number of unique edges.
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> u32 {
        self.edge_count
    }

    /// Resolved registry position.
    #[wasm_bindgen(getter)]
    pub fn pattern_index(&self) -> u32 {
        self.pattern_index
    }

    /// Resolved pattern name.
    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> String {
        self.pattern.clone()
    }

    /// Info line.
    #[wasm_bindgen(getter)]
    pub fn info(&self) -> String {
        self.info.clone()
    }

    /// All cell points, closing duplicates included.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    pub fn cell_points(&self) -> Vec<f64> {
        self.cells.coords.clone()
    }

    /// Point offsets per cell; length `cell_count + 1`.
    pub fn cell_offsets(&self) -> Vec<u32> {
        self.cells.offsets.clone()
    }

    /// Unique edges, two points each.
    ///
    /// Format: [x0, y0, z0, x1, y1, z1, ...]
    /// Length: edge_count * 6
    pub fn edges(&self) -> Vec<f64> {
        self.edges.clone()
    }

    /// Cell centroids.
    ///
    /// Format: [x, y, z, ...]
    /// Length: cell_count * 3
    pub fn centers(&self) -> Vec<f64> {
        self.centers.clone()
    }
}

impl From<&GridOutput> for GridHandle {
    fn from(output: &GridOutput) -> Self {
        let mut cells = PackedPolylines::new();
        for cell in &output.cells {
            cells.push(cell.points());
        }
        let edges = output
            .edges
            .iter()
            .flat_map(|s| s.start.to_array().into_iter().chain(s.end.to_array()))
            .collect();

        Self {
            cell_count: output.cells.len() as u32,
            edge_count: output.edges.len() as u32,
            pattern_index: output.pattern_index as u32,
            pattern: output.pattern.to_string(),
            info: output.info.clone(),
            cells,
            edges,
            centers: flatten(&output.centers),
        }
    }
}

/// Patternizer results, ready for drawing.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MotifHandle {
    motif_count: u32,
    report: String,
    curves: PackedPolylines,
    /// One [`CURVE_KIND_POLYLINE`] or [`CURVE_KIND_LINE`] per curve.
    curve_kinds: Vec<u8>,
    cutouts: PackedPolylines,
    centers: Vec<f64>,
}

#[wasm_bindgen]
impl MotifHandle {
    /// Number of curves.
    #[wasm_bindgen(getter)]
    pub fn curve_count(&self) -> u32 {
        self.curve_kinds.len() as u32
    }

    /// Number of cutouts.
    #[wasm_bindgen(getter)]
    pub fn cutout_count(&self) -> u32 {
        self.cutouts.offsets.len().saturating_sub(1) as u32
    }

    /// Cells that produced a motif.
    #[wasm_bindgen(getter)]
    pub fn motif_count(&self) -> u32 {
        self.motif_count
    }

    /// Report line.
    #[wasm_bindgen(getter)]
    pub fn report(&self) -> String {
        self.report.clone()
    }

    /// All curve points. Format: [x, y, z, ...]
    pub fn curve_points(&self) -> Vec<f64> {
        self.curves.coords.clone()
    }

    /// Point offsets per curve; length `curve_count + 1`.
    pub fn curve_offsets(&self) -> Vec<u32> {
        self.curves.offsets.clone()
    }

    /// Kind tag per curve: `0` polyline, `1` line.
    pub fn curve_kinds(&self) -> Vec<u8> {
        self.curve_kinds.clone()
    }

    /// All cutout points. Format: [x, y, z, ...]
    pub fn cutout_points(&self) -> Vec<f64> {
        self.cutouts.coords.clone()
    }

    /// Point offsets per cutout; length `cutout_count + 1`.
    pub fn cutout_offsets(&self) -> Vec<u32> {
        self.cutouts.offsets.clone()
    }

    /// Centroids of the processed cells. Format: [x, y, z, ...]
    pub fn centers(&self) -> Vec<f64> {
        self.centers.clone()
    }
}

impl From<&MotifOutput> for MotifHandle {
    fn from(output: &MotifOutput) -> Self {
        let mut curves = PackedPolylines::new();
        let mut curve_kinds = Vec::with_capacity(output.curves.len());
        for curve in &output.curves {
            curves.push(&curve.points());
            curve_kinds.push(match curve {
                Curve::Polyline { .. } => CURVE_KIND_POLYLINE,
                Curve::Line { .. } => CURVE_KIND_LINE,
            });
        }

        let mut cutouts = PackedPolylines::new();
        for cutout in &output.cutouts {
            cutouts.push(&cutout.points());
        }

        Self {
            motif_count: output.motif_count as u32,
            report: output.report.clone(),
            curves,
            curve_kinds,
            cutouts,
            centers: flatten(&output.centers),
        }
    }
}
