//! WASM-facing entry points for the cell grid and motif pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Requests arrive as JSON strings and results leave as
//! handles exposing flat coordinate buffers. Native tests use the
//! `*_internal` twins, which return Rust types and errors instead of
//! `JsValue`s.
//!
//! ```
//! let grid = pattern_wasm::generate_cells_internal(r#"{"pattern":"square","x":2,"y":2}"#).unwrap();
//! assert_eq!(grid.cells.len(), 4);
//! assert_eq!(grid.edges.len(), 12);
//! ```

use cell_grid::{generate, GridInput, GridOutput, IndexValue, PatternSelector, Registry};
use cell_motif::{patternize, MotifOutput};
use tracing::debug;
use wasm_bindgen::prelude::*;

mod error;
mod handles;
mod request;

pub use error::WasmError;
pub use handles::{GridHandle, MotifHandle, CURVE_KIND_LINE, CURVE_KIND_POLYLINE};
pub use request::PatternizeRequest;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "pattern-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Number of built-in patterns, for populating a pattern picker.
///
/// # Examples
/// ```
/// assert_eq!(pattern_wasm::pattern_count(), 5);
/// ```
#[wasm_bindgen]
pub fn pattern_count() -> u32 {
    Registry::standard().len() as u32
}

/// Name of the pattern an index selects, with the same clamping as
/// `generate_cells`.
///
/// # Examples
/// ```
/// assert_eq!(pattern_wasm::pattern_name(2), "hex");
/// assert_eq!(pattern_wasm::pattern_name(-1), "square");
/// ```
#[wasm_bindgen]
pub fn pattern_name(index: i32) -> String {
    Registry::standard()
        .resolve(&PatternSelector::Index(IndexValue::from(i64::from(index))))
        .map(|resolution| resolution.name().to_string())
        .unwrap_or_default()
}

/// Generates a grid from a JSON [`GridInput`].
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the request cannot be parsed.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const grid = generate_cells(JSON.stringify({ pattern: "tri", x: 6, y: 4 }));
/// // console.log(grid.info);
/// ```
#[wasm_bindgen]
pub fn generate_cells(request_json: &str) -> Result<GridHandle, JsValue> {
    generate_cells_internal(request_json)
        .map(|output| GridHandle::from(&output))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`generate_cells`].
///
/// An empty or whitespace-only request uses every default.
///
/// # Examples
/// ```
/// let grid = pattern_wasm::generate_cells_internal("").unwrap();
/// assert_eq!(grid.pattern, "square");
/// assert_eq!(grid.cells.len(), 100);
/// ```
pub fn generate_cells_internal(request_json: &str) -> Result<GridOutput, WasmError> {
    let input: GridInput = parse_request(request_json)?;
    let output = generate(&input)?;
    debug!(info = %output.info, "generate_cells");
    Ok(output)
}

/// Patternizes cells from a JSON [`PatternizeRequest`].
///
/// # Errors
/// Returns a JavaScript error value when the request cannot be parsed or
/// holds an unusable tolerance.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const motifs = patternize_cells(JSON.stringify({
/// //   grid: { pattern: "hex", x: 4, y: 4 },
/// //   motif: { mode: "star", inset: 0.3, steps: 2 },
/// // }));
/// // console.log(motifs.report);
/// ```
#[wasm_bindgen]
pub fn patternize_cells(request_json: &str) -> Result<MotifHandle, JsValue> {
    patternize_cells_internal(request_json)
        .map(|output| MotifHandle::from(&output))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`patternize_cells`].
///
/// # Examples
/// ```
/// let out = pattern_wasm::patternize_cells_internal(
///     r#"{"grid":{"x":1,"y":1},"motif":{"mode":"spokes"}}"#,
/// )
/// .unwrap();
/// assert_eq!(out.curves.len(), 8);
/// ```
pub fn patternize_cells_internal(request_json: &str) -> Result<MotifOutput, WasmError> {
    let request: PatternizeRequest = parse_request(request_json)?;
    let output = match &request.cells {
        Some(cells) => patternize(cells, &request.motif)?,
        None => {
            let grid = generate(&request.grid)?;
            patternize(&grid.cells, &request.motif)?
        }
    };
    debug!(report = %output.report, "patternize_cells");
    Ok(output)
}

fn parse_request<T>(request_json: &str) -> Result<T, WasmError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if request_json.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(request_json)?)
}
