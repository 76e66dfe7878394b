//! # Grid Parameters
//!
//! Raw caller input and its resolved, always-valid form.
//!
//! Nothing here rejects input: absent, non-finite or out-of-range values are
//! replaced by the defaults from [`config::constants`], so generators can
//! assume `x, y >= 1` and `size > 0`.

use crate::{geometry::Point, lenient};
use config::constants::{
    clamp_band_ratio, DEFAULT_BAND_RATIO, DEFAULT_GRID_COUNT, DEFAULT_MODULE_SIZE,
};
use serde::{Deserialize, Serialize};

/// Pattern index as supplied by a host: a number, or text that may or may
/// not parse as one.
///
/// # Examples
/// ```
/// use cell_grid::IndexValue;
///
/// assert_eq!(IndexValue::from(3).as_integer(), 3);
/// assert_eq!(IndexValue::Real(2.9).as_integer(), 2);
/// assert_eq!(IndexValue::Text(" 4 ".into()).as_integer(), 4);
/// assert_eq!(IndexValue::Text("four".into()).as_integer(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexValue {
    /// Integral index.
    Integer(i64),
    /// Real index, truncated toward zero.
    Real(f64),
    /// Textual index; unparsable text counts as zero.
    Text(String),
}

impl IndexValue {
    /// Integer conversion; anything that cannot be converted yields `0`.
    pub fn as_integer(&self) -> i64 {
        match self {
            IndexValue::Integer(value) => *value,
            IndexValue::Real(value) if value.is_finite() => value.trunc() as i64,
            IndexValue::Real(_) => 0,
            IndexValue::Text(text) => text.trim().parse().unwrap_or(0),
        }
    }
}

impl From<i64> for IndexValue {
    fn from(value: i64) -> Self {
        IndexValue::Integer(value)
    }
}

impl From<&str> for IndexValue {
    fn from(value: &str) -> Self {
        IndexValue::Text(value.to_string())
    }
}

/// Grid generation request as received from a host. Every field is optional,
/// and a field of the wrong JSON type decodes as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridInput {
    /// Pattern name, case-insensitive.
    #[serde(deserialize_with = "lenient::text")]
    pub pattern: Option<String>,
    /// Pattern index; takes precedence over `pattern` when present.
    #[serde(deserialize_with = "lenient::index")]
    pub index: Option<IndexValue>,
    /// Cells along X.
    #[serde(deserialize_with = "lenient::count")]
    pub x: Option<i64>,
    /// Cells along Y.
    #[serde(deserialize_with = "lenient::count")]
    pub y: Option<i64>,
    /// Module size.
    #[serde(deserialize_with = "lenient::real")]
    pub size: Option<f64>,
    /// Grid corner.
    #[serde(deserialize_with = "lenient::point")]
    pub origin: Option<Point>,
    /// Weave strip thickness as a fraction of the module size.
    #[serde(deserialize_with = "lenient::real")]
    pub band_ratio: Option<f64>,
}

/// Resolved grid parameters. Always valid for every generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Cells along X (>= 1).
    pub x: u32,
    /// Cells along Y (>= 1).
    pub y: u32,
    /// Module size (> 0).
    pub size: f64,
    /// Grid corner; its z is shared by every generated point.
    pub origin: Point,
    /// Weave strip ratio, clamped to its accepted range.
    pub band_ratio: f64,
}

impl GridParams {
    /// Builds parameters, substituting defaults for invalid values.
    ///
    /// # Examples
    /// ```
    /// use cell_grid::{GridParams, Point};
    ///
    /// let params = GridParams::new(0, 3, -2.0, Point::ZERO);
    /// assert_eq!(params.x, 10);
    /// assert_eq!(params.y, 3);
    /// assert_eq!(params.size, 1.0);
    /// ```
    pub fn new(x: i64, y: i64, size: f64, origin: Point) -> Self {
        Self {
            x: resolve_count(Some(x)),
            y: resolve_count(Some(y)),
            size: resolve_size(Some(size)),
            origin: resolve_origin(Some(origin)),
            band_ratio: DEFAULT_BAND_RATIO,
        }
    }

    /// Returns a copy with the weave band ratio replaced (clamped).
    pub fn with_band_ratio(mut self, band_ratio: f64) -> Self {
        self.band_ratio = clamp_band_ratio(band_ratio);
        self
    }

    /// Resolves raw host input.
    pub fn resolve(input: &GridInput) -> Self {
        Self {
            x: resolve_count(input.x),
            y: resolve_count(input.y),
            size: resolve_size(input.size),
            origin: resolve_origin(input.origin),
            band_ratio: clamp_band_ratio(input.band_ratio.unwrap_or(DEFAULT_BAND_RATIO)),
        }
    }

    /// Number of cells every generator emits for these parameters.
    pub fn cell_count(&self) -> usize {
        self.x as usize * self.y as usize
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            x: DEFAULT_GRID_COUNT,
            y: DEFAULT_GRID_COUNT,
            size: DEFAULT_MODULE_SIZE,
            origin: Point::ZERO,
            band_ratio: DEFAULT_BAND_RATIO,
        }
    }
}

fn resolve_count(value: Option<i64>) -> u32 {
    value
        .filter(|v| *v >= 1)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(DEFAULT_GRID_COUNT)
}

fn resolve_size(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_MODULE_SIZE)
}

fn resolve_origin(value: Option<Point>) -> Point {
    value.filter(|p| p.is_finite()).unwrap_or(Point::ZERO)
}
