//! # Configuration Constants
//!
//! Centralized values shared by the tiling pipeline crates. Each public item
//! documents its purpose and provides a minimal usage example so downstream
//! crates can avoid scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Closure, degeneracy and edge-key tolerances
//! - **Grid Defaults**: Substitutes for absent or out-of-range grid inputs
//! - **Motif Defaults**: Substitutes and clamps for patternizer inputs
//! - **Runtime Config**: Validated bundle threaded through requests

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Distance under which the first and last point of a polyline are treated
/// as the same point, i.e. the polyline is explicitly closed.
///
/// # Examples
/// ```
/// use config::constants::CLOSURE_EPSILON;
/// let gap: f64 = (1.0_f64 - (1.0 + 1e-12)).abs();
/// assert!(gap < CLOSURE_EPSILON);
/// ```
pub const CLOSURE_EPSILON: f64 = 1.0e-9;

/// Shoelace sums with a magnitude below this value mark a polygon as
/// degenerate; centroid computation then falls back to the vertex mean.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_AREA_EPSILON;
/// let collinear_cross_sum = 0.0_f64;
/// assert!(collinear_cross_sum.abs() < DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1.0e-12;

/// Number of decimal digits kept when building canonical edge keys.
///
/// Two endpoints that agree after rounding to this many decimals are the
/// same endpoint for deduplication purposes.
///
/// # Examples
/// ```
/// use config::constants::{edge_key_scale, EDGE_KEY_DECIMALS};
/// assert_eq!(edge_key_scale(EDGE_KEY_DECIMALS), 1.0e6);
/// ```
pub const EDGE_KEY_DECIMALS: u32 = 6;

/// Largest accepted edge-key precision. Keys are stored as `i64`, so the
/// scaled coordinates must stay well inside its range.
pub const MAX_EDGE_KEY_DECIMALS: u32 = 12;

/// Tolerance handed to offset kernels when the host does not supply one.
///
/// Mirrors the common CAD default model tolerance of one thousandth of a
/// unit.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OFFSET_TOLERANCE;
/// assert!(DEFAULT_OFFSET_TOLERANCE > 0.0);
/// ```
pub const DEFAULT_OFFSET_TOLERANCE: f64 = 1.0e-3;

/// Largest distance a vertex may sit from a fitted plane for the curve to
/// still count as planar.
pub const PLANE_FIT_TOLERANCE: f64 = 1.0e-6;

/// Normalised cross products below this value mark two offset edge lines as
/// parallel; their shared corner is then shifted along the edge normal
/// instead of intersected.
pub const PARALLEL_EPSILON: f64 = 1.0e-12;

// =============================================================================
// GRID DEFAULTS
// =============================================================================

/// Cell count substituted for an absent or non-positive X or Y.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GRID_COUNT;
/// let x: Option<i64> = None;
/// let x = x.filter(|v| *v >= 1).map(|v| v as u32).unwrap_or(DEFAULT_GRID_COUNT);
/// assert_eq!(x, 10);
/// ```
pub const DEFAULT_GRID_COUNT: u32 = 10;

/// Module size substituted for an absent, non-finite or non-positive size.
pub const DEFAULT_MODULE_SIZE: f64 = 1.0;

/// Pattern name used when no index is given and the name is absent or
/// unknown.
pub const DEFAULT_PATTERN: &str = "square";

/// Band thickness of weave strips as a fraction of the module size.
pub const DEFAULT_BAND_RATIO: f64 = 0.6;

/// Smallest accepted weave band ratio.
pub const MIN_BAND_RATIO: f64 = 0.05;

/// Largest accepted weave band ratio.
pub const MAX_BAND_RATIO: f64 = 0.95;

// =============================================================================
// MOTIF DEFAULTS
// =============================================================================

/// Mode name used when the caller supplies none.
pub const DEFAULT_MODE: &str = "concentric";

/// Inset fraction used when the caller supplies none.
///
/// # Examples
/// ```
/// use config::constants::{clamp_inset, DEFAULT_INSET};
/// assert_eq!(clamp_inset(DEFAULT_INSET), DEFAULT_INSET);
/// ```
pub const DEFAULT_INSET: f64 = 0.2;

/// Lower clamp bound for inset fractions.
pub const MIN_INSET: f64 = 0.01;

/// Upper clamp bound for inset fractions.
pub const MAX_INSET: f64 = 0.9;

/// Ring count (concentric) or spike factor (star) used when the caller
/// supplies none or a value below one.
pub const DEFAULT_STEPS: u32 = 3;

/// Per-cell rotation in degrees used when the caller supplies none.
pub const DEFAULT_ROTATION_DEGREES: f64 = 0.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps an inset fraction into `[MIN_INSET, MAX_INSET]`.
///
/// Non-finite input falls back to [`DEFAULT_INSET`].
///
/// # Examples
/// ```
/// use config::constants::clamp_inset;
/// assert_eq!(clamp_inset(0.0), 0.01);
/// assert_eq!(clamp_inset(0.3), 0.3);
/// assert_eq!(clamp_inset(f64::NAN), 0.2);
/// ```
#[inline]
pub fn clamp_inset(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_INSET, MAX_INSET)
    } else {
        DEFAULT_INSET
    }
}

/// Clamps a weave band ratio into `[MIN_BAND_RATIO, MAX_BAND_RATIO]`.
///
/// Non-finite input falls back to [`DEFAULT_BAND_RATIO`].
///
/// # Examples
/// ```
/// use config::constants::clamp_band_ratio;
/// assert_eq!(clamp_band_ratio(1.5), 0.95);
/// assert_eq!(clamp_band_ratio(0.0), 0.05);
/// ```
#[inline]
pub fn clamp_band_ratio(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_BAND_RATIO, MAX_BAND_RATIO)
    } else {
        DEFAULT_BAND_RATIO
    }
}

/// Scale factor turning coordinates into integer edge-key components for a
/// given number of decimals.
///
/// # Examples
/// ```
/// use config::constants::edge_key_scale;
/// assert_eq!(edge_key_scale(3), 1000.0);
/// ```
#[inline]
pub fn edge_key_scale(decimals: u32) -> f64 {
    10f64.powi(decimals.min(MAX_EDGE_KEY_DECIMALS) as i32)
}

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of the tunable precision settings shared between the
/// grid and motif crates.
///
/// # Examples
/// ```
/// use config::constants::TilingConfig;
/// let config = TilingConfig::default();
/// assert_eq!(config.edge_key_decimals, 6);
/// assert!(config.offset_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingConfig {
    /// Decimal digits kept in canonical edge keys.
    pub edge_key_decimals: u32,
    /// Tolerance forwarded to the offset kernel.
    pub offset_tolerance: f64,
}

impl TilingConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// precision values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::TilingConfig;
    /// let cfg = TilingConfig::new(4, 1.0e-4).expect("valid config");
    /// assert_eq!(cfg.edge_key_decimals, 4);
    /// assert!(TilingConfig::new(4, 0.0).is_err());
    /// ```
    pub fn new(edge_key_decimals: u32, offset_tolerance: f64) -> Result<Self, ConfigError> {
        if edge_key_decimals > MAX_EDGE_KEY_DECIMALS {
            return Err(ConfigError::InvalidDecimals(edge_key_decimals));
        }
        if !offset_tolerance.is_finite() || offset_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(offset_tolerance));
        }
        Ok(Self {
            edge_key_decimals,
            offset_tolerance,
        })
    }
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            edge_key_decimals: EDGE_KEY_DECIMALS,
            offset_tolerance: DEFAULT_OFFSET_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the offset tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the edge-key precision exceeds [`MAX_EDGE_KEY_DECIMALS`].
    InvalidDecimals(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "offset tolerance must be positive: {value}")
            }
            ConfigError::InvalidDecimals(value) => {
                write!(
                    f,
                    "edge key decimals must be <= {MAX_EDGE_KEY_DECIMALS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
