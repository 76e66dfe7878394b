//! # Motif Parameters
//!
//! Raw patternizer input and its resolved form. As with grid parameters,
//! out-of-range values are replaced rather than rejected; only an explicitly
//! supplied, unusable offset tolerance is an error.

use crate::error::{MotifError, Result};
use cell_grid::lenient;
use config::constants::{
    clamp_inset, TilingConfig, DEFAULT_INSET, DEFAULT_MODE, DEFAULT_ROTATION_DEGREES,
    DEFAULT_STEPS,
};
use serde::{Deserialize, Serialize};

/// Motif family applied to every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Repeated inward offsets.
    Concentric,
    /// Star polygon pulled toward the centroid.
    Star,
    /// Lines from the centroid to vertices and edge midpoints.
    Spokes,
    /// Cell boundary copied through unchanged.
    Passthrough,
}

impl Mode {
    /// Every mode, in display order.
    pub fn all() -> &'static [Mode] {
        &[Mode::Concentric, Mode::Star, Mode::Spokes, Mode::Passthrough]
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Concentric => "concentric",
            Mode::Star => "star",
            Mode::Spokes => "spokes",
            Mode::Passthrough => "passthrough",
        }
    }

    /// Parses a mode name after trimming and lowercasing. Anything
    /// unrecognised is [`Mode::Passthrough`].
    ///
    /// # Examples
    /// ```
    /// use cell_motif::Mode;
    ///
    /// assert_eq!(Mode::from_name(" Star "), Mode::Star);
    /// assert_eq!(Mode::from_name("zigzag"), Mode::Passthrough);
    /// ```
    pub fn from_name(name: &str) -> Mode {
        let key = name.trim().to_lowercase();
        Mode::all()
            .iter()
            .copied()
            .find(|m| m.name() == key)
            .unwrap_or(Mode::Passthrough)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::from_name(DEFAULT_MODE)
    }
}

/// Patternizer request as received from a host. Every field is optional,
/// and a field of the wrong JSON type decodes as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotifInput {
    /// Mode name; absent or blank selects `concentric`.
    #[serde(deserialize_with = "lenient::text")]
    pub mode: Option<String>,
    /// Inset fraction.
    #[serde(deserialize_with = "lenient::real")]
    pub inset: Option<f64>,
    /// Ring count (concentric) or spike factor (star).
    #[serde(deserialize_with = "lenient::count")]
    pub steps: Option<i64>,
    /// Per-cell rotation in degrees.
    #[serde(deserialize_with = "lenient::real")]
    pub rotate: Option<f64>,
    /// Offset tolerance; defaults to the model tolerance stand-in.
    #[serde(deserialize_with = "lenient::real")]
    pub tolerance: Option<f64>,
}

/// Resolved patternizer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifParams {
    /// Selected mode.
    pub mode: Mode,
    /// Inset as supplied (after defaulting); see [`MotifParams::inset_fraction`].
    pub inset: f64,
    /// Ring count or spike factor, at least 1.
    pub steps: u32,
    /// Rotation in degrees, finite.
    pub rotation_degrees: f64,
    /// Precision settings forwarded to the kernel.
    pub config: TilingConfig,
}

impl MotifParams {
    /// Resolves raw host input.
    ///
    /// # Errors
    /// [`MotifError::InvalidTolerance`] when a tolerance is supplied that is
    /// not finite and positive.
    ///
    /// # Examples
    /// ```
    /// use cell_motif::{Mode, MotifInput, MotifParams};
    ///
    /// let params = MotifParams::resolve(&MotifInput {
    ///     mode: Some("SPOKES".into()),
    ///     steps: Some(0),
    ///     ..MotifInput::default()
    /// })
    /// .unwrap();
    /// assert_eq!(params.mode, Mode::Spokes);
    /// assert_eq!(params.steps, 3);
    /// ```
    pub fn resolve(input: &MotifInput) -> Result<Self> {
        let mut config = TilingConfig::default();
        if let Some(tolerance) = input.tolerance {
            config = TilingConfig::new(config.edge_key_decimals, tolerance)
                .map_err(|_| MotifError::InvalidTolerance(tolerance))?;
        }

        let mode = match input.mode.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Mode::from_name(name),
            _ => Mode::default(),
        };

        Ok(Self {
            mode,
            inset: input
                .inset
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_INSET),
            steps: resolve_steps(input.steps),
            rotation_degrees: input
                .rotate
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_ROTATION_DEGREES),
            config,
        })
    }

    /// Parameters for `mode` with every other setting at its default.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Inset clamped into the accepted fraction range.
    pub fn inset_fraction(&self) -> f64 {
        clamp_inset(self.inset)
    }

    /// Rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }

    /// Tolerance forwarded to the offset kernel.
    pub fn tolerance(&self) -> f64 {
        self.config.offset_tolerance
    }
}

impl Default for MotifParams {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            inset: DEFAULT_INSET,
            steps: DEFAULT_STEPS,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            config: TilingConfig::default(),
        }
    }
}

fn resolve_steps(value: Option<i64>) -> u32 {
    value
        .filter(|v| *v >= 1)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(DEFAULT_STEPS)
}
