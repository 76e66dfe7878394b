//! # Tiling Errors
//!
//! Error types for grid generation.
//!
//! ## Error Policy
//!
//! - Out-of-range inputs are never errors; they are replaced by defaults
//! - Only structural impossibilities surface as errors

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during grid generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TilingError {
    /// The pattern registry holds no generator to resolve against.
    #[error("Pattern registry is empty: no generator available")]
    EmptyRegistry,

    /// Precision settings were rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, TilingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(TilingError::EmptyRegistry.to_string().contains("empty"));

        let err: TilingError = ConfigError::InvalidDecimals(30).into();
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TilingError>();
    }
}
