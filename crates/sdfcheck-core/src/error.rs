//! Error types for configuration and job setup.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Neither a scan directory nor an explicit input file was given
    #[error("no input source configured: pass --svg-dir and/or --svg")]
    NoInputSource,

    /// Unknown renderer mode
    #[error("invalid mode '{0}': expected one of sdf, psdf, msdf, mtsdf")]
    InvalidMode(String),

    /// A raster size was zero
    #[error("invalid {name}: must be greater than zero")]
    InvalidSize {
        /// Option name
        name: &'static str,
    },

    /// A percentage option was outside [0, 100]
    #[error("invalid {name} {value}: must be a percentage between 0 and 100")]
    InvalidPercentage {
        /// Option name
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
