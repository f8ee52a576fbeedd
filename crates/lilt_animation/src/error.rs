//! Animation error types

use thiserror::Error;

/// Errors raised while building spring animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A physical parameter is outside the range the integrator accepts
    #[error("Invalid spring configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// No preset is registered under this name
    #[error("Unknown spring preset: {0}")]
    UnknownPreset(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
