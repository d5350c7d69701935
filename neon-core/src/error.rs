//! Configuration errors

use thiserror::Error;

/// Errors reported when parsing or validating a neon configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid animation type: {0:?} (expected glow, pulse or none)")]
    InvalidAnimationType(String),
    #[error("Invalid number for {key}: {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("Animation duration must be at least one second")]
    ZeroDuration,
}
