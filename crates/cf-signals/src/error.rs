//! Error types for signal construction.

use thiserror::Error;

/// Result type for signal operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur when building or selecting signals.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    /// Invalid argument provided to a signal constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Profile name did not match any known generator.
    #[error("Unknown profile: {name}")]
    UnknownProfile { name: String },

    #[error(transparent)]
    Core(#[from] cf_core::CfError),
}
