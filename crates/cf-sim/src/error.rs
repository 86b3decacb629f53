//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while deriving parameters or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Physical parameter outside its admissible range (e.g. mass <= 0).
    #[error("Invalid parameter: {what} = {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<cf_core::CfError> for SimError {
    fn from(e: cf_core::CfError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<cf_signals::SignalError> for SimError {
    fn from(e: cf_signals::SignalError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
