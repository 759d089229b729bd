use crate::models::{Axis, Format};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoordinateError>;

#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("Invalid coordinate format: '{input}' ({reason})")]
    InvalidFormat { input: String, reason: String },

    #[error("Invalid range: {axis} magnitude {magnitude} is outside [0, {}]", .axis.max_magnitude())]
    OutOfRange { axis: Axis, magnitude: f64 },

    #[error("Values are not of the same type: lat is {lat}, long is {long}")]
    FormatMismatch { lat: Format, long: Format },

    #[error("One or more lat/long pairs invalid: {count} tokens cannot be paired")]
    OddBatchSize { count: usize },

    #[error("Invalid precision {precision}: expected {min} to {max} digits")]
    InvalidPrecision {
        precision: usize,
        min: usize,
        max: usize,
    },

    #[error("Unexpected field count {0}, expected 1 to 3")]
    UnexpectedFieldCount(usize),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl CoordinateError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        CoordinateError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
