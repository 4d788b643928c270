// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for the decoding-success model
//!
//! Every model operation is a single deterministic computation, so the only failure
//! mode is a caller handing in parameters outside the model's domain.

use thiserror::Error;

/// Main error type for the decoding-success model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Parameters outside the domain of the model
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Specific parameter violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Fewer symbols received than source symbols required
    #[error("received count m ({m}) must be at least n ({n})")]
    TooFewReceived { m: u32, n: u32 },

    /// Field order below 2
    #[error("field order q ({q}) must be at least 2")]
    FieldOrder { q: u64 },

    /// Loss probability outside [0, 1]
    #[error("loss probability {eps} must lie in [0, 1]")]
    LossProbability { eps: f64 },

    /// More source symbols than transmitted symbols
    #[error("source symbols n ({n}) must not exceed transmitted symbols N ({total})")]
    SourceExceedsSent { n: u32, total: u32 },

    /// No source symbols
    #[error("source symbols n must be positive")]
    NoSourceSymbols,
}

/// Histogram parameter violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    #[error("histogram needs at least one bin")]
    NoBins,

    #[error("histogram range [0, {upper}] is empty")]
    EmptyRange { upper: u32 },
}

impl From<ParameterError> for ModelError {
    fn from(err: ParameterError) -> Self {
        ModelError::InvalidArgument {
            message: err.to_string(),
        }
    }
}

impl From<HistogramError> for ModelError {
    fn from(err: HistogramError) -> Self {
        ModelError::InvalidArgument {
            message: err.to_string(),
        }
    }
}

impl ModelError {
    /// Create an invalid argument error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument {
            message: message.into(),
        }
    }
}
