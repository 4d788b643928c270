// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial checks.

use thiserror::Error;

/// Errors that can occur while checking a polynomial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// The caller supplied arguments the check cannot work with
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// GF(2) polynomial errors
    #[error("GF(2) polynomial error: {message}")]
    Gf2 { message: String },
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;

/// Errors specific to bit-packed polynomials over GF(2)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Gf2Error {
    /// A coefficient other than 0 or 1 was supplied
    #[error("Coefficient {value} at index {index} is not a GF(2) element")]
    NotBinary { index: usize, value: i64 },

    /// The polynomial does not fit the bit-packed representation
    #[error("Degree {degree} exceeds the supported maximum of {max}")]
    DegreeTooLarge { degree: usize, max: usize },

    /// The zero polynomial or a constant was supplied where a degree >= 1 is required
    #[error("Polynomial {polynomial:#x} has no positive degree")]
    Constant { polynomial: u64 },
}

impl From<Gf2Error> for PolynomialError {
    fn from(err: Gf2Error) -> Self {
        PolynomialError::Gf2 {
            message: err.to_string(),
        }
    }
}

impl PolynomialError {
    /// Create an invalid argument error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PolynomialError::InvalidArgument {
            message: message.into(),
        }
    }
}
