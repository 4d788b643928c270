// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use rlnc_polynomial::PolynomialError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaloisError {
    #[error("Field degree {degree} is not supported (expected 1..=8)")]
    UnsupportedDegree { degree: u32 },

    #[error("Polynomial {polynomial:#x} has degree {actual:?}, expected {expected}")]
    PolynomialDegree {
        polynomial: u64,
        expected: u32,
        actual: Option<usize>,
    },

    #[error("Polynomial {polynomial:#x} is not primitive over GF(2)")]
    NotPrimitive { polynomial: u64 },

    #[error("Element {generator:#x} does not generate the multiplicative group")]
    NotAGenerator { generator: u8 },

    #[error("Element {value:#x} is outside GF({order})")]
    OutOfRange { value: u8, order: usize },

    #[error("Row length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

pub type GaloisResult<T> = Result<T, GaloisError>;
