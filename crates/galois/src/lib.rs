// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Finite field arithmetic over GF(2^d), `1 <= d <= 8`.
//!
//! Elements are bytes. Multiplication and division go through exp/log tables built
//! from a primitive polynomial and a generator, GF(256) over `0x11D` with generator
//! `0x02` by default.

pub mod errors;
pub mod field;
pub mod matrix;

pub use errors::{GaloisError, GaloisResult};
pub use field::{GaloisField, DEFAULT_GENERATOR, DEFAULT_POLYNOMIAL};
pub use matrix::rank;
