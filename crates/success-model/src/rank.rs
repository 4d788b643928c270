// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{ModelResult, ParameterError};

/// Probability that `m` uniformly random coding vectors over GF(q) reach rank `n + r`.
///
/// Product over `i in 0..n+r` of `1 - q^-(m-i)`: the `i`-th factor is the chance a
/// fresh vector falls outside the span of the previous `i`. With `m < n + r` the rank
/// cannot be reached and the result is exactly zero.
///
/// # Errors
///
/// `InvalidArgument` when `m < n` or `q < 2`.
pub fn rank_success_probability(m: u32, n: u32, r: u32, q: u64) -> ModelResult<f64> {
    if q < 2 {
        return Err(ParameterError::FieldOrder { q }.into());
    }
    if m < n {
        return Err(ParameterError::TooFewReceived { m, n }.into());
    }

    let terms = n as u64 + r as u64;
    let m = m as u64;
    if m < terms {
        return Ok(0.0);
    }

    let q = q as f64;
    Ok((0..terms)
        .map(|i| 1.0 - 1.0 / q.powf((m - i) as f64))
        .product())
}
