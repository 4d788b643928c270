// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Binomial coefficients and loss-channel probability mass.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Exact `C(n, k)`.
pub fn binomial(n: u32, k: u32) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        // acc * (n - i) is always divisible by i + 1 here
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// log2 of a big integer from its bit length and top 64 bits.
pub fn log2_big(x: &BigUint) -> f64 {
    if x.is_zero() {
        return f64::NEG_INFINITY;
    }
    let bits = x.bits();
    let shift = bits.saturating_sub(64);
    let top = (x >> shift).to_u64().unwrap_or(u64::MAX);
    (top as f64).log2() + shift as f64
}

/// Probability that exactly `m` of `total` symbols survive a channel losing each one
/// independently with probability `eps`: `C(total, m) eps^(total-m) (1-eps)^m`.
///
/// The coefficient is exact. When it does not fit in an `f64` the product is formed in
/// log2 space instead.
pub fn binomial_mass(total: u32, m: u32, eps: f64) -> f64 {
    if m > total {
        return 0.0;
    }
    let coefficient = binomial(total, m);
    let losses = (total - m) as f64;
    let survivals = m as f64;

    match coefficient.to_f64().filter(|c| c.is_finite()) {
        Some(c) => c * eps.powf(losses) * (1.0 - eps).powf(survivals),
        // A non-finite coefficient means 0 < m < total, so a degenerate eps zeroes the term
        None if eps <= 0.0 || eps >= 1.0 => 0.0,
        None => mass_in_log_space(&coefficient, losses, survivals, eps),
    }
}

fn mass_in_log_space(coefficient: &BigUint, losses: f64, survivals: f64, eps: f64) -> f64 {
    (log2_big(coefficient) + losses * eps.log2() + survivals * (1.0 - eps).log2()).exp2()
}
