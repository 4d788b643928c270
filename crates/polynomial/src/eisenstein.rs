// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Eisenstein's irreducibility criterion.
//!
//! The criterion is sufficient, not necessary: a `false` verdict means no prime in the
//! candidate set certifies irreducibility, not that the polynomial factors.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::sieve::sieve_primes_up_to;
use tracing::{debug, trace};

fn divisible(value: i64, divisor: i128) -> bool {
    (value as i128) % divisor == 0
}

/// Check the three Eisenstein conditions of `coefficients` for `prime`.
///
/// `N` is `coefficients.len()`.
///
/// 1. `A[0]` is not divisible by `prime`.
/// 2. `A[1..=N-2]` are all divisible by `prime`.
/// 3. `A[N-1]` is divisible by `prime` but not by `prime^2`.
///
/// A single coefficient can never satisfy both the first and the last condition.
pub fn satisfies_eisenstein(coefficients: &[i64], prime: u64) -> bool {
    let (Some(&top), Some(&last)) = (coefficients.first(), coefficients.last()) else {
        return false;
    };
    if coefficients.len() < 2 || prime < 2 {
        return false;
    }

    let p = prime as i128;
    if divisible(top, p) {
        return false;
    }

    let inner = &coefficients[1..coefficients.len() - 1];
    if let Some(index) = inner.iter().position(|&a| !divisible(a, p)) {
        trace!(prime, index = index + 1, "inner coefficient not divisible");
        return false;
    }

    divisible(last, p) && !divisible(last, p * p)
}

/// Return the smallest prime certifying irreducibility of `coefficients`, if any.
///
/// Candidate primes are all primes up to `max(A) + 1`, tested in ascending order.
pub fn eisenstein_certificate(coefficients: &[i64]) -> PolynomialResult<Option<u64>> {
    let Some(&max) = coefficients.iter().max() else {
        return Err(PolynomialError::invalid_argument(
            "coefficient sequence must not be empty",
        ));
    };
    if max <= 0 {
        return Err(PolynomialError::invalid_argument(format!(
            "at least one coefficient must be positive (max = {max})"
        )));
    }

    let primes = sieve_primes_up_to(max as u64 + 1)?;
    let certificate = primes
        .into_iter()
        .find(|&p| satisfies_eisenstein(coefficients, p));

    debug!(?coefficients, ?certificate, "eisenstein check");
    Ok(certificate)
}

/// Whether Eisenstein's criterion certifies `coefficients` irreducible for some prime.
///
/// `len` must match the number of coefficients.
pub fn is_irreducible_by_eisenstein(coefficients: &[i64], len: usize) -> PolynomialResult<bool> {
    if len != coefficients.len() {
        return Err(PolynomialError::invalid_argument(format!(
            "length {len} does not match {} coefficients",
            coefficients.len()
        )));
    }
    Ok(eisenstein_certificate(coefficients)?.is_some())
}
