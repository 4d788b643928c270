// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{PolynomialError, PolynomialResult};

/// Largest bound the sieve table will be sized for.
pub const MAX_SIEVE_BOUND: u64 = 1 << 26;

/// Return every prime `p` with `2 <= p <= max`, ascending.
///
/// Classic sieve of Eratosthenes: each surviving `p` strikes out its multiples starting
/// at `p * p`. The result is rebuilt on every call.
///
/// # Errors
///
/// `InvalidArgument` when `max` exceeds [`MAX_SIEVE_BOUND`].
pub fn sieve_primes_up_to(max: u64) -> PolynomialResult<Vec<u64>> {
    if max > MAX_SIEVE_BOUND {
        return Err(PolynomialError::invalid_argument(format!(
            "sieve bound {max} exceeds {MAX_SIEVE_BOUND}"
        )));
    }
    if max < 2 {
        return Ok(Vec::new());
    }

    let limit = max as usize;
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2usize;
    while p * p <= limit {
        if is_prime[p] {
            for multiple in (p * p..=limit).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    Ok(is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i as u64))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_prime_naive(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_primes_up_to_30() {
        assert_eq!(
            sieve_primes_up_to(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_degenerate_bounds() {
        assert!(sieve_primes_up_to(0).unwrap().is_empty());
        assert!(sieve_primes_up_to(1).unwrap().is_empty());
        assert_eq!(sieve_primes_up_to(2).unwrap(), vec![2]);
        assert_eq!(sieve_primes_up_to(29).unwrap().last(), Some(&29));
    }

    #[test]
    fn test_bound_too_large() {
        assert!(matches!(
            sieve_primes_up_to(MAX_SIEVE_BOUND + 1),
            Err(PolynomialError::InvalidArgument { .. })
        ));
        assert!(sieve_primes_up_to(u64::MAX).is_err());
    }

    proptest! {
        #[test]
        fn sieve_matches_trial_division(max in 0u64..2000) {
            let primes = sieve_primes_up_to(max).unwrap();
            let expected: Vec<u64> = (0..=max).filter(|&n| is_prime_naive(n)).collect();
            prop_assert_eq!(primes, expected);
        }
    }
}
