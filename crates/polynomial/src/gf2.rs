// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomials over GF(2), bit-packed into a `u64`.
//!
//! Bit `k` holds the coefficient of `x^k`, so `x^8 + x^4 + x^3 + x^2 + 1` is `0x11D`.
//! A polynomial of degree `d` defines GF(2^d) when it is irreducible, and the element
//! `x` generates the multiplicative group when it is also primitive.

use crate::errors::{Gf2Error, PolynomialResult};
use crate::polynomial::Polynomial;
use std::fmt;

/// Highest degree representable in a `u64`.
pub const MAX_DEGREE: usize = 63;

/// Highest degree accepted by [`Gf2Polynomial::is_primitive`], which factors `2^d - 1`.
pub const MAX_PRIMITIVE_DEGREE: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gf2Polynomial {
    bits: u64,
}

fn degree_of(bits: u64) -> Option<usize> {
    (bits != 0).then(|| 63 - bits.leading_zeros() as usize)
}

/// Remainder of `a` divided by the non-zero `m`.
fn rem(mut a: u64, m: u64) -> u64 {
    let Some(dm) = degree_of(m) else {
        return a;
    };
    while let Some(da) = degree_of(a) {
        if da < dm {
            break;
        }
        a ^= m << (da - dm);
    }
    a
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = rem(a, b);
        a = b;
        b = r;
    }
    a
}

/// Distinct prime factors of `n`, ascending.
fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

impl Gf2Polynomial {
    pub fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Build from 0/1 coefficients in descending order of degree.
    pub fn from_coefficients(coefficients: &[u8]) -> PolynomialResult<Self> {
        if coefficients.len() > MAX_DEGREE + 1 {
            return Err(Gf2Error::DegreeTooLarge {
                degree: coefficients.len() - 1,
                max: MAX_DEGREE,
            }
            .into());
        }
        let mut bits = 0u64;
        for (index, &c) in coefficients.iter().enumerate() {
            if c > 1 {
                return Err(Gf2Error::NotBinary {
                    index,
                    value: c as i64,
                }
                .into());
            }
            bits = (bits << 1) | c as u64;
        }
        Ok(Self { bits })
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        degree_of(self.bits)
    }

    /// Coefficients in descending order of degree.
    pub fn coefficients(&self) -> Vec<u8> {
        match self.degree() {
            None => vec![0],
            Some(d) => (0..=d).rev().map(|k| ((self.bits >> k) & 1) as u8).collect(),
        }
    }

    /// `a * b mod self` for operands already reduced modulo `self`.
    pub fn mul_mod(&self, a: u64, b: u64) -> u64 {
        let Some(d) = self.degree() else {
            return 0;
        };
        let top = 1u64 << d;
        let (mut a, mut b) = (a, b);
        let mut result = 0u64;
        while b != 0 {
            if b & 1 == 1 {
                result ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & top != 0 {
                a ^= self.bits;
            }
        }
        result
    }

    /// `base^exp mod self`.
    pub fn pow_mod(&self, base: u64, mut exp: u64) -> u64 {
        let mut result = rem(1, self.bits);
        let mut base = rem(base, self.bits);
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul_mod(result, base);
            }
            base = self.mul_mod(base, base);
            exp >>= 1;
        }
        result
    }

    /// Rabin's test: `f` of degree `d` is irreducible iff `x^(2^d) = x (mod f)` and
    /// `gcd(x^(2^(d/p)) - x, f) = 1` for every prime `p` dividing `d`.
    pub fn is_irreducible(&self) -> bool {
        let d = match self.degree() {
            None | Some(0) => return false,
            Some(1) => return true,
            Some(d) => d,
        };

        let x = rem(0b10, self.bits);
        let checkpoints: Vec<usize> = prime_factors(d as u64)
            .into_iter()
            .map(|p| d / p as usize)
            .collect();

        let mut h = x;
        for i in 1..=d {
            h = self.mul_mod(h, h);
            if checkpoints.contains(&i) && gcd(h ^ x, self.bits) != 1 {
                return false;
            }
        }
        h == x
    }

    /// Whether `x` has multiplicative order `2^d - 1` modulo this polynomial.
    pub fn is_primitive(&self) -> PolynomialResult<bool> {
        let d = match self.degree() {
            None | Some(0) => return Err(Gf2Error::Constant { polynomial: self.bits }.into()),
            Some(d) if d > MAX_PRIMITIVE_DEGREE => {
                return Err(Gf2Error::DegreeTooLarge {
                    degree: d,
                    max: MAX_PRIMITIVE_DEGREE,
                }
                .into())
            }
            Some(d) => d,
        };
        if !self.is_irreducible() {
            return Ok(false);
        }

        let order = (1u64 << d) - 1;
        if self.pow_mod(0b10, order) != 1 {
            return Ok(false);
        }
        Ok(prime_factors(order)
            .into_iter()
            .all(|p| self.pow_mod(0b10, order / p) != 1))
    }
}

impl fmt::Display for Gf2Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficients = self.coefficients().into_iter().map(i64::from).collect();
        write!(f, "{}", Polynomial::new(coefficients))
    }
}
