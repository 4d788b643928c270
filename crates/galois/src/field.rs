// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{GaloisError, GaloisResult};
use rlnc_polynomial::Gf2Polynomial;
use tracing::debug;

/// `x^8 + x^4 + x^3 + x^2 + 1`
pub const DEFAULT_POLYNOMIAL: u64 = 0x11D;
pub const DEFAULT_GENERATOR: u8 = 0x02;

/// GF(2^d) with exp/log tables.
///
/// Operations take raw bytes. Values outside `0..order` are not field elements; use
/// [`GaloisField::element`] to validate untrusted input first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaloisField {
    degree: u32,
    polynomial: u64,
    generator: u8,
    exp: Vec<u8>,
    log: Vec<u8>,
}

/// Shift-and-xor multiplication, only used to build the tables.
fn shift_multiply(a: u8, b: u8, degree: u32, polynomial: u64) -> u8 {
    let mask = (1u16 << degree) - 1;
    let high = 1u16 << (degree - 1);
    let reduction = polynomial as u16 & mask;

    let (mut a, mut b) = (a as u16 & mask, b as u16);
    let mut result = 0u16;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        let carry = a & high;
        a = (a << 1) & mask;
        if carry != 0 {
            a ^= reduction;
        }
        b >>= 1;
    }
    result as u8
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::gf256()
    }
}

impl GaloisField {
    /// Build GF(2^degree) from a primitive `polynomial` and a `generator`.
    pub fn new(degree: u32, polynomial: u64, generator: u8) -> GaloisResult<Self> {
        if !(1..=8).contains(&degree) {
            return Err(GaloisError::UnsupportedDegree { degree });
        }

        let poly = Gf2Polynomial::from_bits(polynomial);
        if poly.degree() != Some(degree as usize) {
            return Err(GaloisError::PolynomialDegree {
                polynomial,
                expected: degree,
                actual: poly.degree(),
            });
        }
        if !poly.is_primitive()? {
            return Err(GaloisError::NotPrimitive { polynomial });
        }

        let order = 1usize << degree;
        if generator as usize >= order {
            return Err(GaloisError::OutOfRange {
                value: generator,
                order,
            });
        }

        let field = Self::build(degree, polynomial, generator);

        // A generator must visit every non-zero element before returning to 1
        let mut seen = vec![false; order];
        for &value in &field.exp[..order - 1] {
            if value == 0 || seen[value as usize] {
                return Err(GaloisError::NotAGenerator { generator });
            }
            seen[value as usize] = true;
        }

        debug!(degree, polynomial, generator, "galois field tables built");
        Ok(field)
    }

    /// GF(256) over `0x11D` with generator `0x02`.
    pub fn gf256() -> Self {
        Self::build(8, DEFAULT_POLYNOMIAL, DEFAULT_GENERATOR)
    }

    fn build(degree: u32, polynomial: u64, generator: u8) -> Self {
        let order = 1usize << degree;
        let mut exp = vec![0u8; order];
        let mut log = vec![0u8; 256];

        let mut value = 1u8;
        for (i, slot) in exp.iter_mut().enumerate() {
            *slot = value;
            if i < order - 1 {
                log[value as usize] = i as u8;
            }
            value = shift_multiply(generator, value, degree, polynomial);
        }

        Self {
            degree,
            polynomial,
            generator,
            exp,
            log,
        }
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of field elements, `2^degree`.
    pub fn order(&self) -> usize {
        1 << self.degree
    }

    pub fn polynomial(&self) -> u64 {
        self.polynomial
    }

    pub fn generator(&self) -> u8 {
        self.generator
    }

    pub fn exp_table(&self) -> &[u8] {
        &self.exp
    }

    pub fn element(&self, value: u8) -> GaloisResult<u8> {
        if (value as usize) < self.order() {
            Ok(value)
        } else {
            Err(GaloisError::OutOfRange {
                value,
                order: self.order(),
            })
        }
    }

    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let cycle = self.order() - 1;
        let index = (self.log[a as usize] as usize + self.log[b as usize] as usize) % cycle;
        self.exp[index]
    }

    pub fn div(&self, a: u8, b: u8) -> GaloisResult<u8> {
        if b == 0 {
            return Err(GaloisError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let cycle = self.order() - 1;
        let index =
            (cycle + self.log[a as usize] as usize - self.log[b as usize] as usize) % cycle;
        Ok(self.exp[index])
    }

    pub fn inv(&self, a: u8) -> GaloisResult<u8> {
        self.div(1, a)
    }

    pub fn pow(&self, a: u8, exp: u32) -> u8 {
        if exp == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let cycle = (self.order() - 1) as u64;
        let index = (self.log[a as usize] as u64 * exp as u64) % cycle;
        self.exp[index as usize]
    }
}
