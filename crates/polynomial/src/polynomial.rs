// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomial candidates.

use crate::eisenstein::eisenstein_certificate;
use crate::errors::{Gf2Error, PolynomialResult};
use crate::gf2::Gf2Polynomial;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate polynomial with integer coefficients in descending order of degree.
///
/// The polynomial is represented as:
/// `a_0 * x^(N-1) + a_1 * x^(N-2) + ... + a_(N-1)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    coefficients: Vec<i64>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &coeff) in self.coefficients.iter().enumerate() {
            let degree = self.coefficients.len() - 1 - i;

            if coeff == 0 {
                continue;
            }

            if first {
                if coeff < 0 {
                    write!(f, "-")?;
                }
            } else if coeff > 0 {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }
            first = false;

            let abs_coeff = coeff.unsigned_abs();
            if degree == 0 || abs_coeff != 1 {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        Self::new(coefficients)
    }
}

impl Polynomial {
    /// Creates a polynomial from coefficients in descending order of degree.
    pub fn new(coefficients: Vec<i64>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from coefficients in ascending order (constant term first).
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<i64>) -> Self {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the nominal degree, `len - 1`. Leading zeros are not trimmed.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Smallest prime for which Eisenstein's criterion holds, if any.
    pub fn eisenstein_certificate(&self) -> PolynomialResult<Option<u64>> {
        eisenstein_certificate(&self.coefficients)
    }

    /// Reinterpret the coefficients as a polynomial over GF(2).
    ///
    /// Every coefficient must be 0 or 1.
    pub fn to_gf2(&self) -> PolynomialResult<Gf2Polynomial> {
        if let Some((index, &value)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, &c)| c != 0 && c != 1)
        {
            return Err(Gf2Error::NotBinary { index, value }.into());
        }
        let bits: Vec<u8> = self.coefficients.iter().map(|&c| c as u8).collect();
        Gf2Polynomial::from_coefficients(&bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Polynomial::new(vec![4, 7, 21, 28]).to_string(),
            "4x^3 + 7x^2 + 21x + 28"
        );
        assert_eq!(
            Polynomial::new(vec![1, 0, 0, 0, 1, 1, 1, 0, 1]).to_string(),
            "x^8 + x^4 + x^3 + x^2 + 1"
        );
        assert_eq!(Polynomial::new(vec![-1, 0, -2]).to_string(), "-x^2 - 2");
        assert_eq!(Polynomial::new(vec![0, 0]).to_string(), "0");
    }

    #[test]
    fn test_ascending_order() {
        let p = Polynomial::from_ascending_coefficients(vec![28, 21, 7, 4]);
        assert_eq!(p.coefficients(), &[4, 7, 21, 28]);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.eisenstein_certificate().unwrap(), Some(7));
    }

    #[test]
    fn test_to_gf2() {
        let p = Polynomial::new(vec![1, 0, 0, 0, 1, 1, 1, 0, 1]);
        assert_eq!(p.to_gf2().unwrap().bits(), 0x11D);
        assert!(Polynomial::new(vec![4, 7, 21, 28]).to_gf2().is_err());
    }
}
