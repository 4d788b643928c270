// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Field Polynomial Checks
//!
//! Utilities for validating the polynomials used to construct the Galois field of an
//! RLNC coding scheme.
//!
//! ## Features
//!
//! - Sieve of Eratosthenes for the candidate prime set.
//! - Eisenstein's criterion over the integers, certifying irreducibility over the
//!   rationals for some prime.
//! - Irreducibility and primitivity over GF(2) for bit-packed polynomials, which is
//!   what actually decides whether a polynomial can define GF(2^d).
//!
//! ## Coefficient Ordering
//!
//! Integer coefficient sequences are read with index 0 as the top coefficient. The
//! Eisenstein check applies its "leading term" condition to `A[0]` and its
//! "constant term" condition to `A[N-1]`.

pub mod eisenstein;
pub mod errors;
pub mod gf2;
pub mod polynomial;
pub mod sieve;

pub use eisenstein::{eisenstein_certificate, is_irreducible_by_eisenstein, satisfies_eisenstein};
pub use errors::{Gf2Error, PolynomialError, PolynomialResult};
pub use gf2::Gf2Polynomial;
pub use polynomial::Polynomial;
pub use sieve::{sieve_primes_up_to, MAX_SIEVE_BOUND};
