// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Decoding-success model for Random Linear Network Coding.
//!
//! A sender transmits `N` coded symbols for a generation of `n` source symbols, each
//! symbol lost independently with probability `eps`. The receiver decodes once the
//! symbols it holds span the source space over GF(q).
//!
//! ## Model
//!
//! The number of received symbols `m` is binomial. Given `m >= n`, the chance that `m`
//! random coding vectors reach full rank is `prod_{i<n+r} (1 - q^-(m-i))`. Weighting the
//! binomial mass by that rank probability gives the decoding-success probability; the
//! unweighted mass is the success of an ideal decoder and bounds it from above.
//!
//! Sweeping the redundancy `delta = N - n` produces the curve compared against the
//! cumulative distribution of measured trials.

pub mod binomial;
pub mod errors;
pub mod measured;
pub mod rank;
pub mod success;
pub mod sweep;

pub use errors::{ModelError, ModelResult};
pub use measured::{compare, ComparisonRow, MeasuredSample, ModelComparison, RedundancyHistogram};
pub use rank::rank_success_probability;
pub use success::{success_rate, SchemeParameters, SuccessProbability};
pub use sweep::{sweep, SweepCurve, SweepPoint};
