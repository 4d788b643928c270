// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::binomial::binomial_mass;
use crate::errors::{ModelResult, ParameterError};
use crate::rank::rank_success_probability;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of an RLNC transmission, fixed across a redundancy sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemeParameters {
    /// Source symbols `n` needed to decode
    pub source_symbols: u32,
    /// Per-symbol loss probability `eps` (the packet error rate)
    pub loss_probability: f64,
    /// Rank slack `r`; the rank product runs over `n + r` terms
    pub rank_slack: u32,
    /// Field order `q`
    pub field_order: u64,
}

impl Default for SchemeParameters {
    fn default() -> Self {
        Self {
            source_symbols: 20,
            loss_probability: 0.2,
            rank_slack: 0,
            field_order: 256,
        }
    }
}

impl SchemeParameters {
    pub fn new(source_symbols: u32, loss_probability: f64, field_order: u64) -> Self {
        Self {
            source_symbols,
            loss_probability,
            rank_slack: 0,
            field_order,
        }
    }

    pub fn with_rank_slack(mut self, rank_slack: u32) -> Self {
        self.rank_slack = rank_slack;
        self
    }

    /// Check everything except the transmitted count.
    pub fn validate(&self) -> ModelResult<()> {
        if self.source_symbols == 0 {
            return Err(ParameterError::NoSourceSymbols.into());
        }
        if !(0.0..=1.0).contains(&self.loss_probability) {
            return Err(ParameterError::LossProbability {
                eps: self.loss_probability,
            }
            .into());
        }
        if self.field_order < 2 {
            return Err(ParameterError::FieldOrder {
                q: self.field_order,
            }
            .into());
        }
        Ok(())
    }

    /// Success probabilities when `total_sent` symbols are transmitted.
    pub fn success_rate(&self, total_sent: u32) -> ModelResult<SuccessProbability> {
        success_rate(
            self.source_symbols,
            total_sent,
            self.loss_probability,
            self.rank_slack,
            self.field_order,
        )
    }
}

/// Decoding-success probabilities for one transmitted count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuccessProbability {
    /// Success with rank deficiency accounted for
    pub p_success: f64,
    /// Success of an ideal decoder that never suffers rank deficiency
    pub p_success_perfect: f64,
}

impl SuccessProbability {
    pub fn failure(&self) -> f64 {
        1.0 - self.p_success
    }

    /// Probability lost to rank deficiency alone.
    pub fn rank_deficiency_loss(&self) -> f64 {
        self.p_success_perfect - self.p_success
    }
}

fn clamp_probability(value: f64, name: &'static str) -> f64 {
    if !(-1e-9..=1.0 + 1e-9).contains(&value) {
        warn!(name, value, "probability outside [0, 1] before clamping");
    }
    value.clamp(0.0, 1.0)
}

/// Probability of decoding `n` source symbols when `total` are sent over a channel
/// losing each symbol with probability `eps`.
///
/// Sums, over every received count `m` in `n..=total`, the binomial mass of receiving
/// exactly `m` symbols weighted by [`rank_success_probability`]. The unweighted sum is
/// returned as `p_success_perfect`, so `p_success <= p_success_perfect` always holds.
///
/// # Errors
///
/// `InvalidArgument` when `n == 0`, `n > total`, `eps` is outside `[0, 1]` or `q < 2`.
pub fn success_rate(n: u32, total: u32, eps: f64, r: u32, q: u64) -> ModelResult<SuccessProbability> {
    SchemeParameters {
        source_symbols: n,
        loss_probability: eps,
        rank_slack: r,
        field_order: q,
    }
    .validate()?;
    if n > total {
        return Err(ParameterError::SourceExceedsSent { n, total }.into());
    }

    let mut p_success = 0.0;
    let mut p_success_perfect = 0.0;
    for m in n..=total {
        let mass = binomial_mass(total, m, eps);
        p_success += mass * rank_success_probability(m, n, r, q)?;
        p_success_perfect += mass;
    }

    Ok(SuccessProbability {
        p_success: clamp_probability(p_success, "p_success"),
        p_success_perfect: clamp_probability(p_success_perfect, "p_success_perfect"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use proptest::prelude::*;

    #[test]
    fn test_lossless_without_redundancy() {
        for q in [2u64, 4, 16, 256] {
            let result = success_rate(20, 20, 0.0, 0, q).unwrap();
            assert_eq!(result.p_success_perfect, 1.0);
            assert_eq!(
                result.p_success,
                rank_success_probability(20, 20, 0, q).unwrap()
            );
        }
    }

    #[test]
    fn test_reference_experiment_point() {
        // n = 20, PER = 0.2, q = 256: with 10 spare symbols the ideal decoder succeeds
        // about 97.44% of the time, rank deficiency costs about 1.4e-4
        let result = SchemeParameters::default().success_rate(30).unwrap();
        assert!((result.p_success_perfect - 0.974_383_744_664_675).abs() < 1e-12);
        assert!((result.p_success - 0.974_243_603_612_823).abs() < 1e-12);
        assert!(result.rank_deficiency_loss() < 2e-4);
    }

    #[test]
    fn test_total_loss() {
        let result = success_rate(5, 40, 1.0, 0, 256).unwrap();
        assert_eq!(result.p_success, 0.0);
        assert_eq!(result.p_success_perfect, 0.0);
        assert_eq!(result.failure(), 1.0);
    }

    #[test]
    fn test_large_field_approaches_ideal() {
        let result = success_rate(10, 25, 0.3, 0, 1 << 40).unwrap();
        assert!(result.rank_deficiency_loss() < 1e-9);
    }

    #[test]
    fn test_large_transmissions() {
        // C(2000, 1000) does not fit in an f64
        let half = success_rate(1000, 2000, 0.5, 0, 256).unwrap();
        assert!((half.p_success_perfect - 0.508_920).abs() < 1e-5);
        assert!(half.p_success <= half.p_success_perfect);

        let spare = success_rate(1100, 2000, 0.4, 0, 256).unwrap();
        assert!((spare.p_success_perfect - 0.999_997_45).abs() < 1e-6);

        let lossless = success_rate(1100, 2000, 0.0, 0, 256).unwrap();
        assert_eq!(lossless.p_success_perfect, 1.0);
    }

    #[test]
    fn test_invalid_arguments() {
        let cases = [
            success_rate(0, 10, 0.1, 0, 256),
            success_rate(11, 10, 0.1, 0, 256),
            success_rate(5, 10, -0.1, 0, 256),
            success_rate(5, 10, 1.5, 0, 256),
            success_rate(5, 10, f64::NAN, 0, 256),
            success_rate(5, 10, 0.1, 0, 1),
        ];
        for case in cases {
            assert!(matches!(case, Err(ModelError::InvalidArgument { .. })));
        }
    }

    proptest! {
        #[test]
        fn bounded_by_ideal_decoder(
            n in 1u32..30,
            extra in 0u32..40,
            eps in 0.0f64..=1.0,
            r in 0u32..3,
            q in 2u64..512,
        ) {
            let result = success_rate(n, n + extra, eps, r, q).unwrap();
            prop_assert!(result.p_success >= 0.0);
            prop_assert!(result.p_success <= result.p_success_perfect);
            prop_assert!(result.p_success_perfect <= 1.0);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn large_transmissions_stay_bounded_and_monotone(
            n in 900u32..1100,
            total in 1040u32..1300,
            eps in 0.0f64..0.3,
        ) {
            prop_assume!(total >= n);
            let fewer = success_rate(n, total, eps, 0, 256).unwrap();
            let more = success_rate(n, total + 1, eps, 0, 256).unwrap();
            prop_assert!(fewer.p_success >= 0.0);
            prop_assert!(fewer.p_success <= fewer.p_success_perfect);
            prop_assert!(fewer.p_success_perfect <= 1.0);
            prop_assert!(more.p_success >= fewer.p_success - 1e-9);
            prop_assert!(more.p_success_perfect >= fewer.p_success_perfect - 1e-9);
        }
    }
}
