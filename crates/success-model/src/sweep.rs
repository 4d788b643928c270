// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Redundancy sweeps: the model curve plotted against measured trials.

use crate::errors::{ModelError, ModelResult};
use crate::success::SchemeParameters;
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Model output for `total_sent = n + delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepPoint {
    pub delta: u32,
    pub total_sent: u32,
    pub p_success: f64,
    pub p_success_perfect: f64,
}

/// Sweep points for `delta = 0..=delta_max`, in order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepCurve {
    pub parameters: SchemeParameters,
    pub points: Vec<SweepPoint>,
}

impl SweepCurve {
    pub fn p_success(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.p_success).collect()
    }

    pub fn p_success_perfect(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.p_success_perfect).collect()
    }

    pub fn point(&self, delta: u32) -> Option<&SweepPoint> {
        self.points.get(delta as usize)
    }

    /// Smallest redundancy whose success probability reaches `target`.
    pub fn min_redundancy_for(&self, target: f64) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.p_success >= target)
            .map(|p| p.delta)
    }
}

/// Evaluate the model for every redundancy `delta` in `0..=delta_max`.
pub fn sweep(parameters: &SchemeParameters, delta_max: u32) -> ModelResult<SweepCurve> {
    parameters.validate()?;
    let n = parameters.source_symbols;
    if n.checked_add(delta_max).is_none() {
        return Err(ModelError::invalid_argument(format!(
            "n ({n}) + delta_max ({delta_max}) overflows"
        )));
    }

    let mut points = Vec::with_capacity(delta_max as usize + 1);
    for delta in 0..=delta_max {
        let total_sent = n + delta;
        let result = parameters.success_rate(total_sent)?;
        debug!(
            delta,
            total_sent,
            p_success = result.p_success,
            gap = result.p_success - result.p_success_perfect,
            "sweep point"
        );
        points.push(SweepPoint {
            delta,
            total_sent,
            p_success: result.p_success,
            p_success_perfect: result.p_success_perfect,
        });
    }

    info!(
        n,
        delta_max,
        eps = parameters.loss_probability,
        q = parameters.field_order,
        "redundancy sweep complete"
    );

    Ok(SweepCurve {
        parameters: *parameters,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_reference_sweep() {
        let curve = sweep(&SchemeParameters::default(), 60).unwrap();
        assert_eq!(curve.points.len(), 61);
        assert_eq!(curve.points[0].total_sent, 20);
        assert_eq!(curve.points[60].total_sent, 80);
        assert!(curve.points[60].p_success > 1.0 - 1e-9);
        assert_eq!(curve.p_success().len(), curve.p_success_perfect().len());
        assert!(logs_contain("redundancy sweep complete"));
    }

    #[test]
    fn test_min_redundancy_for() {
        let curve = sweep(&SchemeParameters::default(), 60).unwrap();
        let delta = curve.min_redundancy_for(0.99).unwrap();
        assert!(curve.point(delta).unwrap().p_success >= 0.99);
        assert!(curve.point(delta - 1).unwrap().p_success < 0.99);
        assert_eq!(curve.min_redundancy_for(1.5), None);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut params = SchemeParameters::default();
        params.loss_probability = 2.0;
        assert!(sweep(&params, 10).is_err());

        let params = SchemeParameters::new(u32::MAX, 0.1, 256);
        assert!(sweep(&params, 1).is_err());
    }

    proptest! {
        #[test]
        fn non_decreasing_in_redundancy(
            n in 1u32..25,
            eps in 0.0f64..0.9,
            q in 2u64..300,
        ) {
            let curve = sweep(&SchemeParameters::new(n, eps, q), 30).unwrap();
            for pair in curve.points.windows(2) {
                prop_assert!(pair[1].p_success >= pair[0].p_success - 1e-12);
                prop_assert!(pair[1].p_success_perfect >= pair[0].p_success_perfect - 1e-12);
            }
        }
    }
}
