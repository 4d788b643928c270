// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Measured redundancy samples and their comparison against the model.
//!
//! Each trial records how many redundant symbols a real decoder consumed before it
//! succeeded. Binned into a histogram, the normalized cumulative counts estimate the
//! decoding probability as a function of redundancy, which is what the model predicts.

use crate::errors::{HistogramError, ModelResult};
use crate::sweep::SweepCurve;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Redundancy consumed per decoding trial, in trial order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasuredSample {
    trials: Vec<u32>,
}

impl From<Vec<u32>> for MeasuredSample {
    fn from(trials: Vec<u32>) -> Self {
        Self { trials }
    }
}

impl FromIterator<u32> for MeasuredSample {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            trials: iter.into_iter().collect(),
        }
    }
}

impl MeasuredSample {
    pub fn trials(&self) -> &[u32] {
        &self.trials
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Bin the trials into `bins` equal-width bins over `[0, upper]`.
    ///
    /// Bins are half-open except the last, which also takes `upper`. Trials above
    /// `upper` are counted as outside the range.
    pub fn histogram(&self, bins: u32, upper: u32) -> ModelResult<RedundancyHistogram> {
        if bins == 0 {
            return Err(HistogramError::NoBins.into());
        }
        if upper == 0 {
            return Err(HistogramError::EmptyRange { upper }.into());
        }

        let mut counts = vec![0u64; bins as usize];
        let mut outside = 0;
        for &value in &self.trials {
            if value > upper {
                outside += 1;
                continue;
            }
            // value >= i * upper / bins  <=>  value * bins >= i * upper
            let index = (value as u64 * bins as u64 / upper as u64).min(bins as u64 - 1);
            counts[index as usize] += 1;
        }

        Ok(RedundancyHistogram {
            bins,
            upper,
            counts,
            outside,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RedundancyHistogram {
    bins: u32,
    upper: u32,
    counts: Vec<u64>,
    outside: usize,
}

fn normalize_by_max(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| v as f64 / max as f64).collect()
}

impl RedundancyHistogram {
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Trials that fell above the histogram range.
    pub fn outside(&self) -> usize {
        self.outside
    }

    /// Left edge of every bin.
    pub fn left_edges(&self) -> Vec<f64> {
        let width = self.upper as f64 / self.bins as f64;
        (0..self.bins).map(|i| i as f64 * width).collect()
    }

    pub fn cumulative(&self) -> Vec<u64> {
        self.counts
            .iter()
            .scan(0u64, |acc, &c| {
                *acc += c;
                Some(*acc)
            })
            .collect()
    }

    /// Counts scaled so the tallest bin is 1.
    pub fn normalized_counts(&self) -> Vec<f64> {
        normalize_by_max(&self.counts)
    }

    /// Cumulative counts scaled so the last bin is 1: the measured decoding probability.
    pub fn normalized_cumulative(&self) -> Vec<f64> {
        normalize_by_max(&self.cumulative())
    }
}

/// One redundancy value with both the modelled and the measured success probability.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonRow {
    pub delta: u32,
    pub model: f64,
    pub measured: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelComparison {
    pub rows: Vec<ComparisonRow>,
    pub max_abs_deviation: f64,
}

/// Pair each histogram bin with the model point at the bin's left edge.
///
/// Bins whose left edge lies beyond the curve are skipped.
pub fn compare(curve: &SweepCurve, histogram: &RedundancyHistogram) -> ModelComparison {
    let measured = histogram.normalized_cumulative();
    let rows: Vec<ComparisonRow> = histogram
        .left_edges()
        .into_iter()
        .zip(measured)
        .filter_map(|(edge, measured)| {
            let delta = edge.floor() as u32;
            curve.point(delta).map(|point| ComparisonRow {
                delta,
                model: point.p_success,
                measured,
            })
        })
        .collect();

    let max_abs_deviation = rows
        .iter()
        .map(|row| (row.model - row.measured).abs())
        .fold(0.0, f64::max);

    ModelComparison {
        rows,
        max_abs_deviation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::success::SchemeParameters;
    use crate::sweep::sweep;

    #[test]
    fn test_unit_width_bins() {
        let sample = MeasuredSample::from(vec![0, 1, 1, 3, 60, 61]);
        let histogram = sample.histogram(60, 60).unwrap();
        assert_eq!(histogram.counts().len(), 60);
        assert_eq!(histogram.counts()[0], 1);
        assert_eq!(histogram.counts()[1], 2);
        assert_eq!(histogram.counts()[3], 1);
        // the top edge lands in the last bin, anything above is dropped
        assert_eq!(histogram.counts()[59], 1);
        assert_eq!(histogram.outside(), 1);
        assert_eq!(histogram.left_edges()[5], 5.0);
    }

    #[test]
    fn test_wide_bins() {
        let sample: MeasuredSample = [0, 4, 5, 9, 10].into_iter().collect();
        let histogram = sample.histogram(2, 10).unwrap();
        assert_eq!(histogram.counts(), &[2, 3]);
        assert_eq!(histogram.left_edges(), vec![0.0, 5.0]);
    }

    #[test]
    fn test_normalization() {
        let sample = MeasuredSample::from(vec![1, 1, 2, 2, 2, 3]);
        let histogram = sample.histogram(4, 4).unwrap();
        assert_eq!(histogram.cumulative(), vec![0, 2, 5, 6]);
        assert_eq!(histogram.normalized_counts(), vec![0.0, 2.0 / 3.0, 1.0, 1.0 / 3.0]);
        assert_eq!(
            histogram.normalized_cumulative(),
            vec![0.0, 2.0 / 6.0, 5.0 / 6.0, 1.0]
        );
    }

    #[test]
    fn test_empty_sample() {
        let histogram = MeasuredSample::default().histogram(3, 3).unwrap();
        assert_eq!(histogram.normalized_cumulative(), vec![0.0; 3]);
    }

    #[test]
    fn test_invalid_histograms() {
        let sample = MeasuredSample::from(vec![1]);
        assert!(sample.histogram(0, 10).is_err());
        assert!(sample.histogram(10, 0).is_err());
    }

    #[test]
    fn test_compare_against_model() {
        let curve = sweep(&SchemeParameters::default(), 60).unwrap();
        let sample = MeasuredSample::from(vec![5, 6, 6, 7, 8, 8, 9, 10, 12, 15]);
        let histogram = sample.histogram(60, 60).unwrap();
        let comparison = compare(&curve, &histogram);

        assert_eq!(comparison.rows.len(), 60);
        assert_eq!(comparison.rows[10].delta, 10);
        assert_eq!(comparison.rows[10].model, curve.points[10].p_success);
        assert_eq!(comparison.rows[10].measured, 0.8);
        assert!(comparison
            .rows
            .iter()
            .all(|row| (row.model - row.measured).abs() <= comparison.max_abs_deviation));
    }

    #[test]
    fn test_compare_skips_bins_beyond_curve() {
        let curve = sweep(&SchemeParameters::default(), 10).unwrap();
        let histogram = MeasuredSample::from(vec![3]).histogram(20, 20).unwrap();
        assert_eq!(compare(&curve, &histogram).rows.len(), 11);
    }
}
