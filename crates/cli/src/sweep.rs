// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::fmt_probability;
use anyhow::Result;
use clap::Args;
use rlnc_config::{AnalysisConfig, SweepConfig};
use rlnc_success_model::{sweep, SweepCurve};

/// Command line overrides for the configured sweep
#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    /// Source symbols needed to decode
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Largest redundancy evaluated
    #[arg(long)]
    pub delta_max: Option<u32>,

    /// Packet error rate
    #[arg(long)]
    pub per: Option<f64>,

    /// Galois field order
    #[arg(long)]
    pub field_order: Option<u64>,

    /// Rank slack
    #[arg(long)]
    pub rank_slack: Option<u32>,
}

impl SweepArgs {
    pub fn apply(&self, base: &SweepConfig) -> SweepConfig {
        SweepConfig {
            threshold: self.threshold.unwrap_or(base.threshold),
            delta_max: self.delta_max.unwrap_or(base.delta_max),
            per: self.per.unwrap_or(base.per),
            field_order: self.field_order.unwrap_or(base.field_order),
            rank_slack: self.rank_slack.unwrap_or(base.rank_slack),
            target: base.target,
        }
    }
}

pub fn build_curve(config: &AnalysisConfig, args: &SweepArgs) -> Result<(SweepConfig, SweepCurve)> {
    let sweep_config = args.apply(&config.sweep);
    sweep_config.validate()?;
    let curve = sweep(&sweep_config.scheme_parameters(), sweep_config.delta_max)?;
    Ok((sweep_config, curve))
}

pub fn execute(config: &AnalysisConfig, args: &SweepArgs, json: bool) -> Result<()> {
    let (sweep_config, curve) = build_curve(config, args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&curve)?);
        return Ok(());
    }

    println!(
        "Decoding success vs redundancy (n = {}, PER = {}, q = {}, r = {})",
        sweep_config.threshold, sweep_config.per, sweep_config.field_order, sweep_config.rank_slack
    );
    println!("{:>6} {:>6} {:>12} {:>12}", "delta", "sent", "p_success", "p_perfect");
    for point in &curve.points {
        println!(
            "{:>6} {:>6} {:>12} {:>12}",
            point.delta,
            point.total_sent,
            fmt_probability(point.p_success),
            fmt_probability(point.p_success_perfect)
        );
    }

    match curve.min_redundancy_for(sweep_config.target) {
        Some(delta) => println!(
            "Redundancy needed for {}: {} symbols",
            sweep_config.target, delta
        ),
        None => println!(
            "Target {} not reached within delta_max = {}",
            sweep_config.target, sweep_config.delta_max
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let base = SweepConfig::default();
        let args = SweepArgs {
            threshold: Some(8),
            per: Some(0.05),
            ..Default::default()
        };
        let merged = args.apply(&base);
        assert_eq!(merged.threshold, 8);
        assert_eq!(merged.per, 0.05);
        assert_eq!(merged.delta_max, base.delta_max);
        assert_eq!(merged.field_order, base.field_order);
    }

    #[test]
    fn test_build_curve_rejects_invalid_override() {
        let args = SweepArgs {
            field_order: Some(1),
            ..Default::default()
        };
        assert!(build_curve(&AnalysisConfig::default(), &args).is_err());

        let (_, curve) = build_curve(&AnalysisConfig::default(), &SweepArgs::default()).unwrap();
        assert_eq!(curve.points.len(), 61);
    }
}
