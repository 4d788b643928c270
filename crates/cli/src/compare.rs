// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::fmt_probability;
use crate::sweep::{build_curve, SweepArgs};
use anyhow::{bail, Result};
use rlnc_config::AnalysisConfig;
use rlnc_success_model::{compare, MeasuredSample, ModelComparison};
use tracing::{info, warn};

pub fn run(config: &AnalysisConfig, args: &SweepArgs, trials: Vec<u32>) -> Result<ModelComparison> {
    if trials.is_empty() {
        bail!("No trials given");
    }
    let (sweep_config, curve) = build_curve(config, args)?;

    let sample = MeasuredSample::from(trials);
    let histogram = sample.histogram(sweep_config.delta_max, sweep_config.delta_max)?;
    if histogram.outside() > 0 {
        warn!(
            "{} of {} trials exceed delta_max = {} and are not binned",
            histogram.outside(),
            sample.len(),
            sweep_config.delta_max
        );
    }

    let comparison = compare(&curve, &histogram);
    info!(
        trials = sample.len(),
        max_abs_deviation = comparison.max_abs_deviation,
        "model comparison complete"
    );
    Ok(comparison)
}

pub fn execute(
    config: &AnalysisConfig,
    args: &SweepArgs,
    trials: Vec<u32>,
    json: bool,
) -> Result<()> {
    let comparison = run(config, args, trials)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("{:>6} {:>12} {:>12} {:>12}", "delta", "model", "measured", "deviation");
    for row in &comparison.rows {
        println!(
            "{:>6} {:>12} {:>12} {:>12}",
            row.delta,
            fmt_probability(row.model),
            fmt_probability(row.measured),
            fmt_probability((row.model - row.measured).abs())
        );
    }
    println!(
        "Maximum absolute deviation: {}",
        fmt_probability(comparison.max_abs_deviation)
    );

    Ok(())
}
