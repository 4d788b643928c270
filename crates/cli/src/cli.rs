// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::telemetry::setup_simple_tracing;
use crate::sweep::SweepArgs;
use crate::{compare, eisenstein, field, print_config, sweep};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use rlnc_config::{load_config, AnalysisConfig, PolynomialLiteral};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "rlnc")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RLNC_GIT_REV"), ")"))]
#[command(about = "Decoding-success model and field polynomial checks for RLNC", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `rlnc -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());
        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            Commands::Sweep { args, json } => sweep::execute(&config, &args, json)?,
            Commands::Compare { args, trials, json } => {
                compare::execute(&config, &args, trials, json)?
            }
            Commands::Eisenstein { coefficients } => eisenstein::execute(&config, coefficients)?,
            Commands::Field {
                polynomial,
                degree,
                generator,
            } => field::execute(&config, polynomial, degree, generator)?,
            Commands::Config => print_config::execute(&config)?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<AnalysisConfig> {
        load_config(self.config.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the decoding-success model over a range of redundancies
    Sweep {
        #[command(flatten)]
        args: SweepArgs,

        /// Print the curve as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare measured trials with the model curve
    Compare {
        #[command(flatten)]
        args: SweepArgs,

        /// Redundancy consumed per decoding trial, eg. `--trials 5,7,6`
        #[arg(long, value_delimiter = ',', required = true)]
        trials: Vec<u32>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check integer polynomials with Eisenstein's criterion (top coefficient first)
    Eisenstein {
        /// Coefficients of one candidate; the configured candidates are used when omitted
        #[arg(allow_negative_numbers = true)]
        coefficients: Vec<i64>,
    },

    /// Check a field-defining polynomial over GF(2) and build its tables
    Field {
        /// Polynomial as `0x11D`, `0b100011101` or decimal
        #[arg(long)]
        polynomial: Option<PolynomialLiteral>,

        /// Extension degree of GF(2^d)
        #[arg(long)]
        degree: Option<u32>,

        /// Generator for the exp/log tables
        #[arg(long)]
        generator: Option<u8>,
    },

    /// Print the effective configuration
    Config,
}
