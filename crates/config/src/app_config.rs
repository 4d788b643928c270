// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use crate::validation::PolynomialLiteral;
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use rlnc_success_model::SchemeParameters;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_NAME: &str = "rlnc.config.yaml";

/// Environment variables with this prefix override file values, `__` separating
/// nested keys, eg. `RLNC_SWEEP__PER=0.1`.
pub const ENV_PREFIX: &str = "RLNC_";

/// Parameters of the redundancy sweep
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Source symbols needed to decode (`n`)
    pub threshold: u32,
    /// Largest redundancy evaluated
    pub delta_max: u32,
    /// Packet error rate (`eps`)
    pub per: f64,
    /// Galois field order (`q`)
    pub field_order: u64,
    /// Rank slack (`r`)
    pub rank_slack: u32,
    /// Success probability used to report the redundancy needed
    pub target: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            threshold: 20,
            delta_max: 60,
            per: 0.2,
            field_order: 256,
            rank_slack: 0,
            target: 0.99,
        }
    }
}

impl SweepConfig {
    pub fn scheme_parameters(&self) -> SchemeParameters {
        SchemeParameters::new(self.threshold, self.per, self.field_order)
            .with_rank_slack(self.rank_slack)
    }

    pub fn validate(&self) -> Result<()> {
        self.scheme_parameters()
            .validate()
            .context("Invalid sweep configuration")?;
        if !(0.0..=1.0).contains(&self.target) {
            bail!("sweep target {} must lie in [0, 1]", self.target);
        }
        Ok(())
    }
}

/// The field used by the coding scheme
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Extension degree `d` of GF(2^d)
    pub degree: u32,
    /// Field-defining polynomial over GF(2)
    pub polynomial: PolynomialLiteral,
    /// Generator used for the exp/log tables
    pub generator: u8,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            degree: 8,
            polynomial: PolynomialLiteral::new(0x11D),
            generator: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    pub sweep: SweepConfig,
    pub field: FieldConfig,
    /// Integer candidates for the Eisenstein check, top coefficient first
    pub polynomials: Vec<Vec<i64>>,
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sweep: SweepConfig::default(),
            field: FieldConfig::default(),
            polynomials: vec![vec![4, 7, 21, 28], vec![1, 0, 0, 0, 1, 1, 1, 0, 1]],
            config_file: None,
        }
    }
}

impl AnalysisConfig {
    /// The file the configuration was read from, if any
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    pub fn validate(&self) -> Result<()> {
        self.sweep.validate()?;
        if let Some(index) = self.polynomials.iter().position(Vec::is_empty) {
            bail!("polynomial candidate {index} has no coefficients");
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Could not serialize configuration")
    }
}

pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rlnc"))
}

/// Load defaults, then the YAML file, then `RLNC_` environment overrides.
///
/// A file passed explicitly must exist; a discovered or default file is optional.
pub fn load_config(cli_file: Option<String>) -> Result<AnalysisConfig> {
    let cli_file = cli_file.map(PathBuf::from);
    let cwd = env::current_dir()?;
    let default_dir = default_config_dir();

    let location = resolve_config_path(
        find_in_parent,
        &cwd,
        default_dir.as_deref(),
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref(),
    );

    let mut figment = Figment::from(Serialized::defaults(AnalysisConfig::default()));
    let mut loaded_from = None;

    if let Some(location) = location {
        let path = location.path();
        if location.is_required() || path.exists() {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("Configuration file not found: {}", path.display()))?;
            figment = figment.merge(Yaml::string(&yaml));
            loaded_from = Some(path.to_path_buf());
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
        }
    }

    let mut config: AnalysisConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Could not parse configuration")?;
    config.config_file = loaded_from;
    config.validate()?;

    info!(file = ?config.config_file, "configuration loaded");
    Ok(config)
}
