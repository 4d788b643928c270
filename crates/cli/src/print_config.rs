// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use rlnc_config::AnalysisConfig;

pub fn execute(config: &AnalysisConfig) -> Result<()> {
    if let Some(path) = config.config_file() {
        println!("# loaded from {}", path.display());
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}
