// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use rlnc_config::AnalysisConfig;
use rlnc_polynomial::Polynomial;

/// Verdict for one candidate
pub struct Verdict {
    pub polynomial: Polynomial,
    pub certificate: Option<u64>,
    /// Irreducibility over GF(2) for 0/1 candidates
    pub gf2_irreducible: Option<bool>,
}

pub fn check(coefficients: Vec<i64>) -> Result<Verdict> {
    let polynomial = Polynomial::new(coefficients);
    let certificate = polynomial
        .eisenstein_certificate()
        .with_context(|| format!("Could not check {polynomial}"))?;
    let gf2_irreducible = polynomial.to_gf2().ok().map(|p| p.is_irreducible());
    Ok(Verdict {
        polynomial,
        certificate,
        gf2_irreducible,
    })
}

pub fn execute(config: &AnalysisConfig, coefficients: Vec<i64>) -> Result<()> {
    let candidates = if coefficients.is_empty() {
        config.polynomials.clone()
    } else {
        vec![coefficients]
    };

    for candidate in candidates {
        let verdict = check(candidate)?;
        match verdict.certificate {
            Some(prime) => println!(
                "{}: irreducible over Q (Eisenstein, p = {prime})",
                verdict.polynomial
            ),
            None => println!("{}: not certified by Eisenstein", verdict.polynomial),
        }
        if let Some(irreducible) = verdict.gf2_irreducible {
            let word = if irreducible { "irreducible" } else { "reducible" };
            println!("  over GF(2): {word}");
        }
    }

    Ok(())
}
