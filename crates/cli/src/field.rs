// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use rlnc_config::{AnalysisConfig, PolynomialLiteral};
use rlnc_galois::{GaloisField, GaloisResult};
use rlnc_polynomial::Gf2Polynomial;
use tracing::warn;

pub struct FieldReport {
    pub polynomial: Gf2Polynomial,
    pub irreducible: bool,
    pub primitive: bool,
    pub field: GaloisResult<GaloisField>,
}

pub fn inspect(
    config: &AnalysisConfig,
    polynomial: Option<PolynomialLiteral>,
    degree: Option<u32>,
    generator: Option<u8>,
) -> Result<FieldReport> {
    let bits = polynomial.unwrap_or(config.field.polynomial).bits();
    let poly = Gf2Polynomial::from_bits(bits);

    // An explicit polynomial brings its own degree
    let degree = match (degree, polynomial) {
        (Some(degree), _) => degree,
        (None, Some(_)) => poly.degree().unwrap_or(0) as u32,
        (None, None) => config.field.degree,
    };
    let generator = generator.unwrap_or(config.field.generator);

    let irreducible = poly.is_irreducible();
    let primitive = poly.is_primitive()?;
    Ok(FieldReport {
        polynomial: poly,
        irreducible,
        primitive,
        field: GaloisField::new(degree, bits, generator),
    })
}

pub fn execute(
    config: &AnalysisConfig,
    polynomial: Option<PolynomialLiteral>,
    degree: Option<u32>,
    generator: Option<u8>,
) -> Result<()> {
    let report = inspect(config, polynomial, degree, generator)?;

    println!(
        "{} ({:#x}): irreducible = {}, primitive = {}",
        report.polynomial,
        report.polynomial.bits(),
        report.irreducible,
        report.primitive
    );

    match report.field {
        Ok(field) => {
            let powers: Vec<String> = field
                .exp_table()
                .iter()
                .take(16)
                .map(|v| format!("{v:#04x}"))
                .collect();
            println!(
                "GF({}) generator {:#04x}, first powers: {}",
                field.order(),
                field.generator(),
                powers.join(" ")
            );
        }
        Err(e) => {
            warn!("Field tables not built: {e}");
            println!("Cannot build field tables: {e}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlnc_galois::GaloisError;

    #[test]
    fn test_default_field() {
        let report = inspect(&AnalysisConfig::default(), None, None, None).unwrap();
        assert!(report.irreducible);
        assert!(report.primitive);
        let field = report.field.unwrap();
        assert_eq!(field.order(), 256);
        assert_eq!(field, GaloisField::gf256());
    }

    #[test]
    fn test_irreducible_but_not_primitive() {
        let report = inspect(
            &AnalysisConfig::default(),
            Some(PolynomialLiteral::new(0x11B)),
            None,
            None,
        )
        .unwrap();
        assert!(report.irreducible);
        assert!(!report.primitive);
        assert_eq!(
            report.field.unwrap_err(),
            GaloisError::NotPrimitive { polynomial: 0x11B }
        );
    }

    #[test]
    fn test_small_field_takes_polynomial_degree() {
        let report = inspect(
            &AnalysisConfig::default(),
            Some(PolynomialLiteral::new(0b10011)),
            None,
            None,
        )
        .unwrap();
        assert_eq!(report.field.unwrap().order(), 16);
    }
}
