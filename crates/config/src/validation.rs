// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bit-packed GF(2) polynomial written as `0x11D`, `0b100011101` or `285`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LiteralRepr", into = "String")]
pub struct PolynomialLiteral(u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum LiteralRepr {
    Number(u64),
    Text(String),
}

impl PolynomialLiteral {
    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl FromStr for PolynomialLiteral {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or(s.strip_prefix("0X")) {
            (hex, 16)
        } else if let Some(bin) = s.strip_prefix("0b").or(s.strip_prefix("0B")) {
            (bin, 2)
        } else {
            (s, 10)
        };
        if digits.is_empty() {
            bail!("empty polynomial literal '{s}'");
        }
        let bits = u64::from_str_radix(digits, radix)
            .with_context(|| format!("invalid polynomial literal '{s}'"))?;
        Ok(PolynomialLiteral(bits))
    }
}

impl TryFrom<LiteralRepr> for PolynomialLiteral {
    type Error = anyhow::Error;
    fn try_from(value: LiteralRepr) -> Result<Self, Self::Error> {
        match value {
            LiteralRepr::Number(bits) => Ok(PolynomialLiteral(bits)),
            LiteralRepr::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for PolynomialLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<PolynomialLiteral> for String {
    fn from(value: PolynomialLiteral) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!("0x11D".parse::<PolynomialLiteral>().unwrap().bits(), 0x11D);
        assert_eq!("0b111".parse::<PolynomialLiteral>().unwrap().bits(), 7);
        assert_eq!(" 285 ".parse::<PolynomialLiteral>().unwrap().bits(), 285);
        assert!("0x".parse::<PolynomialLiteral>().is_err());
        assert!("0xZZ".parse::<PolynomialLiteral>().is_err());
        assert!("x^8+1".parse::<PolynomialLiteral>().is_err());
    }

    #[test]
    fn test_yaml_forms() {
        let from_text: PolynomialLiteral = serde_yaml::from_str("\"0x11d\"").unwrap();
        let from_number: PolynomialLiteral = serde_yaml::from_str("285").unwrap();
        assert_eq!(from_text, from_number);
        let written = serde_yaml::to_string(&from_text).unwrap();
        assert!(written.contains("0x11d"));
        assert_eq!(serde_yaml::from_str::<PolynomialLiteral>(&written).unwrap(), from_text);
    }
}
