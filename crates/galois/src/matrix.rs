// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{GaloisError, GaloisResult};
use crate::field::GaloisField;

/// Rank of a matrix over `field`, one coding vector per row.
///
/// Gaussian elimination on a copy of `rows`. Every row must have the same length and
/// hold field elements.
pub fn rank(field: &GaloisField, rows: &[Vec<u8>]) -> GaloisResult<usize> {
    let Some(cols) = rows.first().map(Vec::len) else {
        return Ok(0);
    };
    for row in rows {
        if row.len() != cols {
            return Err(GaloisError::DimensionMismatch {
                expected: cols,
                actual: row.len(),
            });
        }
        for &value in row {
            field.element(value)?;
        }
    }

    let mut m = rows.to_vec();
    let mut rank = 0;

    for col in 0..cols {
        let Some(pivot) = (rank..m.len()).find(|&r| m[r][col] != 0) else {
            continue;
        };
        m.swap(rank, pivot);

        let inv = field.inv(m[rank][col])?;
        for cell in m[rank].iter_mut() {
            *cell = field.mul(*cell, inv);
        }

        let pivot_row = m[rank].clone();
        for row in m.iter_mut().skip(rank + 1) {
            let factor = row[col];
            if factor == 0 {
                continue;
            }
            for (cell, &p) in row.iter_mut().zip(&pivot_row) {
                *cell = field.sub(*cell, field.mul(factor, p));
            }
        }

        rank += 1;
        if rank == m.len() {
            break;
        }
    }

    Ok(rank)
}
