/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Read-only attribute affinity matrix.
//!
//! `cell(i, j)` of an [`AffinityMatrix`] is the measured joint access
//! frequency of attributes `i` and `j`. The matrix is validated once at
//! construction and never mutated afterwards; every bond evaluation reads
//! from it rather than from the partially clustered grid.

use alloc::vec::Vec;

use crate::error::BeaError;
use crate::matrix::{Affinity, Matrix};

/// Validated N×N affinity matrix with N ≥ 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinityMatrix {
    grid: Matrix,
}

impl AffinityMatrix {
    /// Build from N rows of N cells each, attribute `i` being row/column `i + 1`.
    ///
    /// Rejects fewer than two rows and ragged rows.
    pub fn from_rows<R: AsRef<[Affinity]>>(rows: &[R]) -> Result<Self, BeaError> {
        let n = rows.len();
        if n < 2 {
            return Err(BeaError::TooSmall { size: n });
        }
        let mut grid = Matrix::new(n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(BeaError::NotSquare {
                    row: i + 1,
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                grid.set(i + 1, j + 1, v);
            }
        }
        Ok(Self { grid })
    }

    /// Wrap an existing grid, re-stamping the identity header.
    pub fn from_matrix(matrix: Matrix) -> Result<Self, BeaError> {
        let n = matrix.size();
        if n < 2 {
            return Err(BeaError::TooSmall { size: n });
        }
        let mut grid = matrix;
        for col in 1..=n {
            grid.set(0, col, col as Affinity);
        }
        Ok(Self { grid })
    }

    /// Number of attributes N.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Affinity between attributes `row` and `col` (both 1-based).
    pub fn get(&self, row: usize, col: usize) -> Affinity {
        self.grid.get(row, col)
    }

    /// Raw column of attribute `attr`, header included.
    pub fn column(&self, attr: usize) -> Vec<Affinity> {
        self.grid.column(attr)
    }

    /// Borrow the underlying grid.
    pub fn as_matrix(&self) -> &Matrix {
        &self.grid
    }

    /// `true` when `cell(i, j) == cell(j, i)` everywhere.
    pub fn is_symmetric(&self) -> bool {
        self.grid.first_asymmetry().is_none()
    }

    /// Data rows without the header.
    pub fn to_rows(&self) -> Vec<Vec<Affinity>> {
        self.grid.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rows_land_at_one_based_coordinates() {
        let aa = AffinityMatrix::from_rows(&[[1u32, 2], [3, 4]]).unwrap();
        assert_eq!(aa.get(1, 1), 1);
        assert_eq!(aa.get(2, 1), 3);
        assert_eq!(aa.column(2), vec![2, 2, 4]);
    }

    #[test]
    fn single_attribute_is_rejected() {
        let err = AffinityMatrix::from_rows(&[[5u32]]).unwrap_err();
        assert_eq!(err, BeaError::TooSmall { size: 1 });
    }

    #[test]
    fn ragged_row_is_rejected() {
        let rows: Vec<Vec<Affinity>> = vec![vec![1, 2, 3], vec![1, 2], vec![1, 2, 3]];
        let err = AffinityMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            BeaError::NotSquare { row: 2, expected: 3, found: 2 }
        );
    }

    #[test]
    fn from_matrix_restores_identity_header() {
        let aa = AffinityMatrix::from_matrix(Matrix::blank(3)).unwrap();
        assert_eq!(aa.as_matrix().row(0), &[1, 2, 3]);
    }

    #[test]
    fn symmetry_check() {
        assert!(AffinityMatrix::from_rows(&[[1u32, 2], [2, 1]]).unwrap().is_symmetric());
        assert!(!AffinityMatrix::from_rows(&[[1u32, 2], [0, 1]]).unwrap().is_symmetric());
    }
}
