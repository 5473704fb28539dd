/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Row reordering that makes a column-clustered matrix symmetric again.
//!
//! After placement only the columns follow the clustered order π. This step
//! builds a fresh grid where new row `k` is old row `π(k)` across every
//! column, so both axes share the same order. The header is carried over
//! unchanged. For a symmetric input affinity matrix the result is symmetric.

use crate::matrix::{Affinity, Matrix};

/// Reorder the rows of `clustered` to follow its own column header.
///
/// Returns a new grid; the input is consumed.
///
/// # Panics
///
/// If any header slot is unplaced.
pub fn symmetrize(clustered: Matrix) -> Matrix {
    let n = clustered.size();
    let mut out = Matrix::blank(n);
    for k in 1..=n {
        let source = match clustered.header(k) {
            Some(attr) => attr,
            None => panic!("cannot symmetrize: column slot {k} is unplaced"),
        };
        out.set(0, k, source as Affinity);
        for col in 1..=n {
            out.set(k, col, clustered.get(source, col));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(header: &[u32], rows: &[[u32; 3]; 3]) -> Matrix {
        let mut m = Matrix::blank(3);
        for (c, &h) in header.iter().enumerate() {
            m.set(0, c + 1, h);
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                m.set(r + 1, c + 1, v);
            }
        }
        m
    }

    #[test]
    fn rows_follow_column_header() {
        // Columns already in order [1, 3, 2]; rows still in identity order
        let m = grid(&[1, 3, 2], &[[45, 45, 0], [0, 0, 80], [45, 45, 0]]);
        let s = symmetrize(m);
        assert_eq!(s.row(0), &[1, 3, 2]);
        assert_eq!(s.row(1), &[45, 45, 0]);
        assert_eq!(s.row(2), &[45, 45, 0]);
        assert_eq!(s.row(3), &[0, 0, 80]);
        assert_eq!(s.first_asymmetry(), None);
    }

    #[test]
    fn identity_header_is_a_no_op() {
        let m = grid(&[1, 2, 3], &[[1, 2, 3], [2, 5, 6], [3, 6, 9]]);
        assert_eq!(symmetrize(m.clone()), m);
    }

    #[test]
    fn symmetrizing_twice_with_identity_order_is_stable() {
        let m = grid(&[1, 2, 3], &[[4, 1, 0], [1, 4, 2], [0, 2, 4]]);
        let once = symmetrize(m);
        assert_eq!(symmetrize(once.clone()), once);
    }

    #[test]
    #[should_panic(expected = "unplaced")]
    fn partial_header_panics() {
        let m = grid(&[1, 0, 2], &[[0; 3]; 3]);
        let _ = symmetrize(m);
    }
}
