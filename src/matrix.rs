/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Square 1-indexed grid with an attribute header row.
//!
//! A [`Matrix`] of size N owns one contiguous row-major buffer of
//! `(N + 1) × (N + 1)` cells. Row 0 is the header: `cell(0, c)` records the
//! original attribute identity currently occupying column slot `c`. Column 0
//! is unused padding so that data coordinates run `1..=N` on both axes.
//!
//! ```text
//!        c=1  c=2  c=3
//! r=0      1    2    3    <- header (attribute identities)
//! r=1     10    5    5
//! r=2      6    9    3
//! r=3      2    3    5
//! ```
//!
//! The size is fixed at construction. Every accessor panics on coordinates
//! outside `0..=N`; silent corruption of a clustering is worse than an abort.

use alloc::vec;
use alloc::vec::Vec;

/// Numeric type of a single affinity cell.
///
/// Affinities are non-negative by construction. Header cells reuse the same
/// type to hold attribute identities.
pub type Affinity = u32;

/// Header value marking a column slot that no attribute occupies yet.
pub const UNPLACED: Affinity = 0;

// ─── Matrix ──────────────────────────────────────────────────────────────────

/// Fixed-size square grid addressed by `(row, col)` in `0..=N`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// Number of attributes N.
    size: usize,
    /// Row-major cells, stride `size + 1`.
    cells: Vec<Affinity>,
}

impl Matrix {
    /// Create an all-zero grid whose header numbers the columns `1..=size`.
    pub fn new(size: usize) -> Self {
        let mut m = Self::blank(size);
        for col in 1..=size {
            m.set(0, col, col as Affinity);
        }
        m
    }

    /// Create an all-zero grid with every header slot [`UNPLACED`].
    pub fn blank(size: usize) -> Self {
        let stride = size + 1;
        Self {
            size,
            cells: vec![0; stride * stride],
        }
    }

    /// Number of attributes N.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row <= self.size && col <= self.size,
            "matrix coordinate ({row}, {col}) outside 0..={}",
            self.size
        );
        row * (self.size + 1) + col
    }

    /// Read one cell.
    ///
    /// # Panics
    ///
    /// If `row` or `col` exceeds N.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Affinity {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite one cell.
    ///
    /// # Panics
    ///
    /// If `row` or `col` exceeds N.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Affinity) {
        let at = self.offset(row, col);
        self.cells[at] = value;
    }

    /// Attribute identity recorded in the header of column slot `col`.
    ///
    /// Returns `None` for an [`UNPLACED`] slot.
    pub fn header(&self, col: usize) -> Option<usize> {
        match self.get(0, col) {
            UNPLACED => None,
            id => Some(id as usize),
        }
    }

    /// Copy rows `0..=N` of column `col`, header included.
    ///
    /// Pure read; the grid is left untouched.
    pub fn column(&self, col: usize) -> Vec<Affinity> {
        (0..=self.size).map(|row| self.get(row, col)).collect()
    }

    /// Overwrite rows `0..=N` of column `col` with `values`.
    ///
    /// # Panics
    ///
    /// If `values.len() != N + 1` or `col` exceeds N.
    pub fn write_column(&mut self, col: usize, values: &[Affinity]) {
        assert_eq!(
            values.len(),
            self.size + 1,
            "column length must be N + 1 (header included)"
        );
        for (row, &v) in values.iter().enumerate() {
            self.set(row, col, v);
        }
    }

    /// Borrow data row `row` as the slice of columns `1..=N`.
    ///
    /// `row == 0` yields the header.
    pub fn row(&self, row: usize) -> &[Affinity] {
        let start = self.offset(row, 1);
        &self.cells[start..start + self.size]
    }

    /// Header identities of columns `1..=N`, with `None` for unplaced slots.
    pub fn order(&self) -> Vec<Option<usize>> {
        (1..=self.size).map(|col| self.header(col)).collect()
    }

    /// Data rows without the header, as owned vectors.
    pub fn to_rows(&self) -> Vec<Vec<Affinity>> {
        (1..=self.size).map(|row| self.row(row).to_vec()).collect()
    }

    /// First `(row, col)` pair where `cell(row, col) != cell(col, row)`.
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        for row in 1..=self.size {
            for col in (row + 1)..=self.size {
                if self.get(row, col) != self.get(col, row) {
                    return Some((row, col));
                }
            }
        }
        None
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
