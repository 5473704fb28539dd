/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Error taxonomy for malformed input.
//!
//! Only recoverable input problems are represented here. Internal invariant
//! violations (out-of-range grid access, a corrupted permutation inside the
//! placement engine) are programming errors and panic instead.

use thiserror::Error;

/// Input rejected before the bond energy algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeaError {
    /// Fewer than two attributes: there is nothing to seed the placement with.
    #[error("affinity matrix must have at least 2 attributes, got {size}")]
    TooSmall {
        /// Number of attributes supplied.
        size: usize,
    },

    /// A row does not have exactly `expected` cells.
    #[error("row {row} has {found} values, expected {expected}")]
    NotSquare {
        /// 1-based row index.
        row: usize,
        /// Required row length (N).
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// The text input is empty; the leading size token is missing.
    #[error("missing matrix size on the first line")]
    MissingSize,

    /// A token could not be parsed as a non-negative integer.
    #[error("line {line}: invalid value {token:?}")]
    InvalidToken {
        /// 1-based line number in the source text.
        line: usize,
        /// Offending token, verbatim.
        token: alloc::string::String,
    },

    /// The text input ended before N rows were read.
    #[error("expected {expected} rows, found {found}")]
    MissingRows {
        /// Rows required (N).
        expected: usize,
        /// Rows present.
        found: usize,
    },

    /// Non-blank content after the N-th row.
    #[error("line {line}: unexpected data after the last row")]
    TrailingData {
        /// 1-based line number of the first surplus line.
        line: usize,
    },

    /// `cell(row, col) != cell(col, row)` while symmetric input was required.
    #[error("affinity matrix is not symmetric at ({row}, {col})")]
    Asymmetric {
        /// 1-based row index.
        row: usize,
        /// 1-based column index.
        col: usize,
    },

    /// An attribute order is not a permutation of `1..=N`.
    #[error("attribute order is not a permutation of 1..=N")]
    NotPermutation,

    /// Declared size disagrees with the data supplied alongside it.
    #[error("declared size {expected} does not match {found}")]
    SizeMismatch {
        /// Declared N.
        expected: usize,
        /// Size implied by the data.
        found: usize,
    },

    /// A snapshot was written by an incompatible format version.
    #[error("unsupported snapshot version {found}")]
    UnsupportedVersion {
        /// Version found in the snapshot.
        found: u16,
    },
}
