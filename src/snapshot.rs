//! Portable snapshot of a clustering result for persistence and transport.
//!
//! A [`ClusteringSnapshot`] stores the clustered order and the data rows
//! without the header; the header is rebuilt from `order` on restore. The
//! global affinity measure is not stored because it depends on the input
//! affinity matrix, not on the clustered grid.
//!
//! # no_std
//!
//! This module requires the `serde` feature. It uses `alloc::vec::Vec` and is
//! compatible with no_std + alloc environments.

use alloc::vec::Vec;

use crate::affinity::AffinityMatrix;
use crate::bond::affinity_measure;
use crate::clustering::Clustering;
use crate::error::BeaError;
use crate::matrix::{Affinity, Matrix};
use crate::placement::is_permutation;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Serializable form of a [`Clustering`].
///
/// # Example
///
/// ```rust,ignore
/// use bea_core::snapshot::ClusteringSnapshot;
///
/// let snapshot = ClusteringSnapshot::from_clustering(&clustering);
/// let json = serde_json::to_string(&snapshot).unwrap();
/// let restored: ClusteringSnapshot = serde_json::from_str(&json).unwrap();
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClusteringSnapshot {
    /// Format version — always [`SNAPSHOT_VERSION`] for newly created snapshots.
    pub version: u16,
    /// Number of attributes N.
    pub size: usize,
    /// Attribute identities in clustered order.
    pub order: Vec<usize>,
    /// Clustered data rows, N rows of N cells.
    pub rows: Vec<Vec<Affinity>>,
    /// Whether the rows were reordered to match the columns.
    pub symmetrized: bool,
}

impl ClusteringSnapshot {
    /// Capture a clustering result.
    pub fn from_clustering(clustering: &Clustering) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            size: clustering.size(),
            order: clustering.order().to_vec(),
            rows: clustering.rows(),
            symmetrized: clustering.is_symmetrized(),
        }
    }

    /// Rebuild the clustering, recomputing its affinity measure against `affinity`.
    ///
    /// Validates version, shape and that `order` is a permutation of `1..=N`.
    pub fn into_clustering(self, affinity: &AffinityMatrix) -> Result<Clustering, BeaError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(BeaError::UnsupportedVersion { found: self.version });
        }
        let n = self.size;
        if affinity.size() != n {
            return Err(BeaError::SizeMismatch { expected: n, found: affinity.size() });
        }
        if self.rows.len() != n {
            return Err(BeaError::MissingRows { expected: n, found: self.rows.len() });
        }
        if !is_permutation(&self.order, n) {
            return Err(BeaError::NotPermutation);
        }

        let mut grid = Matrix::blank(n);
        for (col, &attr) in self.order.iter().enumerate() {
            grid.set(0, col + 1, attr as Affinity);
        }
        for (r, row) in self.rows.iter().enumerate() {
            if row.len() != n {
                return Err(BeaError::NotSquare { row: r + 1, expected: n, found: row.len() });
            }
            for (c, &v) in row.iter().enumerate() {
                grid.set(r + 1, c + 1, v);
            }
        }

        let measure = affinity_measure(&self.order, affinity);
        Ok(Clustering::from_parts(grid, self.order, measure, self.symmetrized))
    }
}
