/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! End-to-end Bond Energy Algorithm: affinity matrix in, clustered matrix out.
//!
//! ```text
//! AffinityMatrix ──► place_all ──► column-clustered grid ──► symmetrize ──► Clustering
//!                      │
//!                 bond / contribution
//! ```
//!
//! # Example
//!
//! ```rust
//! use bea_core::affinity::AffinityMatrix;
//! use bea_core::clustering::BondEnergy;
//!
//! let aa = AffinityMatrix::from_rows(&[
//!     [45u32, 0, 45, 0],
//!     [0, 80, 5, 75],
//!     [45, 5, 53, 3],
//!     [0, 75, 3, 78],
//! ]).unwrap();
//! let result = BondEnergy::default().cluster(&aa).unwrap();
//! assert_eq!(result.order(), &[1, 3, 2, 4]);
//! ```

use alloc::vec::Vec;

use tracing::{info, warn};

use crate::affinity::AffinityMatrix;
use crate::bond::{affinity_measure, Energy};
use crate::config::BeaConfig;
use crate::error::BeaError;
use crate::matrix::{Affinity, Matrix};
use crate::placement::place_all;
use crate::symmetry::symmetrize;

// ─── BondEnergy ──────────────────────────────────────────────────────────────

/// Configured clustering run.
#[derive(Clone, Debug, Default)]
pub struct BondEnergy {
    config: BeaConfig,
}

impl BondEnergy {
    /// Create a runner with the given configuration.
    pub fn new(config: BeaConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &BeaConfig {
        &self.config
    }

    /// Cluster `affinity`.
    ///
    /// Fails only when [`BeaConfig::require_symmetric`] is set and the input is
    /// asymmetric; in that case nothing is computed.
    pub fn cluster(&self, affinity: &AffinityMatrix) -> Result<Clustering, BeaError> {
        let n = affinity.size();
        if let Some((row, col)) = affinity.as_matrix().first_asymmetry() {
            if self.config.require_symmetric {
                return Err(BeaError::Asymmetric { row, col });
            }
            warn!(row, col, "affinity matrix is not symmetric; clustered rows may not mirror columns");
        }

        let clustered = place_all(affinity, self.config.tie_break);
        let order = clustered.order();
        let measure = affinity_measure(&order, affinity);
        let grid = if self.config.symmetrize {
            symmetrize(clustered.into_matrix())
        } else {
            clustered.into_matrix()
        };

        info!(size = n, affinity_measure = %measure, "clustering complete");
        Ok(Clustering {
            matrix: grid,
            order,
            affinity_measure: measure,
            symmetrized: self.config.symmetrize,
        })
    }

    /// Validate `rows` and cluster them.
    pub fn cluster_rows<R: AsRef<[Affinity]>>(&self, rows: &[R]) -> Result<Clustering, BeaError> {
        let affinity = AffinityMatrix::from_rows(rows)?;
        self.cluster(&affinity)
    }
}

// ─── Clustering ──────────────────────────────────────────────────────────────

/// Clustered affinity matrix and the attribute order that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clustering {
    matrix: Matrix,
    order: Vec<usize>,
    affinity_measure: Energy,
    symmetrized: bool,
}

impl Clustering {
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        matrix: Matrix,
        order: Vec<usize>,
        affinity_measure: Energy,
        symmetrized: bool,
    ) -> Self {
        Self { matrix, order, affinity_measure, symmetrized }
    }

    /// Number of attributes N.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Attribute identities in clustered order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Clustered grid, header row included.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Take ownership of the clustered grid.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Clustered data rows without the header.
    pub fn rows(&self) -> Vec<Vec<Affinity>> {
        self.matrix.to_rows()
    }

    /// 1-based position of attribute `attr` in the clustered order.
    pub fn position_of(&self, attr: usize) -> Option<usize> {
        self.order.iter().position(|&a| a == attr).map(|i| i + 1)
    }

    /// Global affinity measure of the clustered order.
    pub fn affinity_measure(&self) -> Energy {
        self.affinity_measure
    }

    /// Whether rows were reordered to match the columns.
    pub fn is_symmetrized(&self) -> bool {
        self.symmetrized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;
    use alloc::vec;

    fn textbook() -> AffinityMatrix {
        AffinityMatrix::from_rows(&[
            [45u32, 0, 45, 0],
            [0, 80, 5, 75],
            [45, 5, 53, 3],
            [0, 75, 3, 78],
        ])
        .unwrap()
    }

    #[test]
    fn textbook_example_orders_and_mirrors() {
        let c = BondEnergy::default().cluster(&textbook()).unwrap();
        assert_eq!(c.order(), &[1, 3, 2, 4]);
        assert_eq!(
            c.rows(),
            vec![
                vec![45, 45, 0, 0],
                vec![45, 53, 5, 3],
                vec![0, 5, 80, 75],
                vec![0, 3, 75, 78],
            ]
        );
        assert_eq!(c.matrix().row(0), &[1, 3, 2, 4]);
        assert_eq!(c.affinity_measure(), 34330);
        assert!(c.is_symmetrized());
    }

    #[test]
    fn unsymmetrized_keeps_original_row_order() {
        let cfg = BeaConfig { symmetrize: false, ..BeaConfig::default() };
        let c = BondEnergy::new(cfg).cluster(&textbook()).unwrap();
        assert_eq!(c.order(), &[1, 3, 2, 4]);
        // Row 2 is still attribute 2, columns permuted
        assert_eq!(c.matrix().row(2), &[0, 5, 80, 75]);
        assert!(!c.is_symmetrized());
    }

    #[test]
    fn asymmetric_input_rejected_when_required() {
        let cfg = BeaConfig { require_symmetric: true, ..BeaConfig::default() };
        let err = BondEnergy::new(cfg)
            .cluster_rows(&[[1u32, 2, 0], [3, 1, 0], [0, 0, 1]])
            .unwrap_err();
        assert_eq!(err, BeaError::Asymmetric { row: 1, col: 2 });
    }

    #[test]
    fn asymmetric_input_still_clusters_by_default() {
        let c = BondEnergy::default()
            .cluster_rows(&[[1u32, 2, 0], [3, 1, 0], [0, 0, 1]])
            .unwrap();
        assert_eq!(c.size(), 3);
    }

    #[test]
    fn earlier_tie_break_changes_three_attribute_result() {
        let cfg = BeaConfig { tie_break: TieBreak::PreferEarlier, ..BeaConfig::default() };
        let c = BondEnergy::new(cfg)
            .cluster_rows(&[[45u32, 0, 45], [0, 80, 0], [45, 0, 45]])
            .unwrap();
        assert_eq!(c.order(), &[3, 1, 2]);
    }

    #[test]
    fn position_lookup() {
        let c = BondEnergy::default().cluster(&textbook()).unwrap();
        assert_eq!(c.position_of(2), Some(3));
        assert_eq!(c.position_of(9), None);
    }
}
