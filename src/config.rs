/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Tuning knobs for a clustering run.

use crate::bond::Energy;

/// Which position wins when two insertion points score the same contribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// The position evaluated later in the left-to-right scan wins (`>=`).
    ///
    /// This is the classic BEA behaviour and the only choice that reproduces
    /// published clustered matrices.
    #[default]
    PreferLater,
    /// The position evaluated first wins (`>`).
    PreferEarlier,
}

impl TieBreak {
    /// Whether `score` replaces the current best `best`.
    #[inline]
    pub fn replaces(self, score: Energy, best: Energy) -> bool {
        match self {
            Self::PreferLater => score >= best,
            Self::PreferEarlier => score > best,
        }
    }
}

/// Configuration for [`crate::clustering::BondEnergy`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeaConfig {
    /// Tie policy for equal contributions. Default: [`TieBreak::PreferLater`].
    pub tie_break: TieBreak,

    /// Reorder rows to match the clustered column order.
    /// Default: `true`. When `false` the result is the column-clustered matrix.
    pub symmetrize: bool,

    /// Reject asymmetric input instead of warning about it.
    /// Default: `false`.
    pub require_symmetric: bool,
}

impl Default for BeaConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::PreferLater,
            symmetrize: true,
            require_symmetric: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefers_later_position() {
        let cfg = BeaConfig::default();
        assert_eq!(cfg.tie_break, TieBreak::PreferLater);
        assert!(cfg.symmetrize);
        assert!(!cfg.require_symmetric);
    }

    #[test]
    fn tie_policies_differ_only_on_equality() {
        assert!(TieBreak::PreferLater.replaces(5, 5));
        assert!(!TieBreak::PreferEarlier.replaces(5, 5));
        assert!(TieBreak::PreferEarlier.replaces(6, 5));
        assert!(!TieBreak::PreferLater.replaces(4, 5));
    }
}
