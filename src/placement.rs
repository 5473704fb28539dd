/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Placement engine: grow a column ordering one attribute at a time.
//!
//! # Algorithm
//!
//! 1. Seed the clustered grid with the raw columns of attributes 1 and 2.
//! 2. For each candidate `k = 3..=N`, in attribute-identity order, score every
//!    insertion point of the current ordering with
//!    [`contribution`](crate::bond::contribution): before the first placed
//!    attribute, between each adjacent pair, and after the last.
//! 3. Insert the candidate's raw column at the best point, shifting the
//!    columns to its right one slot over.
//!
//! Exactly N − 2 rounds run; there is no convergence test. The scan is
//! strictly left to right, so [`TieBreak`] resolves equal scores the same way
//! on every run.
//!
//! # Invariants
//!
//! - Slots `1..=rightmost` are filled, slots above are [`UNPLACED`](crate::matrix::UNPLACED).
//! - Every filled slot holds a distinct attribute together with its untouched raw column.
//! - After the last round the header is a permutation of `1..=N`.

use alloc::vec::Vec;

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::affinity::AffinityMatrix;
use crate::bond::{contribution, Energy};
use crate::config::TieBreak;
use crate::matrix::Matrix;

// ─── Placement ───────────────────────────────────────────────────────────────

/// Best insertion point found for one candidate.
///
/// `left`/`right` are attribute identities of the neighbours the candidate
/// will sit between; `None` marks the open end of the ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Attribute immediately left of the insertion point.
    pub left: Option<usize>,
    /// Attribute being placed.
    pub candidate: usize,
    /// Attribute immediately right of the insertion point.
    pub right: Option<usize>,
    /// Contribution of this placement.
    pub score: Energy,
}

// ─── ClusteredMatrix ─────────────────────────────────────────────────────────

/// Column-clustered grid under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusteredMatrix {
    grid: Matrix,
    /// Number of filled column slots.
    rightmost: usize,
}

impl ClusteredMatrix {
    /// Empty grid of size N with every slot unplaced.
    pub fn empty(size: usize) -> Self {
        Self {
            grid: Matrix::blank(size),
            rightmost: 0,
        }
    }

    /// Grid seeded with the raw columns of attributes 1 and 2.
    pub fn seeded(affinity: &AffinityMatrix) -> Self {
        let mut cm = Self::empty(affinity.size());
        cm.grid.write_column(1, &affinity.column(1));
        cm.grid.write_column(2, &affinity.column(2));
        cm.rightmost = 2;
        cm
    }

    /// Number of filled column slots.
    pub fn rightmost(&self) -> usize {
        self.rightmost
    }

    /// Attribute identities in slots `1..=rightmost`.
    pub fn order(&self) -> Vec<usize> {
        (1..=self.rightmost)
            .map(|slot| self.placed(slot))
            .collect()
    }

    /// Slot currently holding `attr`, if placed.
    pub fn slot_of(&self, attr: usize) -> Option<usize> {
        (1..=self.rightmost).find(|&slot| self.grid.header(slot) == Some(attr))
    }

    /// Borrow the grid.
    pub fn as_matrix(&self) -> &Matrix {
        &self.grid
    }

    /// Hand over the grid.
    pub fn into_matrix(self) -> Matrix {
        self.grid
    }

    fn placed(&self, slot: usize) -> usize {
        match self.grid.header(slot) {
            Some(attr) => attr,
            None => panic!("slot {slot} within rightmost {} is unplaced", self.rightmost),
        }
    }

    /// Neighbour pairs of every insertion point, in scan order.
    ///
    /// `(None, first)`, then each adjacent pair, then `(last, None)`.
    pub fn boundaries(&self) -> impl Iterator<Item = (Option<usize>, Option<usize>)> + '_ {
        (0..=self.rightmost).map(move |slot| {
            let left = (slot >= 1).then(|| self.placed(slot));
            let right = (slot < self.rightmost).then(|| self.placed(slot + 1));
            (left, right)
        })
    }

    /// Score every insertion point for `candidate` and keep the best.
    pub fn best_placement(
        &self,
        candidate: usize,
        affinity: &AffinityMatrix,
        tie_break: TieBreak,
    ) -> Placement {
        let mut best: Option<Placement> = None;
        for (left, right) in self.boundaries() {
            let score = contribution(left, candidate, right, affinity);
            trace!(?left, candidate, ?right, %score, "cont");
            let better = match best {
                None => true,
                Some(b) => tie_break.replaces(score, b.score),
            };
            if better {
                best = Some(Placement { left, candidate, right, score });
            }
        }
        match best {
            Some(p) => p,
            None => panic!("no insertion point for attribute {candidate}"),
        }
    }

    /// Insert the candidate's raw column at `placement`, shifting columns right.
    ///
    /// # Panics
    ///
    /// If the grid is full or `placement.left` is not currently placed.
    pub fn place(&mut self, placement: &Placement, affinity: &AffinityMatrix) {
        assert!(
            self.rightmost < self.grid.size(),
            "cannot place attribute {}: all {} slots filled",
            placement.candidate,
            self.grid.size()
        );
        let target = match placement.left {
            None => 1,
            Some(left) => match self.slot_of(left) {
                Some(start) => start + 1,
                None => panic!("left neighbour {left} is not placed"),
            },
        };
        // Open a gap at `target` (no-op when appending after the rightmost slot)
        for slot in ((target + 1)..=(self.rightmost + 1)).rev() {
            let moved = self.grid.column(slot - 1);
            self.grid.write_column(slot, &moved);
        }
        self.grid
            .write_column(target, &affinity.column(placement.candidate));
        self.rightmost += 1;
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Run every placement round and return the fully column-clustered grid.
///
/// # Panics
///
/// If the finished header is not a permutation of `1..=N`.
pub fn place_all(affinity: &AffinityMatrix, tie_break: TieBreak) -> ClusteredMatrix {
    let n = affinity.size();
    let mut cm = ClusteredMatrix::seeded(affinity);
    for candidate in 3..=n {
        let placement = cm.best_placement(candidate, affinity, tie_break);
        debug!(
            candidate,
            left = ?placement.left,
            right = ?placement.right,
            score = %placement.score,
            "placed"
        );
        cm.place(&placement, affinity);
    }
    assert!(
        is_permutation(&cm.order(), n),
        "placement produced a corrupt attribute order"
    );
    cm
}

/// `true` when `order` holds every identity in `1..=n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen: HashSet<usize> = HashSet::with_capacity(n);
    order
        .iter()
        .all(|&attr| (1..=n).contains(&attr) && seen.insert(attr))
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn three() -> AffinityMatrix {
        AffinityMatrix::from_rows(&[[45u32, 0, 45], [0, 80, 0], [45, 0, 45]]).unwrap()
    }

    fn distinct(n: usize) -> AffinityMatrix {
        // Column j holds j * 10 + i in row i, so every column is recognisable
        let rows: Vec<Vec<u32>> = (1..=n)
            .map(|i| (1..=n).map(|j| (j * 10 + i) as u32).collect())
            .collect();
        AffinityMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn seed_copies_first_two_columns() {
        let aa = three();
        let cm = ClusteredMatrix::seeded(&aa);
        assert_eq!(cm.rightmost(), 2);
        assert_eq!(cm.order(), vec![1, 2]);
        assert_eq!(cm.as_matrix().column(1), aa.column(1));
        assert_eq!(cm.as_matrix().column(2), aa.column(2));
        assert_eq!(cm.as_matrix().header(3), None);
    }

    #[test]
    fn boundaries_cover_both_open_ends() {
        let cm = ClusteredMatrix::seeded(&three());
        let b: Vec<_> = cm.boundaries().collect();
        assert_eq!(b, vec![(None, Some(1)), (Some(1), Some(2)), (Some(2), None)]);
    }

    #[test]
    fn equal_scores_resolve_to_later_position() {
        // Leftmost and interior both score 8100; interior is scanned later.
        let aa = three();
        let cm = ClusteredMatrix::seeded(&aa);
        let p = cm.best_placement(3, &aa, TieBreak::PreferLater);
        assert_eq!(p, Placement { left: Some(1), candidate: 3, right: Some(2), score: 8100 });
    }

    #[test]
    fn equal_scores_resolve_to_earlier_position_when_configured() {
        let aa = three();
        let cm = ClusteredMatrix::seeded(&aa);
        let p = cm.best_placement(3, &aa, TieBreak::PreferEarlier);
        assert_eq!(p.left, None);
        assert_eq!(p.right, Some(1));
    }

    #[test]
    fn interior_insert_shifts_right_columns_intact() {
        let aa = distinct(4);
        let mut cm = ClusteredMatrix::seeded(&aa);
        let p3 = Placement { left: Some(2), candidate: 3, right: None, score: 0 };
        cm.place(&p3, &aa);
        assert_eq!(cm.order(), vec![1, 2, 3]);

        let p4 = Placement { left: Some(1), candidate: 4, right: Some(2), score: 0 };
        cm.place(&p4, &aa);
        assert_eq!(cm.order(), vec![1, 4, 2, 3]);
        assert_eq!(cm.rightmost(), 4);
        for (slot, attr) in [(1, 1), (2, 4), (3, 2), (4, 3)] {
            assert_eq!(cm.as_matrix().column(slot), aa.column(attr), "slot {slot}");
        }
    }

    #[test]
    fn leftmost_insert_shifts_everything() {
        let aa = distinct(3);
        let mut cm = ClusteredMatrix::seeded(&aa);
        cm.place(&Placement { left: None, candidate: 3, right: Some(1), score: 0 }, &aa);
        assert_eq!(cm.order(), vec![3, 1, 2]);
        assert_eq!(cm.as_matrix().column(2), aa.column(1));
        assert_eq!(cm.as_matrix().column(3), aa.column(2));
    }

    #[test]
    #[should_panic(expected = "all 2 slots filled")]
    fn placing_into_full_grid_panics() {
        let aa = AffinityMatrix::from_rows(&[[1u32, 0], [0, 1]]).unwrap();
        let mut cm = ClusteredMatrix::seeded(&aa);
        cm.place(&Placement { left: Some(2), candidate: 2, right: None, score: 0 }, &aa);
    }

    #[test]
    fn place_all_on_two_attributes_is_the_seed() {
        let aa = AffinityMatrix::from_rows(&[[3u32, 1], [1, 4]]).unwrap();
        let cm = place_all(&aa, TieBreak::PreferLater);
        assert_eq!(cm.order(), vec![1, 2]);
        assert_eq!(cm.as_matrix(), aa.as_matrix());
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation(&[2, 3, 1], 3));
        assert!(!is_permutation(&[1, 1, 3], 3));
        assert!(!is_permutation(&[0, 1, 2], 3));
        assert!(!is_permutation(&[1, 2], 3));
    }
}
