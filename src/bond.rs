/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Bond energy between attribute columns and the contribution of a placement.
//!
//! # Bond
//!
//! ```text
//! bond(a, b) = Σ_i  AA[i][a] · AA[i][b]
//! ```
//!
//! Always evaluated on the raw [`AffinityMatrix`], never on a partially
//! clustered grid.
//!
//! # Contribution
//!
//! `cont(left, mid, right)` is the gain in global affinity from placing `mid`
//! between `left` and `right`:
//!
//! ```text
//! cont(l, m, r) = 2·bond(l, m) + 2·bond(m, r) − 2·bond(l, r)
//! ```
//!
//! A missing neighbour contributes nothing, so the leftmost case reduces to
//! `2·bond(m, r)` and the rightmost case to `2·bond(l, m)`. Neighbours are
//! `Option<usize>`; an absent side is `None`.

use crate::affinity::AffinityMatrix;

/// Signed bond energy. Wide enough that N products of two `u32` cells never overflow.
pub type Energy = i128;

/// Bond energy between the columns of attributes `a` and `b`.
///
/// Symmetric in `a` and `b`. O(N).
pub fn bond(a: usize, b: usize, affinity: &AffinityMatrix) -> Energy {
    (1..=affinity.size())
        .map(|i| Energy::from(affinity.get(i, a)) * Energy::from(affinity.get(i, b)))
        .sum()
}

/// Net bond energy gained by placing `mid` between `left` and `right`.
///
/// `left == None` places `mid` before every placed attribute, `right == None`
/// after every placed attribute. Both `None` is only meaningful for an empty
/// ordering and yields 0.
pub fn contribution(
    left: Option<usize>,
    mid: usize,
    right: Option<usize>,
    affinity: &AffinityMatrix,
) -> Energy {
    match (left, right) {
        (None, None) => 0,
        (None, Some(r)) => 2 * bond(mid, r, affinity),
        (Some(l), None) => 2 * bond(l, mid, affinity),
        (Some(l), Some(r)) => {
            2 * bond(l, mid, affinity) + 2 * bond(mid, r, affinity) - 2 * bond(l, r, affinity)
        }
    }
}

/// Global affinity measure of a column ordering.
///
/// `AM = Σ_j 2·bond(order[j], order[j+1])` over adjacent pairs, which is the
/// objective the placement engine greedily increases.
pub fn affinity_measure(order: &[usize], affinity: &AffinityMatrix) -> Energy {
    order
        .windows(2)
        .map(|pair| 2 * bond(pair[0], pair[1], affinity))
        .sum()
}
