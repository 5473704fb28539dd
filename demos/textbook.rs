//! # Bond Energy Algorithm walkthrough
//!
//! Clusters the classic four-attribute affinity matrix, printing every
//! placement round before the final clustered matrix.

use bea_core::affinity::AffinityMatrix;
use bea_core::bond::{affinity_measure, bond};
use bea_core::clustering::BondEnergy;
use bea_core::config::TieBreak;
use bea_core::placement::ClusteredMatrix;
use bea_core::text::render_table;

fn main() {
    let aa = AffinityMatrix::from_rows(&[
        [45u32, 0, 45, 0],
        [0, 80, 5, 75],
        [45, 5, 53, 3],
        [0, 75, 3, 78],
    ])
    .expect("textbook matrix is square");

    println!("── Input ───────────────────────────────────");
    print!("{}", render_table(aa.as_matrix()));

    println!("\n── Pairwise bonds ──────────────────────────");
    for a in 1..=aa.size() {
        for b in (a + 1)..=aa.size() {
            println!("bond(A{a}, A{b}) = {}", bond(a, b, &aa));
        }
    }

    println!("\n── Placement rounds ────────────────────────");
    let mut cm = ClusteredMatrix::seeded(&aa);
    println!("seed: {:?}", cm.order());
    for candidate in 3..=aa.size() {
        let p = cm.best_placement(candidate, &aa, TieBreak::PreferLater);
        let label = |id: Option<usize>| id.map_or("—".to_string(), |a| format!("A{a}"));
        println!(
            "A{candidate}: between {} and {} (cont = {})",
            label(p.left),
            label(p.right),
            p.score
        );
        cm.place(&p, &aa);
        println!("      order {:?}", cm.order());
    }

    let result = BondEnergy::default().cluster(&aa).expect("default config accepts any input");
    println!("\n── Clustered affinity matrix ───────────────");
    print!("{}", render_table(result.matrix()));
    println!(
        "\nAM(identity) = {}   AM(clustered) = {}",
        affinity_measure(&[1, 2, 3, 4], &aa),
        result.affinity_measure()
    );
}
