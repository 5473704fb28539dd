//! `bea` — cluster an attribute affinity matrix read from a text file.
//!
//! ```bash
//! cargo run --features cli --bin bea -- bea.txt
//! RUST_LOG=bea_core=debug cargo run --features cli --bin bea -- --json bea.txt
//! ```
//!
//! Logs go to stderr; stdout carries only the table (or JSON snapshot).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bea_core::clustering::BondEnergy;
use bea_core::config::{BeaConfig, TieBreak};
use bea_core::snapshot::ClusteringSnapshot;
use bea_core::text::{parse_affinity, render_table};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieArg {
    Later,
    Earlier,
}

impl From<TieArg> for TieBreak {
    fn from(t: TieArg) -> Self {
        match t {
            TieArg::Later => TieBreak::PreferLater,
            TieArg::Earlier => TieBreak::PreferEarlier,
        }
    }
}

/// Compute the clustered affinity matrix with the Bond Energy Algorithm.
#[derive(Debug, Parser)]
#[command(name = "bea", version, about)]
struct Args {
    /// Input file: N on the first line, then N rows of N integers.
    #[arg(default_value = "bea.txt")]
    path: PathBuf,

    /// Tie-break policy for equal contributions.
    #[arg(long, value_enum, default_value_t = TieArg::Later)]
    tie_break: TieArg,

    /// Leave rows in input order (column-clustered matrix only).
    #[arg(long)]
    no_symmetrize: bool,

    /// Fail instead of warning when the input is not symmetric.
    #[arg(long)]
    require_symmetric: bool,

    /// Print a JSON snapshot instead of the table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = BeaConfig {
        tie_break: args.tie_break.into(),
        symmetrize: !args.no_symmetrize,
        require_symmetric: args.require_symmetric,
    };

    let input = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let affinity = parse_affinity(&input)
        .with_context(|| format!("parsing {}", args.path.display()))?;
    let result = BondEnergy::new(config).cluster(&affinity)?;

    if args.json {
        let snapshot = ClusteringSnapshot::from_clustering(&result);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_table(result.matrix()));
    }
    Ok(())
}
