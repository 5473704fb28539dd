//! # bea-core
//!
//! Bond Energy Algorithm — clustered attribute affinity matrices for
//! vertical fragmentation.
//!
//! ---
//!
//! ## What it does
//!
//! An attribute affinity matrix records how often each pair of database
//! attributes is accessed together. BEA permutes its columns so that
//! attributes with strong mutual affinity sit next to each other, then
//! reorders the rows the same way. The blocks along the diagonal of the
//! result are the candidate vertical fragments.
//!
//! The clustering is greedy and deterministic: attributes are inserted one at
//! a time, each at the position that maximises its bond energy
//! *contribution*. Equal contributions go to the position found later in the
//! left-to-right scan.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! bea.txt ──► AffinityMatrix ──► place_all ──► symmetrize ──► Clustering
//!   (text)                          ↑                            │
//!                           bond / contribution             render_table
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`matrix`] | [`Matrix`] | 1-indexed square grid with attribute header row |
//! | [`affinity`] | [`AffinityMatrix`] | Validated, read-only input matrix |
//! | [`bond`] | [`bond()`], [`contribution()`] | Bond energy and placement contribution |
//! | [`placement`] | [`ClusteredMatrix`], [`Placement`] | Column placement engine |
//! | [`symmetry`] | [`symmetrize()`] | Row reordering to match the column order |
//! | [`clustering`] | [`BondEnergy`], [`Clustering`] | End-to-end run |
//! | [`config`] | [`BeaConfig`], [`TieBreak`] | Run configuration |
//! | [`text`] | [`text::parse_affinity`] | `bea.txt` layout and console table |
//! | [`snapshot`] | `ClusteringSnapshot` | Serialisable result (requires `serde` feature) |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` + `alloc` by default. Enable `std` to forward
//! `std` support to `thiserror` and `tracing`, `serde` for snapshots,
//! `python-ffi` for PyO3 bindings and `cli` for the `bea` binary.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.
//! Change date: 23 February 2032 — Apache License 2.0.
//! Commercial production use requires a license from Flout Labs (cbyrne@floutlabs.com).

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod affinity;
pub mod bond;
pub mod clustering;
pub mod config;
pub mod error;
pub mod matrix;
pub mod placement;
pub mod symmetry;
pub mod text;
#[cfg(feature = "serde")]
pub mod snapshot;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use affinity::AffinityMatrix;
pub use bond::{affinity_measure, bond, contribution, Energy};
pub use clustering::{BondEnergy, Clustering};
pub use config::{BeaConfig, TieBreak};
pub use error::BeaError;
pub use matrix::{Affinity, Matrix};
pub use placement::{place_all, ClusteredMatrix, Placement};
pub use symmetry::symmetrize;
