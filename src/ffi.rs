//! Python FFI bindings via PyO3.
//!
//! Exposes the clustering pipeline to Python with affinity matrices passed as
//! lists of lists of non-negative integers.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! import bea_core
//!
//! aa = [[45, 0, 45, 0], [0, 80, 5, 75], [45, 5, 53, 3], [0, 75, 3, 78]]
//! result = bea_core.cluster(aa)
//! print(result.order)            # [1, 3, 2, 4]
//! print(result.rows)             # clustered affinity matrix
//! print(result.affinity_measure) # 34330
//! print(bea_core.bond(aa, 2, 4)) # 11865
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::affinity::AffinityMatrix;
use crate::bond::bond;
use crate::clustering::{BondEnergy, Clustering as RustClustering};
use crate::config::{BeaConfig, TieBreak};
use crate::error::BeaError;
use crate::matrix::Affinity;
use crate::text::render_table;

fn to_py_err(e: BeaError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_tie_break(s: &str) -> PyResult<TieBreak> {
    match s {
        "later" => Ok(TieBreak::PreferLater),
        "earlier" => Ok(TieBreak::PreferEarlier),
        other => Err(PyValueError::new_err(format!(
            "tie_break must be \"later\" or \"earlier\", got {other:?}"
        ))),
    }
}

// ── Clustering ────────────────────────────────────────────────────────────────

/// Result of a bond energy clustering run.
#[pyclass(name = "Clustering")]
#[derive(Clone)]
pub struct PyClustering {
    inner: RustClustering,
}

#[pymethods]
impl PyClustering {
    /// Attribute identities (1-based) in clustered order.
    #[getter]
    pub fn order(&self) -> Vec<usize> {
        self.inner.order().to_vec()
    }

    /// Clustered affinity matrix rows, header excluded.
    #[getter]
    pub fn rows(&self) -> Vec<Vec<Affinity>> {
        self.inner.rows()
    }

    /// Global affinity measure of the clustered order.
    #[getter]
    pub fn affinity_measure(&self) -> i128 {
        self.inner.affinity_measure()
    }

    /// Tab-separated table with header row, as printed by the `bea` CLI.
    pub fn table(&self) -> String {
        render_table(self.inner.matrix())
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("Clustering(order={:?})", self.inner.order())
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Cluster an N×N affinity matrix with the Bond Energy Algorithm.
///
/// Args:
///     rows: N lists of N non-negative integers, N >= 2
///     tie_break: "later" (default, classic BEA) or "earlier"
///     symmetrize: reorder rows to match the clustered columns (default True)
///
/// Raises:
///     ValueError: if the matrix is undersized or not square
#[pyfunction]
#[pyo3(signature = (rows, tie_break="later", symmetrize=true))]
pub fn cluster(rows: Vec<Vec<Affinity>>, tie_break: &str, symmetrize: bool) -> PyResult<PyClustering> {
    let config = BeaConfig {
        tie_break: parse_tie_break(tie_break)?,
        symmetrize,
        ..BeaConfig::default()
    };
    let inner = BondEnergy::new(config).cluster_rows(&rows).map_err(to_py_err)?;
    Ok(PyClustering { inner })
}

/// Bond energy between attribute columns `a` and `b` (1-based).
#[pyfunction]
#[pyo3(name = "bond")]
pub fn bond_between(rows: Vec<Vec<Affinity>>, a: usize, b: usize) -> PyResult<i128> {
    let aa = AffinityMatrix::from_rows(&rows).map_err(to_py_err)?;
    let n = aa.size();
    for id in [a, b] {
        if id == 0 || id > n {
            return Err(PyValueError::new_err(format!(
                "attribute {id} outside 1..={n}"
            )));
        }
    }
    Ok(bond(a, b, &aa))
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Bond Energy Algorithm Python bindings.
#[pymodule]
pub fn bea_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyClustering>()?;
    m.add_function(wrap_pyfunction!(cluster, m)?)?;
    m.add_function(wrap_pyfunction!(bond_between, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
