//! Python bindings that expose the LCA index via PyO3.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::{prelude::*, types::PyModule};

use crate::{build, LcaError, LcaIndex, NodeId, NodeNotFoundError, Tree};

/// Python-facing wrapper around [`LcaIndex`].
#[pyclass(frozen)]
#[derive(Debug)]
pub struct PyLcaIndex {
    inner: LcaIndex,
}

#[pymethods]
impl PyLcaIndex {
    /// Build an index from `num_nodes` and a list of `(u, v)` edges.
    ///
    /// Raises `ValueError` if the edges do not form a tree.
    #[new]
    #[pyo3(signature = (num_nodes, edges, root = 0))]
    pub fn new(num_nodes: usize, edges: Vec<(NodeId, NodeId)>, root: NodeId) -> PyResult<Self> {
        let tree = Tree::from_edges(num_nodes, edges)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        let inner = build(&tree, root).map_err(lca_error_to_py)?;
        Ok(Self { inner })
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn query(&self, u: NodeId, v: NodeId) -> PyResult<NodeId> {
        self.inner.query(u, v).map_err(not_found_to_py)
    }

    /// Depth of `node` below the root.
    pub fn depth(&self, node: NodeId) -> PyResult<usize> {
        self.inner.depth(node).map_err(not_found_to_py)
    }

    /// Number of edges between `u` and `v`.
    pub fn distance(&self, u: NodeId, v: NodeId) -> PyResult<usize> {
        self.inner.distance(u, v).map_err(not_found_to_py)
    }

    /// Root the index was built with.
    #[getter]
    pub fn root(&self) -> NodeId {
        self.inner.root()
    }

    /// Number of nodes.
    pub fn __len__(&self) -> usize {
        self.inner.num_nodes()
    }
}

fn not_found_to_py(err: NodeNotFoundError) -> PyErr {
    PyIndexError::new_err(err.to_string())
}

fn lca_error_to_py(err: LcaError) -> PyErr {
    match err {
        LcaError::NodeNotFound(inner) => not_found_to_py(inner),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Create Python module.
#[pymodule]
pub fn lca_rmq_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLcaIndex>()?;
    Ok(())
}
