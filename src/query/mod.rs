//! LCA query engine
//!
//! `lca(u, v)` is the shallowest node of the Euler tour between the first
//! occurrences of `u` and `v`, found with one sparse-table lookup.
//!
//! The built index is immutable; queries only read it, so a shared
//! reference (or an `Arc`) can be queried from any number of threads.

use thiserror::Error;

use crate::euler::EulerTour;
use crate::rmq::SparseTable;
use crate::tree::{NodeId, Tree};
use crate::{IndexConfig, LcaError};

/// Query named a node outside `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("node {id} not found in tree with {num_nodes} nodes")]
pub struct NodeNotFoundError {
    /// Requested id.
    pub id: NodeId,
    /// Number of nodes in the tree.
    pub num_nodes: usize,
}

/// Static LCA index: Euler tour plus sparse table over its depths.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LcaIndex {
    tour: EulerTour,
    table: SparseTable,
}

impl LcaIndex {
    /// Build rooted at node 0 with default settings.
    pub fn build(tree: &Tree) -> Result<Self, LcaError> {
        Self::build_with_config(tree, &IndexConfig::default())
    }

    /// Build with explicit root and checks.
    ///
    /// Either returns a complete, query-ready index or an error; nothing is
    /// partially constructed.
    pub fn build_with_config(tree: &Tree, config: &IndexConfig) -> Result<Self, LcaError> {
        let span = tracing::debug_span!(
            "lca_index_build",
            num_nodes = tree.num_nodes(),
            root = config.root
        );
        let _enter = span.enter();

        let tour = EulerTour::build(tree, config.root)?;
        if config.verify_invariants {
            tour.check_invariants(tree)?;
        }
        let table = SparseTable::build(tour.depths());

        tracing::debug!(
            tour_len = tour.len(),
            levels = table.num_levels(),
            height = tour.height(),
            "lca index ready"
        );
        Ok(Self { tour, table })
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn query(&self, u: NodeId, v: NodeId) -> Result<NodeId, NodeNotFoundError> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Ok(u);
        }

        let (mut l, mut r) = (self.tour.first_occurrence(u), self.tour.first_occurrence(v));
        if l > r {
            std::mem::swap(&mut l, &mut r);
        }
        let index = self.table.argmin(self.tour.depths(), l, r);
        Ok(self.tour.node_at(index))
    }

    /// Answer a batch of queries, stopping at the first invalid id.
    pub fn query_many<I>(&self, pairs: I) -> Result<Vec<NodeId>, NodeNotFoundError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        pairs.into_iter().map(|(u, v)| self.query(u, v)).collect()
    }

    /// Depth of `node` below the root.
    pub fn depth(&self, node: NodeId) -> Result<usize, NodeNotFoundError> {
        self.check(node)?;
        Ok(self.tour.depth_of(node))
    }

    /// Parent of `node`, `None` for the root.
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, NodeNotFoundError> {
        self.check(node)?;
        let first = self.tour.first_occurrence(node);
        // The tour enters `node` from its parent.
        Ok(first.checked_sub(1).map(|i| self.tour.node_at(i)))
    }

    /// Whether `ancestor` lies on the path from the root to `node`
    /// (a node is its own ancestor).
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool, NodeNotFoundError> {
        self.check(ancestor)?;
        self.check(node)?;
        Ok(self.tour.first_occurrence(ancestor) <= self.tour.first_occurrence(node)
            && self.tour.last_occurrence(node) <= self.tour.last_occurrence(ancestor))
    }

    /// Number of edges on the path between `u` and `v`.
    pub fn distance(&self, u: NodeId, v: NodeId) -> Result<usize, NodeNotFoundError> {
        let lca = self.query(u, v)?;
        Ok(self.tour.depth_of(u) + self.tour.depth_of(v) - 2 * self.tour.depth_of(lca))
    }

    /// Number of nodes `n`.
    pub fn num_nodes(&self) -> usize {
        self.tour.num_nodes()
    }

    /// Root the index was built with.
    pub fn root(&self) -> NodeId {
        self.tour.root()
    }

    /// Underlying Euler tour.
    pub fn tour(&self) -> &EulerTour {
        &self.tour
    }

    /// Underlying sparse table.
    pub fn sparse_table(&self) -> &SparseTable {
        &self.table
    }

    /// Digest of root, tour and depths. Equal trees built with equal roots
    /// always produce equal fingerprints.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.root() as u64).to_le_bytes());
        hasher.update(&(self.num_nodes() as u64).to_le_bytes());
        for (&node, &depth) in self.tour.nodes().iter().zip(self.tour.depths()) {
            hasher.update(&(node as u64).to_le_bytes());
            hasher.update(&(depth as u64).to_le_bytes());
        }
        hasher.finalize()
    }

    #[inline]
    fn check(&self, id: NodeId) -> Result<(), NodeNotFoundError> {
        if id >= self.num_nodes() {
            return Err(NodeNotFoundError {
                id,
                num_nodes: self.num_nodes(),
            });
        }
        Ok(())
    }
}
