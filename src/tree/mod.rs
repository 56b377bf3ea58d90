//! Tree model
//!
//! Normalizes caller input (adjacency matrix, edge list, neighbor lists or
//! parent array) into flat neighbor lists indexed by node id `0..n`.
//!
//! Only structural checks happen here. Acyclicity and connectivity are
//! decided by the single Euler traversal in [`crate::euler`], which reports
//! failures through the same [`MalformedTreeError`].

mod input;

use thiserror::Error;

/// Node identifier: an index in `0..n`.
pub type NodeId = usize;

/// Why an input was rejected as a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// A node was reached twice during traversal (includes self-loops).
    #[error("cycle detected at node {node}")]
    Cycle {
        /// Node at which the cycle was observed.
        node: NodeId,
    },

    /// Some node is not reachable from the root.
    #[error("node {node} is not reachable from the root")]
    Disconnected {
        /// Smallest unreachable node id.
        node: NodeId,
    },

    /// Declared edge count differs from `n - 1`.
    #[error("expected {expected} edges, found {found}")]
    WrongEdgeCount {
        /// `n - 1`.
        expected: usize,
        /// Number of edges declared by the input.
        found: usize,
    },

    /// Input contained no nodes.
    #[error("tree must contain at least one node")]
    Empty,

    /// Adjacency matrix row has the wrong length.
    #[error("matrix row {row} has length {len}, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// Adjacency matrix entry other than 0 or 1.
    #[error("matrix entry ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Value found.
        value: u8,
    },

    /// An edge is declared in one direction only.
    #[error("edge ({from}, {to}) has no reverse entry")]
    Asymmetric {
        /// Node listing the neighbor.
        from: NodeId,
        /// Neighbor that does not list `from` back.
        to: NodeId,
    },

    /// Edge endpoint outside `0..n`.
    #[error("edge endpoint {node} out of range for {num_nodes} nodes")]
    EndpointOutOfRange {
        /// Endpoint found.
        node: NodeId,
        /// Number of nodes.
        num_nodes: usize,
    },

    /// Requested root outside `0..n`.
    #[error("root {root} out of range for {num_nodes} nodes")]
    RootOutOfRange {
        /// Requested root.
        root: NodeId,
        /// Number of nodes.
        num_nodes: usize,
    },
}

/// Input does not describe a valid rooted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed tree: {reason}")]
pub struct MalformedTreeError {
    /// Cause of the rejection.
    pub reason: MalformedReason,
}

impl MalformedTreeError {
    /// Wrap a reason.
    pub fn new(reason: MalformedReason) -> Self {
        tracing::debug!(%reason, "rejecting malformed tree");
        Self { reason }
    }
}

impl From<MalformedReason> for MalformedTreeError {
    fn from(reason: MalformedReason) -> Self {
        Self::new(reason)
    }
}

/// Undirected graph with normalized neighbor lists.
///
/// Neighbor lists are sorted and free of duplicates, so traversal order (and
/// with it the Euler tour) depends only on the edge set, not on how the
/// caller happened to order it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Tree {
    neighbors: Vec<Vec<NodeId>>,
    declared_edges: usize,
}

impl Tree {
    /// Number of nodes `n`.
    pub fn num_nodes(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of edges the input declared, duplicates included.
    pub fn declared_edges(&self) -> usize {
        self.declared_edges
    }

    /// Distinct neighbors of `node`, ascending.
    ///
    /// Panics if `node >= n`.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.neighbors[node]
    }

    /// Whether `u` and `v` share an edge.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors
            .get(u)
            .map_or(false, |list| list.binary_search(&v).is_ok())
    }

    /// Check that `root` names a node.
    pub fn check_root(&self, root: NodeId) -> Result<(), MalformedTreeError> {
        if root >= self.num_nodes() {
            return Err(MalformedReason::RootOutOfRange {
                root,
                num_nodes: self.num_nodes(),
            }
            .into());
        }
        Ok(())
    }
}
