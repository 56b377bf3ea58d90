//! # Lowest Common Ancestor via Range Minimum Queries
//!
//! Static LCA index for a rooted tree: O(n log n) preprocessing, O(1)
//! queries.
//!
//! ## Core Algorithm
//!
//! 1. **Tree model**: normalize matrix / edge list / neighbor lists into flat
//!    neighbor lists indexed by `0..n`
//! 2. **Euler tour**: one iterative DFS records the node and depth at each of
//!    the `2n - 1` steps, plus each node's first occurrence
//! 3. **Sparse table**: leftmost-minimum depth index for every power-of-two
//!    window of the tour
//! 4. **Query**: `lca(u, v)` is the shallowest tour entry between the first
//!    occurrences of `u` and `v`, found from two overlapping windows
//!
//! ## Usage Example
//!
//! ```
//! use lca_rmq::{LcaIndex, Tree};
//!
//! let tree = Tree::from_edges(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)])?;
//! let index = LcaIndex::build(&tree)?;
//! assert_eq!(index.query(3, 4)?, 1);
//! assert_eq!(index.query(3, 6)?, 0);
//! # Ok::<(), lca_rmq::LcaError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Components, each depending only on the previous one
pub mod tree;   // Input normalization
pub mod euler;  // Euler tour, depths, occurrences
pub mod rmq;    // Sparse-table range minimum
pub mod query;  // LCA query engine
pub mod io;     // Edge-list text format
/// Python bindings for exposing the index to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use euler::{EulerTour, TourInvariantError};
pub use query::{LcaIndex, NodeNotFoundError};
pub use rmq::{LogTable, SparseTable};
pub use tree::{MalformedReason, MalformedTreeError, NodeId, Tree};

use thiserror::Error;

/// Construction parameters for [`LcaIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Root of the tree.
    pub root: NodeId,

    /// Re-check every Euler tour invariant after the traversal.
    /// On by default in debug builds.
    pub verify_invariants: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: 0,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

impl IndexConfig {
    /// Default configuration with a different root.
    pub fn rooted_at(root: NodeId) -> Self {
        Self::default().with_root(root)
    }

    /// Set the root.
    pub fn with_root(mut self, root: NodeId) -> Self {
        self.root = root;
        self
    }

    /// Enable or disable post-construction invariant checks.
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }
}

/// Errors produced while building or querying an index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcaError {
    /// Input is not a valid rooted tree.
    #[error(transparent)]
    MalformedTree(#[from] MalformedTreeError),

    /// Query referenced a node outside `0..n`.
    #[error(transparent)]
    NodeNotFound(#[from] NodeNotFoundError),

    /// Euler tour failed its self-check. Indicates a bug, not bad input.
    #[error("euler tour invariant violated: {0}")]
    InvariantViolation(#[from] TourInvariantError),
}

/// Build an index rooted at `root`.
pub fn build(tree: &Tree, root: NodeId) -> Result<LcaIndex, LcaError> {
    LcaIndex::build_with_config(tree, &IndexConfig::rooted_at(root))
}
