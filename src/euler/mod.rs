//! Euler tour of a rooted tree
//!
//! Three parallel views produced by one DFS:
//! - tour: node at each step, length `2n - 1`
//! - depths: depth of the node at each step
//! - first/last occurrence: earliest and latest tour index of each node
//!
//! For `l = first[u] <= r = first[v]`, the tour slice `[l, r]` walks the
//! tree path from `u` to `v` and passes through `lca(u, v)` and never
//! above it, so the LCA is the unique shallowest node in that slice.

mod traversal;

use thiserror::Error;

use crate::tree::{NodeId, Tree};

/// A broken Euler tour invariant. Indicates a construction bug, never bad
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourInvariantError {
    /// Tour length is not `2n - 1`.
    #[error("tour has length {found}, expected {expected}")]
    Length {
        /// `2n - 1`.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// Tour does not start and end at the root at depth 0.
    #[error("tour must start and end at root {root} with depth 0")]
    Endpoints {
        /// Root of the tour.
        root: NodeId,
    },

    /// Adjacent tour entries are not joined by a tree edge.
    #[error("tour steps {from} -> {to} at position {position} without an edge")]
    NotAnEdge {
        /// Index of the earlier entry.
        position: usize,
        /// Node at `position`.
        from: NodeId,
        /// Node at `position + 1`.
        to: NodeId,
    },

    /// Adjacent depths do not differ by exactly one.
    #[error("depth changes from {from} to {to} at position {position}")]
    DepthStep {
        /// Index of the earlier entry.
        position: usize,
        /// Depth at `position`.
        from: usize,
        /// Depth at `position + 1`.
        to: usize,
    },

    /// First or last occurrence table disagrees with the tour.
    #[error("occurrence table wrong for node {node}")]
    Occurrence {
        /// Node with a bad entry.
        node: NodeId,
    },
}

/// Euler tour with depth and occurrence tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct EulerTour {
    root: NodeId,
    nodes: Vec<NodeId>,
    depths: Vec<usize>,
    first: Vec<usize>,
    last: Vec<usize>,
}

impl EulerTour {
    /// Root the tour starts and ends at.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of tree nodes `n`.
    pub fn num_nodes(&self) -> usize {
        self.first.len()
    }

    /// Tour length `m = 2n - 1`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tour has no steps.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node visited at each step.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Depth at each step.
    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    /// Node at tour position `index`.
    #[inline]
    pub fn node_at(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    /// Smallest tour index holding `node`.
    #[inline]
    pub fn first_occurrence(&self, node: NodeId) -> usize {
        self.first[node]
    }

    /// Largest tour index holding `node`.
    #[inline]
    pub fn last_occurrence(&self, node: NodeId) -> usize {
        self.last[node]
    }

    /// Depth of `node` below the root.
    #[inline]
    pub fn depth_of(&self, node: NodeId) -> usize {
        self.depths[self.first[node]]
    }

    /// Maximum depth over all nodes.
    pub fn height(&self) -> usize {
        self.depths.iter().copied().max().unwrap_or(0)
    }

    /// Verify every structural invariant of the tour against `tree`.
    pub fn check_invariants(&self, tree: &Tree) -> Result<(), TourInvariantError> {
        let n = tree.num_nodes();
        let expected = 2 * n - 1;
        if self.nodes.len() != expected || self.depths.len() != expected {
            return Err(TourInvariantError::Length {
                expected,
                found: self.nodes.len(),
            });
        }

        let ends_at_root = self.nodes[0] == self.root
            && self.nodes[expected - 1] == self.root
            && self.depths[0] == 0
            && self.depths[expected - 1] == 0;
        if !ends_at_root {
            return Err(TourInvariantError::Endpoints { root: self.root });
        }

        for position in 0..expected - 1 {
            let (from, to) = (self.nodes[position], self.nodes[position + 1]);
            if !tree.has_edge(from, to) {
                return Err(TourInvariantError::NotAnEdge { position, from, to });
            }
            let (d0, d1) = (self.depths[position], self.depths[position + 1]);
            if d0.abs_diff(d1) != 1 {
                return Err(TourInvariantError::DepthStep {
                    position,
                    from: d0,
                    to: d1,
                });
            }
        }

        let mut seen_first = vec![None; n];
        let mut seen_last = vec![0; n];
        for (position, &node) in self.nodes.iter().enumerate() {
            seen_first[node].get_or_insert(position);
            seen_last[node] = position;
        }
        for node in 0..n {
            if seen_first[node] != Some(self.first[node]) || seen_last[node] != self.last[node] {
                return Err(TourInvariantError::Occurrence { node });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_tree() -> Tree {
        Tree::from_edges(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]).unwrap()
    }

    #[test]
    fn built_tour_satisfies_invariants() {
        let tree = binary_tree();
        for root in 0..7 {
            let tour = EulerTour::build(&tree, root).unwrap();
            assert_eq!(tour.check_invariants(&tree), Ok(()));
            assert_eq!(tour.root(), root);
            assert_eq!(tour.num_nodes(), 7);
        }
    }

    #[test]
    fn depth_and_height() {
        let tour = EulerTour::build(&binary_tree(), 0).unwrap();
        assert_eq!(tour.depth_of(0), 0);
        assert_eq!(tour.depth_of(2), 1);
        assert_eq!(tour.depth_of(6), 2);
        assert_eq!(tour.height(), 2);
        assert!(!tour.is_empty());
    }

    #[test]
    fn tampered_tour_is_detected() {
        let tree = binary_tree();
        let tour = EulerTour::build(&tree, 0).unwrap();

        let mut wrong_depth = tour.clone();
        wrong_depth.depths[3] = 5;
        assert!(matches!(
            wrong_depth.check_invariants(&tree),
            Err(TourInvariantError::DepthStep { position: 2, .. })
        ));

        let mut wrong_step = tour.clone();
        wrong_step.nodes[2] = 5;
        assert!(matches!(
            wrong_step.check_invariants(&tree),
            Err(TourInvariantError::NotAnEdge { position: 1, .. })
        ));

        let mut wrong_first = tour.clone();
        wrong_first.first[0] = 6;
        assert_eq!(
            wrong_first.check_invariants(&tree),
            Err(TourInvariantError::Occurrence { node: 0 })
        );

        let mut truncated = tour;
        truncated.nodes.pop();
        truncated.depths.pop();
        assert_eq!(
            truncated.check_invariants(&tree),
            Err(TourInvariantError::Length {
                expected: 13,
                found: 12
            })
        );
    }
}
