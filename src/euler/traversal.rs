//! Iterative Euler traversal
//!
//! Explicit stack of frames instead of native recursion: a path graph of
//! length n would otherwise need n native stack frames.

use bitvec::prelude::*;

use super::EulerTour;
use crate::tree::{MalformedReason, MalformedTreeError, NodeId, Tree};

/// One level of the DFS stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    depth: usize,
    /// Next position in `node`'s neighbor list to examine.
    cursor: usize,
}

impl EulerTour {
    /// Run one depth-first traversal from `root`, recording the tour.
    ///
    /// This traversal is also where the input is proven to be a tree:
    /// reaching a visited node other than the parent is a cycle, leftover
    /// unvisited nodes mean the graph is disconnected, and finally the
    /// declared edge count must be `n - 1`.
    pub fn build(tree: &Tree, root: NodeId) -> Result<Self, MalformedTreeError> {
        tree.check_root(root)?;

        let num_nodes = tree.num_nodes();
        let capacity = 2 * num_nodes - 1;
        let mut nodes = Vec::with_capacity(capacity);
        let mut depths = Vec::with_capacity(capacity);
        let mut first = vec![0; num_nodes];
        let mut last = vec![0; num_nodes];
        let mut visited = bitvec![0; num_nodes];

        visited.set(root, true);
        nodes.push(root);
        depths.push(0);

        let mut stack = vec![Frame {
            node: root,
            parent: None,
            depth: 0,
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = tree.neighbors(frame.node).get(frame.cursor) {
                frame.cursor += 1;
                if Some(child) == frame.parent {
                    continue;
                }
                if visited[child] {
                    return Err(MalformedReason::Cycle { node: child }.into());
                }

                let parent = frame.node;
                let depth = frame.depth + 1;
                visited.set(child, true);
                first[child] = nodes.len();
                nodes.push(child);
                depths.push(depth);
                stack.push(Frame {
                    node: child,
                    parent: Some(parent),
                    depth,
                    cursor: 0,
                });
            } else {
                let done = frame.node;
                // Latest entry is `done` itself: its first visit for a leaf,
                // otherwise the re-emission after its last child.
                last[done] = nodes.len() - 1;
                stack.pop();
                if let Some(parent) = stack.last() {
                    nodes.push(parent.node);
                    depths.push(parent.depth);
                }
            }
        }

        if let Some(node) = visited.first_zero() {
            return Err(MalformedReason::Disconnected { node }.into());
        }

        let expected = num_nodes - 1;
        if tree.declared_edges() != expected {
            return Err(MalformedReason::WrongEdgeCount {
                expected,
                found: tree.declared_edges(),
            }
            .into());
        }

        debug_assert_eq!(nodes.len(), capacity);
        tracing::trace!(num_nodes, tour_len = nodes.len(), "euler tour recorded");

        Ok(Self {
            root,
            nodes,
            depths,
            first,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Tree {
        Tree::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap()
    }

    #[test]
    fn binary_tree_tour_matches_recursive_order() {
        let tree = Tree::from_edges(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]).unwrap();
        let tour = EulerTour::build(&tree, 0).unwrap();

        assert_eq!(tour.nodes(), &[0, 1, 3, 1, 4, 1, 0, 2, 5, 2, 6, 2, 0]);
        assert_eq!(tour.depths(), &[0, 1, 2, 1, 2, 1, 0, 1, 2, 1, 2, 1, 0]);
        assert_eq!(tour.first_occurrence(4), 4);
        assert_eq!(tour.last_occurrence(1), 5);
        assert_eq!(tour.last_occurrence(0), 12);
    }

    #[test]
    fn single_node_tour() {
        let tree = Tree::from_edges(1, []).unwrap();
        let tour = EulerTour::build(&tree, 0).unwrap();
        assert_eq!(tour.nodes(), &[0]);
        assert_eq!(tour.depths(), &[0]);
        assert_eq!(tour.first_occurrence(0), 0);
        assert_eq!(tour.last_occurrence(0), 0);
    }

    #[test]
    fn deep_path_does_not_recurse() {
        let n = 200_000;
        let tour = EulerTour::build(&path(n), 0).unwrap();
        assert_eq!(tour.len(), 2 * n - 1);
        assert_eq!(tour.height(), n - 1);
        assert_eq!(tour.first_occurrence(n - 1), n - 1);
    }

    #[test]
    fn non_zero_root_starts_and_ends_tour() {
        let tour = EulerTour::build(&path(4), 2).unwrap();
        assert_eq!(tour.nodes(), &[2, 1, 0, 1, 2, 3, 2]);
        assert_eq!(tour.depths(), &[0, 1, 2, 1, 0, 1, 0]);
    }

    #[test]
    fn cycle_is_reported() {
        let tree = Tree::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let err = EulerTour::build(&tree, 0).unwrap_err();
        assert!(matches!(err.reason, MalformedReason::Cycle { .. }));
    }

    #[test]
    fn disconnected_is_reported_before_edge_count() {
        let tree = Tree::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        let err = EulerTour::build(&tree, 0).unwrap_err();
        assert_eq!(err.reason, MalformedReason::Disconnected { node: 2 });
    }

    #[test]
    fn duplicate_edges_fail_edge_count() {
        let tree = Tree::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
        let err = EulerTour::build(&tree, 0).unwrap_err();
        assert_eq!(
            err.reason,
            MalformedReason::WrongEdgeCount {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn root_out_of_range() {
        let err = EulerTour::build(&path(3), 3).unwrap_err();
        assert_eq!(
            err.reason,
            MalformedReason::RootOutOfRange {
                root: 3,
                num_nodes: 3
            }
        );
    }
}
