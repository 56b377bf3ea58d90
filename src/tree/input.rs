use bitvec::prelude::*;

use super::{MalformedReason, MalformedTreeError, NodeId, Tree};

impl Tree {
    /// Build from an `n×n` adjacency matrix with 0/1 entries.
    ///
    /// The matrix must be square and symmetric; a non-zero diagonal entry is a
    /// self-loop and is reported as a cycle.
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MalformedTreeError> {
        let n = rows.len();
        if n == 0 {
            return Err(MalformedReason::Empty.into());
        }

        for (row, entries) in rows.iter().enumerate() {
            let len = entries.as_ref().len();
            if len != n {
                return Err(MalformedReason::NotSquare {
                    row,
                    len,
                    expected: n,
                }
                .into());
            }
        }

        let mut neighbors = vec![Vec::new(); n];
        let mut declared_edges = 0;

        for (row, entries) in rows.iter().enumerate() {
            for (col, &value) in entries.as_ref().iter().enumerate() {
                match value {
                    0 => continue,
                    1 => {}
                    _ => return Err(MalformedReason::InvalidEntry { row, col, value }.into()),
                }
                if row == col {
                    return Err(MalformedReason::Cycle { node: row }.into());
                }
                if rows[col].as_ref()[row] != 1 {
                    return Err(MalformedReason::Asymmetric { from: row, to: col }.into());
                }
                neighbors[row].push(col);
                if row < col {
                    declared_edges += 1;
                }
            }
        }

        // Column order already ascending, no duplicates possible.
        Ok(Self {
            neighbors,
            declared_edges,
        })
    }

    /// Build from `n` and a list of undirected edges.
    ///
    /// Repeated edges are merged in the neighbor lists but still counted, so
    /// they surface later as [`MalformedReason::WrongEdgeCount`].
    pub fn from_edges<I>(num_nodes: usize, edges: I) -> Result<Self, MalformedTreeError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        if num_nodes == 0 {
            return Err(MalformedReason::Empty.into());
        }

        let mut neighbors = vec![Vec::new(); num_nodes];
        let mut declared_edges = 0;

        for (u, v) in edges {
            for node in [u, v] {
                if node >= num_nodes {
                    return Err(MalformedReason::EndpointOutOfRange { node, num_nodes }.into());
                }
            }
            if u == v {
                return Err(MalformedReason::Cycle { node: u }.into());
            }
            neighbors[u].push(v);
            neighbors[v].push(u);
            declared_edges += 1;
        }

        normalize(&mut neighbors);
        Ok(Self {
            neighbors,
            declared_edges,
        })
    }

    /// Build from per-node neighbor lists.
    ///
    /// Lists are treated as sets; every entry must be mirrored by the
    /// neighbor's own list.
    pub fn from_adjacency_lists(mut lists: Vec<Vec<NodeId>>) -> Result<Self, MalformedTreeError> {
        let num_nodes = lists.len();
        if num_nodes == 0 {
            return Err(MalformedReason::Empty.into());
        }

        for (node, list) in lists.iter().enumerate() {
            for &other in list {
                if other >= num_nodes {
                    return Err(MalformedReason::EndpointOutOfRange {
                        node: other,
                        num_nodes,
                    }
                    .into());
                }
                if other == node {
                    return Err(MalformedReason::Cycle { node }.into());
                }
            }
        }

        normalize(&mut lists);

        for (node, list) in lists.iter().enumerate() {
            for &other in list {
                if lists[other].binary_search(&node).is_err() {
                    return Err(MalformedReason::Asymmetric {
                        from: node,
                        to: other,
                    }
                    .into());
                }
            }
        }

        let declared_edges = lists.iter().map(Vec::len).sum::<usize>() / 2;
        Ok(Self {
            neighbors: lists,
            declared_edges,
        })
    }

    /// Build from a parent array; returns the tree and its root.
    ///
    /// The root is the first node without a parent. Any further parentless
    /// node leaves its subtree unreachable, which the traversal reports as
    /// [`MalformedReason::Disconnected`].
    pub fn from_parents(parents: &[Option<NodeId>]) -> Result<(Self, NodeId), MalformedTreeError> {
        let num_nodes = parents.len();
        if num_nodes == 0 {
            return Err(MalformedReason::Empty.into());
        }

        if let Some(node) = parents.iter().flatten().copied().find(|&p| p >= num_nodes) {
            return Err(MalformedReason::EndpointOutOfRange { node, num_nodes }.into());
        }

        let root = match parents.iter().position(Option::is_none) {
            Some(root) => root,
            None => return Err(MalformedReason::Cycle {
                node: find_parent_cycle(parents),
            }
            .into()),
        };

        let edges = parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (child, p)));
        let tree = Self::from_edges(num_nodes, edges)?;
        Ok((tree, root))
    }
}

fn normalize(neighbors: &mut [Vec<NodeId>]) {
    for list in neighbors.iter_mut() {
        list.sort_unstable();
        list.dedup();
    }
}

/// Follow parent links from node 0 until a node repeats.
///
/// Only called when every node has an in-range parent, so the walk
/// cannot end without repeating.
fn find_parent_cycle(parents: &[Option<NodeId>]) -> NodeId {
    let mut seen = bitvec![0; parents.len()];
    let mut node = 0;
    while !seen[node] {
        seen.set(node, true);
        match parents[node] {
            Some(parent) => node = parent,
            None => break,
        }
    }
    node
}
