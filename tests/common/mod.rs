//! Shared tree builders and a parent-climbing LCA oracle.

#![allow(dead_code)]

use std::collections::VecDeque;

use lca_rmq::NodeId;

/// `0 - 1 - ... - (n-1)`.
pub fn path_edges(n: usize) -> Vec<(NodeId, NodeId)> {
    (1..n).map(|v| (v - 1, v)).collect()
}

/// Node 0 joined to every other node.
pub fn star_edges(n: usize) -> Vec<(NodeId, NodeId)> {
    (1..n).map(|v| (0, v)).collect()
}

/// Heap-shaped binary tree: parent of `v` is `(v - 1) / 2`.
pub fn binary_edges(n: usize) -> Vec<(NodeId, NodeId)> {
    (1..n).map(|v| ((v - 1) / 2, v)).collect()
}

/// Deterministic pseudo-random tree: parent of `v` is a hash of `v` mod `v`.
pub fn scrambled_edges(n: usize) -> Vec<(NodeId, NodeId)> {
    (1..n)
        .map(|v| {
            let mixed = (v as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 17;
            ((mixed % v as u64) as NodeId, v)
        })
        .collect()
}

/// Reference LCA by climbing parent pointers.
#[derive(Debug)]
pub struct NaiveLca {
    parent: Vec<Option<NodeId>>,
    depth: Vec<usize>,
}

impl NaiveLca {
    /// BFS from `root` over a known-good tree.
    pub fn new(n: usize, edges: &[(NodeId, NodeId)], root: NodeId) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for &(u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut parent = vec![None; n];
        let mut depth = vec![0; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([root]);
        seen[root] = true;

        while let Some(u) = queue.pop_front() {
            for &v in &adjacency[u] {
                if !seen[v] {
                    seen[v] = true;
                    parent[v] = Some(u);
                    depth[v] = depth[u] + 1;
                    queue.push_back(v);
                }
            }
        }

        Self { parent, depth }
    }

    pub fn depth(&self, v: NodeId) -> usize {
        self.depth[v]
    }

    pub fn parent(&self, v: NodeId) -> Option<NodeId> {
        self.parent[v]
    }

    pub fn lca(&self, mut u: NodeId, mut v: NodeId) -> NodeId {
        while self.depth[u] > self.depth[v] {
            u = self.parent[u].expect("non-root has a parent");
        }
        while self.depth[v] > self.depth[u] {
            v = self.parent[v].expect("non-root has a parent");
        }
        while u != v {
            u = self.parent[u].expect("non-root has a parent");
            v = self.parent[v].expect("non-root has a parent");
        }
        u
    }

    pub fn is_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.parent[node] {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    /// Every node on the tree path between `u` and `v`, endpoints included.
    pub fn path(&self, u: NodeId, v: NodeId) -> Vec<NodeId> {
        let top = self.lca(u, v);
        let mut nodes = Vec::new();
        for mut node in [u, v] {
            while node != top {
                nodes.push(node);
                node = self.parent[node].expect("below lca");
            }
        }
        nodes.push(top);
        nodes
    }
}
