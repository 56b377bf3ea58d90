use std::collections::HashSet;

use blake3::hash;
use lca_rmq::{LcaIndex, Tree};

mod common;

#[test]
fn fingerprint_ignores_edge_order_and_orientation() {
    let edges = common::scrambled_edges(500);

    let mut fingerprints = HashSet::new();
    for variant in 0..5 {
        let mut reordered = edges.clone();
        reordered.rotate_left(variant * 37);
        if variant % 2 == 1 {
            reordered.reverse();
            for edge in &mut reordered {
                *edge = (edge.1, edge.0);
            }
        }
        let index = LcaIndex::build(&Tree::from_edges(500, reordered).unwrap()).unwrap();
        fingerprints.insert(index.fingerprint());
    }

    assert_eq!(fingerprints.len(), 1, "tours diverged across input orderings");
}

#[test]
fn query_output_is_deterministic() {
    let tree = Tree::from_edges(300, common::binary_edges(300)).unwrap();

    let mut digests = HashSet::new();
    for _ in 0..5 {
        let index = LcaIndex::build(&tree).unwrap();
        let mut rendered = String::new();
        for u in (0..300).step_by(7) {
            for v in (0..300).step_by(11) {
                rendered.push_str(&format!("{u} {v} {}\n", index.query(u, v).unwrap()));
            }
        }
        digests.insert(hash(rendered.as_bytes()));
    }

    assert_eq!(digests.len(), 1, "outputs diverged across runs");
}
