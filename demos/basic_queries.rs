//! Build an index over a small tree and print a few ancestors.

use lca_rmq::{IndexConfig, LcaIndex, Tree};

fn main() -> anyhow::Result<()> {
    //        0
    //      /   \
    //     1     2
    //    / \   / \
    //   3   4 5   6
    let tree = Tree::from_edges(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)])?;
    let index = LcaIndex::build(&tree)?;

    for (u, v) in [(3, 4), (3, 6), (5, 6), (4, 1)] {
        println!(
            "lca({u}, {v}) = {}  distance = {}",
            index.query(u, v)?,
            index.distance(u, v)?
        );
    }

    // Same tree, hung from a leaf.
    let rerooted = LcaIndex::build_with_config(&tree, &IndexConfig::rooted_at(6))?;
    println!("rooted at 6: lca(3, 5) = {}", rerooted.query(3, 5)?);
    println!("fingerprint: {}", rerooted.fingerprint().to_hex());

    Ok(())
}
