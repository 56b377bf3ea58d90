//! Build and query benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lca_rmq::{IndexConfig, LcaIndex, NodeId, Tree};

fn path_edges(n: usize) -> Vec<(NodeId, NodeId)> {
    (1..n).map(|v| (v - 1, v)).collect()
}

fn scrambled_edges(n: usize) -> Vec<(NodeId, NodeId)> {
    (1..n)
        .map(|v| {
            let mixed = (v as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 17;
            ((mixed % v as u64) as NodeId, v)
        })
        .collect()
}

fn release_config() -> IndexConfig {
    IndexConfig::default().with_invariant_checks(false)
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 100_000] {
        for (shape, edges) in [("path", path_edges(n)), ("scrambled", scrambled_edges(n))] {
            let tree = Tree::from_edges(n, edges).expect("valid tree");
            group.bench_with_input(BenchmarkId::new(shape, n), &tree, |b, tree| {
                b.iter(|| LcaIndex::build_with_config(black_box(tree), &release_config()));
            });
        }
    }
    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let n = 100_000;
    let tree = Tree::from_edges(n, scrambled_edges(n)).expect("valid tree");
    let index = LcaIndex::build_with_config(&tree, &release_config()).expect("valid tree");
    let pairs: Vec<(NodeId, NodeId)> = (0..1_024)
        .map(|i| ((i * 7919) % n, (i * 104_729 + 17) % n))
        .collect();

    c.bench_function("query_1024_pairs_n=100000", |b| {
        b.iter(|| {
            for &(u, v) in &pairs {
                black_box(index.query(black_box(u), black_box(v)).ok());
            }
        });
    });
}

criterion_group!(benches, benchmark_build, benchmark_query);
criterion_main!(benches);
