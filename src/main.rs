use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lca_rmq::io::read_edge_list;
use lca_rmq::{IndexConfig, LcaIndex, NodeId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lca-rmq", about = "Lowest common ancestor queries in O(1) via Euler tour + RMQ")]
struct Cli {
    /// Log construction details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer LCA queries against a tree.
    Query {
        /// Edge-list file (node count, then one `u v` edge per line).
        tree: PathBuf,
        /// Root node.
        #[arg(long, default_value_t = 0)]
        root: NodeId,
        /// File with one `u,v` (or `u v`) pair per line.
        #[arg(long)]
        pairs: Option<PathBuf>,
        /// Pairs given on the command line as `u,v`.
        #[arg(value_parser = parse_pair)]
        queries: Vec<(NodeId, NodeId)>,
    },
    /// Print statistics about the built index.
    Inspect {
        /// Edge-list file.
        tree: PathBuf,
        /// Root node.
        #[arg(long, default_value_t = 0)]
        root: NodeId,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            tree,
            root,
            pairs,
            queries,
        } => run_query(tree, root, pairs, queries)?,
        Commands::Inspect { tree, root } => run_inspect(tree, root)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_index(tree_path: &Path, root: NodeId) -> Result<LcaIndex> {
    let tree = read_edge_list(tree_path)
        .with_context(|| format!("failed to load tree from {}", tree_path.display()))?;
    let index = LcaIndex::build_with_config(&tree, &IndexConfig::rooted_at(root))
        .with_context(|| format!("failed to build index for {}", tree_path.display()))?;
    tracing::info!(
        nodes = index.num_nodes(),
        root = index.root(),
        "index built"
    );
    Ok(index)
}

fn run_query(
    tree_path: PathBuf,
    root: NodeId,
    pairs_path: Option<PathBuf>,
    mut queries: Vec<(NodeId, NodeId)>,
) -> Result<()> {
    let index = load_index(&tree_path, root)?;

    if let Some(path) = pairs_path {
        queries.extend(read_pairs_file(&path)?);
    }
    if queries.is_empty() {
        anyhow::bail!("no query pairs given");
    }

    for (u, v) in queries {
        let lca = index
            .query(u, v)
            .with_context(|| format!("query ({u}, {v}) failed"))?;
        println!("{u}\t{v}\t{lca}");
    }

    Ok(())
}

fn run_inspect(tree_path: PathBuf, root: NodeId) -> Result<()> {
    let index = load_index(&tree_path, root)?;
    let tour = index.tour();

    println!("nodes\t{}", index.num_nodes());
    println!("root\t{}", index.root());
    println!("tour_len\t{}", tour.len());
    println!("height\t{}", tour.height());
    println!("levels\t{}", index.sparse_table().num_levels());
    println!("fingerprint\t{}", index.fingerprint().to_hex());

    Ok(())
}

fn read_pairs_file(path: &Path) -> Result<Vec<(NodeId, NodeId)>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to open pairs file {}", path.display()))?;

    let mut pairs = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let pair = parse_pair(line)
            .map_err(|message| anyhow::anyhow!("{message} on line {}", line_no + 1))?;
        pairs.push(pair);
    }

    Ok(pairs)
}

fn parse_pair(text: &str) -> std::result::Result<(NodeId, NodeId), String> {
    let mut fields = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());

    match (fields.next(), fields.next(), fields.next()) {
        (Some(u), Some(v), None) => {
            let u = u.parse().map_err(|_| format!("invalid node id '{u}'"))?;
            let v = v.parse().map_err(|_| format!("invalid node id '{v}'"))?;
            Ok((u, v))
        }
        _ => Err(format!("expected 'u,v', found '{text}'")),
    }
}
