//! Edge-list text format
//!
//! ```text
//! # comments and blank lines are ignored
//! 5        <- node count
//! 0 1      <- one undirected edge per line
//! 1 2
//! ```
//!
//! The node count may not exceed the number of edge lines plus one.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::tree::{MalformedTreeError, NodeId, Tree};

/// Failure reading or parsing an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// File could not be read.
    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No node count before end of input.
    #[error("edge list is missing the node count")]
    MissingNodeCount,

    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// Parsed edges do not form a valid graph.
    #[error(transparent)]
    Malformed(#[from] MalformedTreeError),
}

/// Parse the edge-list format into a [`Tree`].
pub fn parse_edge_list(text: &str) -> Result<Tree, EdgeListError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, strip_comment(line)))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count) = lines.next().ok_or(EdgeListError::MissingNodeCount)?;
    let num_nodes: usize = count.parse().map_err(|_| EdgeListError::Syntax {
        line: count_line,
        message: format!("invalid node count '{count}'"),
    })?;

    let edges = lines
        .map(|(line, content)| parse_edge(line, content))
        .collect::<Result<Vec<_>, _>>()?;

    // A connected graph on `n` nodes needs `n - 1` edges; a larger count
    // cannot describe a tree and is rejected before allocating per node.
    if num_nodes > edges.len() + 1 {
        return Err(EdgeListError::Syntax {
            line: count_line,
            message: format!(
                "node count {num_nodes} too large for {} edges",
                edges.len()
            ),
        });
    }

    tracing::debug!(num_nodes, edges = edges.len(), "parsed edge list");
    Ok(Tree::from_edges(num_nodes, edges)?)
}

/// Read and parse an edge-list file.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<Tree, EdgeListError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| EdgeListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(&text)
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("").trim()
}

fn parse_edge(line: usize, content: &str) -> Result<(NodeId, NodeId), EdgeListError> {
    let syntax = |message: String| EdgeListError::Syntax { line, message };

    let mut fields = content.split_whitespace();
    let (Some(u), Some(v), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(syntax(format!("expected 'u v', found '{content}'")));
    };
    let u = u
        .parse()
        .map_err(|_| syntax(format!("invalid node id '{u}'")))?;
    let v = v
        .parse()
        .map_err(|_| syntax(format!("invalid node id '{v}'")))?;
    Ok((u, v))
}
