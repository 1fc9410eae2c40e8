//! Implementation of `repgraph compare <file> A B`.
//!
//! Reports which nodes of graph `A` share a label with some node of `B`, and
//! which edges of `A` share a `(label, postLabel)` pair with some edge of
//! `B`. The comparison is one-directional.
//!
//! Exit codes: 0 = success, 1 = unknown graph, 2 = input error.
use repgraph_core::{Corpus, Edge, GraphComparison, GraphId, NodeId};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json;

/// Runs the `compare` command.
///
/// # Errors
///
/// Returns [`CliError::GraphNotFound`] if either graph is missing.
pub fn run(corpus: &Corpus, a: &str, b: &str, format: &OutputFormat) -> Result<(), CliError> {
    let cmp = corpus.compare(&GraphId::from(a), &GraphId::from(b))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &cmp),
        OutputFormat::Json => write_json(&mut out, &cmp),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, cmp: &GraphComparison) -> std::io::Result<()> {
    writeln!(w, "{} vs {}", cmp.left, cmp.right)?;
    writeln!(w, "similar nodes:   {}", node_list(&cmp.similar_nodes))?;
    writeln!(w, "unmatched nodes: {}", node_list(&cmp.unmatched_nodes))?;
    writeln!(w, "similar edges:   {}", edge_list(&cmp.similar_edges))?;
    writeln!(w, "unmatched edges: {}", edge_list(&cmp.unmatched_edges))?;
    Ok(())
}

fn node_list(nodes: &[NodeId]) -> String {
    if nodes.is_empty() {
        return "-".to_owned();
    }
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn edge_list(edges: &[Edge]) -> String {
    if edges.is_empty() {
        return "-".to_owned();
    }
    edges
        .iter()
        .map(|e| format!("{}-{}->{}", e.source, e.label, e.target))
        .collect::<Vec<_>>()
        .join(", ")
}
