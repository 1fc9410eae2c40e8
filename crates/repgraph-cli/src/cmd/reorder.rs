//! Implementation of `repgraph reorder <file> --graph ID`.
//!
//! Renumbers the nodes of one graph by anchor order (unanchored nodes last),
//! dropping dangling edges, and prints the result.
//!
//! Output (human mode): a `NODE` table (`ID`, `LABEL`, `ANCHOR`) followed by
//! an `EDGE` table (`SOURCE`, `TARGET`, `LABEL`).
//! Output (JSON mode): the reordered graph as one MRP JSON object.
//!
//! Exit codes: 0 = success, 1 = unknown graph, 2 = input error.
use repgraph_core::{Corpus, GraphId, SentenceGraph, to_json};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `reorder` command.
///
/// # Errors
///
/// - [`CliError::GraphNotFound`] if `graph` is not in `corpus`.
/// - [`CliError::ParseFailed`] if the reordered graph cannot be serialized.
pub fn run(corpus: &Corpus, graph: &str, format: &OutputFormat) -> Result<(), CliError> {
    let reordered = corpus.graph(&GraphId::from(graph))?.reordered_by_anchor();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &reordered),
        OutputFormat::Json => {
            use std::io::Write as _;
            let json = to_json(&reordered)?;
            writeln!(out, "{json}")
        }
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, graph: &SentenceGraph) -> std::io::Result<()> {
    writeln!(w, "ID\tLABEL\tANCHOR")?;
    for node in graph.nodes().values() {
        let anchor = node
            .anchors
            .first()
            .map_or_else(|| "-".to_owned(), |a| format!("{}:{}", a.from, a.end));
        writeln!(w, "{}\t{}\t{anchor}", node.id, node.label)?;
    }
    writeln!(w)?;
    writeln!(w, "SOURCE\tTARGET\tLABEL")?;
    for edge in graph.edges() {
        writeln!(w, "{}\t{}\t{}", edge.source, edge.target, edge.label)?;
    }
    Ok(())
}
